use thiserror::Error;

/// Errors produced by the survey model and its wire codec.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// The wire payload could not be decoded into a survey record. This
    /// covers unrecognized `surveyType` discriminators as well as nested
    /// shapes that do not match the discriminator.
    #[error("malformed survey record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    /// A discriminator string did not name one of the four survey kinds.
    #[error("unknown survey type: {0}")]
    UnknownSurveyKind(String),
}

/// Result type alias for survey model operations.
pub type Result<T> = std::result::Result<T, SurveyError>;
