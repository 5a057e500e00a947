//! Wire codec for survey records.
//!
//! The wire shape is a flat JSON object: the `surveyType` discriminator, the
//! base fields (`_id`, `title`, `description`, `generatedUrl`, `isClosed`,
//! `isArchived`), and three nested objects (`surveyMetadata`, `options`,
//! `participants`) whose internal shape depends on the discriminator. The
//! serde derives on [`Survey`] realize this directly; the functions here are
//! the decode/encode entry points with the crate's error type.

use crate::error::Result;
use crate::survey::Survey;

/// Decode a single survey record.
///
/// An unrecognized `surveyType`, or a nested shape that does not match the
/// discriminator, is a [`SurveyError::MalformedRecord`].
///
/// [`SurveyError::MalformedRecord`]: crate::SurveyError::MalformedRecord
pub fn decode_survey(json: &str) -> Result<Survey> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a single survey record.
pub fn encode_survey(survey: &Survey) -> Result<String> {
    Ok(serde_json::to_string(survey)?)
}

/// Decode a server list payload (a JSON array of survey records).
pub fn decode_surveys(json: &str) -> Result<Vec<Survey>> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a list of survey records as a JSON array.
pub fn encode_surveys(surveys: &[Survey]) -> Result<String> {
    Ok(serde_json::to_string(surveys)?)
}
