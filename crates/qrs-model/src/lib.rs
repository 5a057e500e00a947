//! Survey data model for QR Scores.
//!
//! A survey is a shareable poll identified by a generated URL, scannable as
//! a QR code. This crate models the four survey variants as a closed sum
//! type, exposes variant dispatch over it, and provides the JSON wire codec
//! used when syncing with the server.

pub mod codec;
pub mod error;
pub mod survey;
pub mod variants;

pub use codec::{decode_survey, decode_surveys, encode_survey, encode_surveys};
pub use error::{Result, SurveyError};
pub use survey::{Survey, SurveyBase, SurveyKind};
pub use variants::{
    EmptyMetadata, LikeOrDislikeParticipants, LikeOrDislikeSurvey, ScanToVoteParticipants,
    ScanToVoteSurvey, SliderAverageMetadata, SliderAverageParticipants, SliderAverageSurvey,
    SliderHistogramMetadata, SliderHistogramParticipants, SliderHistogramSurvey, SliderLabel,
    SurveyOptions,
};
