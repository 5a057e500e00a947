//! Share-artifact construction for QR Scores surveys.
//!
//! Turns a survey into something the platform share sheet can offer: a
//! single-page document carrying the survey's QR code, or the raw survey
//! link. The QR generator, document assembler, share sheet, and in-app
//! browser are collaborator traits; this crate owns only the construction
//! flow and its failure reporting.

pub mod artifact;
pub mod collaborators;
pub mod error;

pub use artifact::{
    ShareItem, open_survey_page, share_survey_document, share_survey_link, survey_document,
    survey_link,
};
pub use collaborators::{
    BrowserPresenter, DocumentAssembler, ImageSize, QR_IMAGE_SIZE, QrImageProvider, SharePresenter,
};
pub use error::{Result, ShareError};
