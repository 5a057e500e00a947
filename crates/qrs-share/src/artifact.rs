//! Share-artifact construction: QR document and link items for a survey.

use qrs_model::Survey;
use url::Url;

use crate::collaborators::{
    BrowserPresenter, DocumentAssembler, QR_IMAGE_SIZE, QrImageProvider, SharePresenter,
};
use crate::error::{Result, ShareError};

/// Something the share sheet can offer: a serialized single-page QR
/// document, or the survey's raw link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareItem {
    Document(Vec<u8>),
    Link(Url),
}

/// Build the shareable QR document for a survey.
///
/// Requests a QR image for the survey's generated URL, lays it out on a
/// single page at [`QR_IMAGE_SIZE`], and serializes the document. Each
/// failing step aborts the construction with its own [`ShareError`] variant
/// and a diagnostic log line.
pub fn survey_document(
    survey: &Survey,
    provider: &impl QrImageProvider,
    mut assembler: impl DocumentAssembler,
) -> Result<ShareItem> {
    let url = survey.generated_url();
    let Some(qr_image) = provider.generate(url) else {
        tracing::warn!(survey_id = survey.id(), %url, "no QR image for survey link");
        return Err(ShareError::QrGeneration { url: url.clone() });
    };

    if let Err(err) = assembler.add_page(&qr_image, QR_IMAGE_SIZE) {
        tracing::warn!(survey_id = survey.id(), error = %err, "QR page layout failed");
        return Err(err);
    }

    let Some(bytes) = assembler.serialize() else {
        tracing::warn!(survey_id = survey.id(), "assembled document yielded no bytes");
        return Err(ShareError::DocumentSerialization);
    };

    Ok(ShareItem::Document(bytes))
}

/// The survey's link as a shareable item. Infallible.
pub fn survey_link(survey: &Survey) -> ShareItem {
    ShareItem::Link(survey.generated_url().clone())
}

/// Build the QR document for a survey and hand it to the share sheet.
///
/// A construction failure aborts before presentation and surfaces the error
/// to the caller; nothing is presented.
pub fn share_survey_document(
    survey: &Survey,
    provider: &impl QrImageProvider,
    assembler: impl DocumentAssembler,
    presenter: &mut impl SharePresenter,
) -> Result<()> {
    let item = survey_document(survey, provider, assembler)?;
    presenter.present(vec![item]);
    Ok(())
}

/// Hand the survey's raw link to the share sheet.
pub fn share_survey_link(survey: &Survey, presenter: &mut impl SharePresenter) {
    presenter.present(vec![survey_link(survey)]);
}

/// Open the survey's page in the in-app browser.
pub fn open_survey_page(survey: &Survey, browser: &mut impl BrowserPresenter) {
    tracing::debug!(survey_id = survey.id(), "opening survey page in browser");
    browser.open(survey.generated_url());
}
