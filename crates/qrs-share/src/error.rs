use thiserror::Error;
use url::Url;

/// Errors from the share-artifact construction flow.
///
/// Each step that can fail has its own variant, so callers see which stage
/// aborted the construction instead of a single absent value. All of these
/// are soft failures: the flow is abandoned, nothing panics.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The QR provider produced no image for the survey's generated URL.
    #[error("QR image generation failed for {url}")]
    QrGeneration {
        /// The URL the QR code would have encoded.
        url: Url,
    },

    /// The document assembler rejected the page layout.
    #[error("page layout failed: {0}")]
    PageLayout(String),

    /// The assembled document produced no serialized bytes.
    #[error("document serialization produced no data")]
    DocumentSerialization,
}

/// Result type alias for share operations.
pub type Result<T> = std::result::Result<T, ShareError>;
