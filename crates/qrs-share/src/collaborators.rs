//! Collaborator interfaces consumed by the share flow.
//!
//! These traits mirror the platform services the application hands a survey
//! to: a QR image generator, a single-page document assembler, the share
//! sheet, and the in-app browser. The presenting surface is always passed
//! explicitly as a parameter; nothing here captures a presenter.

use image::DynamicImage;
use url::Url;

use crate::artifact::ShareItem;
use crate::error::Result;

/// A page-image extent in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The fixed extent of the QR image on the shared document page.
pub const QR_IMAGE_SIZE: ImageSize = ImageSize::new(64, 64);

/// Generates a QR image encoding a survey's shareable link.
pub trait QrImageProvider {
    /// Returns `None` when no image can be generated for the URL
    /// (a malformed or over-long payload, typically).
    fn generate(&self, url: &Url) -> Option<DynamicImage>;
}

/// Lays out pages and serializes the finished document.
pub trait DocumentAssembler {
    /// Place an image at the given extent on a new page.
    ///
    /// Implementors report layout rejections as
    /// [`ShareError::PageLayout`](crate::ShareError::PageLayout).
    fn add_page(&mut self, image: &DynamicImage, size: ImageSize) -> Result<()>;

    /// Serialize the assembled document, or `None` when the backend yields
    /// no bytes.
    fn serialize(self) -> Option<Vec<u8>>;
}

/// The platform share sheet: receives the items to offer for sharing.
pub trait SharePresenter {
    fn present(&mut self, items: Vec<ShareItem>);
}

/// The in-app browser surface.
pub trait BrowserPresenter {
    fn open(&mut self, url: &Url);
}
