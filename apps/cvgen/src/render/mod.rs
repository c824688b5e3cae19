//! Document engines: turn a `CvDocument` into downloadable bytes.
//!
//! `AppState` holds an `Arc<dyn DocumentEngine>`; the default is `DocxEngine`.
//! Rendering is CPU-bound and synchronous, so handlers call it inside
//! `tokio::task::spawn_blocking`.

pub mod docx;

pub use docx::DocxEngine;

use thiserror::Error;

use crate::document::CvDocument;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write document package: {0}")]
    Package(String),

    #[error("Failed to embed image: {0}")]
    Image(#[from] image::ImageError),
}

/// Serializes the engine-independent block model into a binary document.
pub trait DocumentEngine: Send + Sync {
    /// MIME type of the produced bytes.
    fn content_type(&self) -> &'static str;

    fn render(&self, document: &CvDocument) -> Result<Vec<u8>, RenderError>;
}
