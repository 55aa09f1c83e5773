//! Error types for the ibandetect-core library.

use thiserror::Error;

/// Main error type for the ibandetect library.
///
/// The extraction and formatting rules themselves are total functions and
/// never fail; errors only arise at the OCR, image, and configuration
/// boundaries.
#[derive(Error, Debug)]
pub enum DetectError {
    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the ibandetect library.
pub type Result<T> = std::result::Result<T, DetectError>;
