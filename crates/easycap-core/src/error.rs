//! Error types for easycap

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaptchaError>;

/// Main error type for easycap
///
/// Every variant is terminal for the render call that produced it.
#[derive(Debug, Error)]
pub enum CaptchaError {
    #[error("the required font is not found: {0}")]
    FontNotFound(String),

    #[error("the captcha string is required")]
    StringRequired,

    #[error("create captcha image failed: {0}")]
    CaptchaCreationFailed(#[from] RenderError),

    #[error("captcha variant not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures inside the imaging backend
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid font data: {0}")]
    InvalidFont(String),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to allocate a {width}x{height} canvas")]
    PixmapCreationFailed { width: u32, height: u32 },

    #[error("Failed to extract outline for glyph {0}")]
    OutlineExtractionFailed(u32),

    #[error("Cannot lay out an empty glyph sequence")]
    EmptyLayout,
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Format not supported: {0}")]
    FormatNotSupported(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
