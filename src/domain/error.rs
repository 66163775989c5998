// Error taxonomy for the export pipeline

use thiserror::Error;

/// Every failure an export call can surface. All variants are recoverable
/// and single-shot; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("missing required query parameter: {0}")]
    MissingParameter(&'static str),

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("render request failed with status {code}: {status}")]
    HttpStatus { code: u16, status: String },

    #[error("image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),
}
