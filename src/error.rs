use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when addressing the bead grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({column}, {row}) is outside the {size}x{size} grid")]
    OutOfBounds {
        column: usize,
        row: usize,
        size: usize,
    },
}

/// Errors that can occur while exporting a design to disk
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create a {width}x{height} pixmap")]
    PixmapCreationFailed { width: u32, height: u32 },

    #[error("Rendered pixels do not fill a {width}x{height} image")]
    BufferSizeMismatch { width: u32, height: u32 },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Errors produced when reading a color from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("Expected 3 or 6 hex digits: {0:?}")]
    InvalidLength(String),

    #[error("Invalid hex digit in {0:?}")]
    InvalidDigit(String),
}
