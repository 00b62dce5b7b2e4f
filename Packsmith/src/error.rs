//! Error types for `Packsmith`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `Packsmith` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Missing Input Errors ====================
    /// The template image for a batch does not exist.
    #[error("template image not found: {path}")]
    TemplateNotFound {
        /// The expected template path.
        path: PathBuf,
    },

    /// An image used as a palette source does not exist.
    #[error("palette source image not found: {path}")]
    PaletteSourceNotFound {
        /// The expected source image path.
        path: PathBuf,
    },

    /// An image exists but could not be opened or decoded.
    #[error("failed to open image {path}: {message}")]
    ImageOpenFailed {
        /// The image path.
        path: PathBuf,
        /// The decoder error message.
        message: String,
    },

    // ==================== Recolor Errors ====================
    /// No pixel of the template matched the region predicate.
    #[error("no {region} pixels found in template")]
    NoClassifiedPixels {
        /// Name of the region that was searched for.
        region: &'static str,
    },

    /// A palette used for nearest-rank mapping has no colors.
    #[error("palette is empty")]
    EmptyPalette,

    /// Failed to encode PNG image.
    #[error("failed to encode PNG: {message}")]
    PngEncodeFailed {
        /// The encoding error message.
        message: String,
    },

    // ==================== Configuration Errors ====================
    /// The batch configuration could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The batch configuration parsed but is not usable.
    #[error("invalid config: {message}")]
    ConfigInvalid {
        /// The validation error message.
        message: String,
    },

    /// A color value could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    // ==================== Pack Errors ====================
    /// ZIP archive error.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),

    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `Packsmith` operations.
pub type Result<T> = std::result::Result<T, Error>;
