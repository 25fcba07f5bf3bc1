//! Custom error types for nilakkal.

use std::net::AddrParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the nilakkal library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or decode an image file.
    #[error("failed to load image from {path}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an image file.
    #[error("failed to save image to {path}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output extension names a format without a full 8-bit alpha channel.
    #[error("cannot write transparency to {path}: {format} output has no 8-bit alpha channel")]
    UnsupportedOutputFormat { path: PathBuf, format: String },

    /// The listen address is not a valid `host:port`.
    #[error("invalid listen address {addr}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    /// IO error.
    #[error("IO error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for nilakkal operations.
pub type Result<T> = std::result::Result<T, Error>;
