//! Error types for Tessera

use thiserror::Error;

use crate::bitmap::ColorMode;

/// Main error type for Tessera operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid bitmap dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in bitmap of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Plane size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch { er: usize, ec: usize, ar: usize, ac: usize },

    #[error("{operation} does not support {mode} bitmaps")]
    UnsupportedColorMode {
        operation: &'static str,
        mode: ColorMode,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Tessera operations
pub type Result<T> = std::result::Result<T, Error>;
