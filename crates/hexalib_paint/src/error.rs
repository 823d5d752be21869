//! Paint error types

use thiserror::Error;

/// Paint-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    /// A color component outside `0..=255`
    #[error("bad component value {0}")]
    ColorComponent(i32),
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
