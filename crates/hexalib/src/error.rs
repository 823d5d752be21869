//! Error types for hexalib

use hexalib_paint::PaintError;
use hexalib_platform::{PlatformError, QueueClosed};
use thiserror::Error;

/// Hexalib error type
#[derive(Error, Debug)]
pub enum HexalibError {
    /// The window is gone: drawing and mouse waits fail from now on
    #[error("Window closed")]
    Closed,

    #[error("Platform error: {0}")]
    Platform(PlatformError),

    #[error("Paint error: {0}")]
    Paint(#[from] PaintError),

    /// The application function returned an error
    #[error("Application error: {0:#}")]
    App(anyhow::Error),

    /// The application function panicked
    #[error("Application panicked: {0}")]
    AppPanicked(String),
}

impl From<PlatformError> for HexalibError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::Closed => HexalibError::Closed,
            other => HexalibError::Platform(other),
        }
    }
}

impl From<QueueClosed> for HexalibError {
    fn from(_: QueueClosed) -> Self {
        HexalibError::Closed
    }
}

/// Result type for hexalib operations
pub type Result<T> = std::result::Result<T, HexalibError>;
