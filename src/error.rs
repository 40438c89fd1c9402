use std::io;

use thiserror::Error;

/// Top-level failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("unknown theme {name:?}; available themes: {available}")]
    UnknownTheme { name: String, available: String },
}
