use speck_removal::SpeckError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("Speck removal error: {0}")]
    Speck(#[from] SpeckError),

    #[error("Short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
