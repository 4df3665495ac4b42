use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("not a valid video URL: {0}")]
    InvalidUrl(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("download failed: {0}")]
    Download(String),
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cancelled")]
    Cancelled,
}
