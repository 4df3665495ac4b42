use std::path::{Path, PathBuf};

use super::error::AcquireError;

/// Transcodes an audio container the transcription service does not accept
/// into one it does, writing the result into `dest_dir`.
pub trait AudioConverter: Send {
    fn convert(&self, input: &Path, dest_dir: &Path) -> Result<PathBuf, AcquireError>;
}
