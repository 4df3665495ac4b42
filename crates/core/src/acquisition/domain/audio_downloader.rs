use std::path::{Path, PathBuf};

use super::error::AcquireError;

/// Extracts the audio track of a remote video into `dest_dir` and returns
/// the downloaded file's path. Implementations own mapping their tool's
/// failure modes into `AcquireError`.
pub trait AudioDownloader: Send {
    fn download(&self, video_url: &str, dest_dir: &Path) -> Result<PathBuf, AcquireError>;
}
