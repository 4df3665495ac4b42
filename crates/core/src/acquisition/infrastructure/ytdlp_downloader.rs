use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::acquisition::domain::audio_downloader::AudioDownloader;
use crate::acquisition::domain::error::AcquireError;

const OUTPUT_STEM: &str = "audio";

/// Downloads the best available audio track with the external `yt-dlp`
/// tool. The tool picks the container, so the produced file is located by
/// its fixed stem afterwards.
pub struct YtDlpDownloader {
    binary: String,
}

impl YtDlpDownloader {
    pub fn new() -> Self {
        Self::with_binary("yt-dlp")
    }

    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn map_failure(stderr: &str) -> AcquireError {
        let summary = stderr.lines().last().unwrap_or("yt-dlp failed").to_string();
        if stderr.contains("Unsupported URL") || stderr.contains("is not a valid URL") {
            AcquireError::InvalidUrl(summary)
        } else if stderr.contains("Requested format is not available") {
            AcquireError::UnsupportedFormat(summary)
        } else {
            AcquireError::Download(summary)
        }
    }

    fn find_output(dest_dir: &Path) -> Result<PathBuf, AcquireError> {
        for entry in std::fs::read_dir(dest_dir)? {
            let path = entry?.path();
            let stem = path.file_stem().and_then(|s| s.to_str());
            if stem == Some(OUTPUT_STEM) && path.is_file() {
                return Ok(path);
            }
        }
        Err(AcquireError::Download(
            "downloader produced no output file".to_string(),
        ))
    }
}

impl Default for YtDlpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDownloader for YtDlpDownloader {
    fn download(&self, video_url: &str, dest_dir: &Path) -> Result<PathBuf, AcquireError> {
        let template = dest_dir.join(format!("{OUTPUT_STEM}.%(ext)s"));
        debug!("running {} for {video_url}", self.binary);

        let output = Command::new(&self.binary)
            .arg("--format")
            .arg("bestaudio/best")
            .arg("--no-playlist")
            .arg("--quiet")
            .arg("--no-warnings")
            .arg("--output")
            .arg(&template)
            .arg(video_url)
            .output()
            .map_err(|e| {
                AcquireError::Download(format!("failed to run {}: {e}", self.binary))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Self::map_failure(&stderr));
        }

        Self::find_output(dest_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_binary_maps_to_download_error() {
        let tmp = TempDir::new().unwrap();
        let downloader = YtDlpDownloader::with_binary("yt-dlp-definitely-not-installed");
        let err = downloader
            .download("https://www.youtube.com/watch?v=abc", tmp.path())
            .unwrap_err();
        assert!(matches!(err, AcquireError::Download(_)));
    }

    #[test]
    fn test_map_failure_unsupported_url() {
        let err = YtDlpDownloader::map_failure("ERROR: Unsupported URL: https://example.com");
        assert!(matches!(err, AcquireError::InvalidUrl(_)));
    }

    #[test]
    fn test_map_failure_unavailable_format() {
        let err = YtDlpDownloader::map_failure("ERROR: Requested format is not available");
        assert!(matches!(err, AcquireError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_map_failure_generic() {
        let err = YtDlpDownloader::map_failure("ERROR: Video unavailable");
        assert!(matches!(err, AcquireError::Download(_)));
    }

    #[test]
    fn test_find_output_locates_downloaded_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("audio.webm"), b"data").unwrap();
        let found = YtDlpDownloader::find_output(tmp.path()).unwrap();
        assert_eq!(found, tmp.path().join("audio.webm"));
    }

    #[test]
    fn test_find_output_empty_dir_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            YtDlpDownloader::find_output(tmp.path()),
            Err(AcquireError::Download(_))
        ));
    }
}
