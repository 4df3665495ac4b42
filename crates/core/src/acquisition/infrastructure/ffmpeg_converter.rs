use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::acquisition::domain::audio_converter::AudioConverter;
use crate::acquisition::domain::error::AcquireError;

/// Transcodes arbitrary audio/video containers to MP3 with the external
/// `ffmpeg` tool, for inputs the transcription service rejects directly.
pub struct FfmpegConverter {
    binary: String,
}

impl FfmpegConverter {
    pub fn new() -> Self {
        Self::with_binary("ffmpeg")
    }

    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for FfmpegConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioConverter for FfmpegConverter {
    fn convert(&self, input: &Path, dest_dir: &Path) -> Result<PathBuf, AcquireError> {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("converted");
        let output_path = dest_dir.join(format!("{stem}.mp3"));
        debug!("converting {} to {}", input.display(), output_path.display());

        let output = Command::new(&self.binary)
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg("-vn")
            .arg(&output_path)
            .output()
            .map_err(|e| {
                AcquireError::UnsupportedFormat(format!("failed to run {}: {e}", self.binary))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let summary = stderr.lines().last().unwrap_or("conversion failed");
            return Err(AcquireError::UnsupportedFormat(summary.to_string()));
        }

        Ok(output_path)
    }
}
