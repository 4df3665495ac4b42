use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;
use tempfile::TempDir;

use crate::shared::constants::SUPPORTED_AUDIO_EXTENSIONS;

use super::domain::audio_converter::AudioConverter;
use super::domain::audio_downloader::AudioDownloader;
use super::domain::audio_source::AudioSource;
use super::domain::error::AcquireError;
use super::domain::link_checker::LinkChecker;
use super::domain::youtube;

/// A local, service-ready audio file. Downloaded or converted files live in
/// a temp directory owned by this value, so dropping it (on success and on
/// failure alike) removes them from disk.
#[derive(Debug)]
pub struct ResolvedAudio {
    pub path: PathBuf,
    _temp: Option<TempDir>,
}

impl ResolvedAudio {
    fn direct(path: PathBuf) -> Self {
        Self { path, _temp: None }
    }

    fn temporary(path: PathBuf, temp: TempDir) -> Self {
        Self {
            path,
            _temp: Some(temp),
        }
    }
}

/// Normalizes either input mode into a local audio file path.
///
/// Local files pass through when their container is supported and are
/// transcoded otherwise. URLs are validated (id shape, then a lightweight
/// existence check) before the external downloader runs. The cancellation
/// flag is honored between steps.
pub struct ResolveAudioUseCase {
    checker: Box<dyn LinkChecker>,
    downloader: Box<dyn AudioDownloader>,
    converter: Box<dyn AudioConverter>,
}

impl ResolveAudioUseCase {
    pub fn new(
        checker: Box<dyn LinkChecker>,
        downloader: Box<dyn AudioDownloader>,
        converter: Box<dyn AudioConverter>,
    ) -> Self {
        Self {
            checker,
            downloader,
            converter,
        }
    }

    pub fn execute(
        &self,
        source: &AudioSource,
        cancelled: &AtomicBool,
    ) -> Result<ResolvedAudio, AcquireError> {
        match source {
            AudioSource::LocalFile(path) => self.resolve_local(path.clone(), cancelled),
            AudioSource::Url(url) => self.resolve_url(url, cancelled),
        }
    }

    fn resolve_local(
        &self,
        path: PathBuf,
        cancelled: &AtomicBool,
    ) -> Result<ResolvedAudio, AcquireError> {
        if !path.is_file() {
            return Err(AcquireError::FileNotFound(path));
        }
        if cancelled.load(Ordering::Relaxed) {
            return Err(AcquireError::Cancelled);
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());
        let supported = extension
            .as_deref()
            .is_some_and(|ext| SUPPORTED_AUDIO_EXTENSIONS.contains(&ext));

        if supported {
            return Ok(ResolvedAudio::direct(path));
        }

        info!("converting unsupported container: {}", path.display());
        let temp = TempDir::new()?;
        let converted = self.converter.convert(&path, temp.path())?;
        Ok(ResolvedAudio::temporary(converted, temp))
    }

    fn resolve_url(
        &self,
        url: &url::Url,
        cancelled: &AtomicBool,
    ) -> Result<ResolvedAudio, AcquireError> {
        let video_id = youtube::extract_video_id(url)
            .ok_or_else(|| AcquireError::InvalidUrl(url.to_string()))?;
        let watch_url = youtube::watch_url(&video_id);

        if cancelled.load(Ordering::Relaxed) {
            return Err(AcquireError::Cancelled);
        }
        if !self.checker.exists(&watch_url)? {
            return Err(AcquireError::Download(format!(
                "video {video_id} does not exist or is unavailable"
            )));
        }
        if cancelled.load(Ordering::Relaxed) {
            return Err(AcquireError::Cancelled);
        }

        info!("downloading audio for video {video_id}");
        let temp = TempDir::new()?;
        let downloaded = self.downloader.download(&watch_url, temp.path())?;
        Ok(ResolvedAudio::temporary(downloaded, temp))
    }
}
