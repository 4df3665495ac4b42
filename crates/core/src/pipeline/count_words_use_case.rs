use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::info;

use crate::acquisition::domain::audio_source::AudioSource;
use crate::acquisition::resolve_use_case::ResolveAudioUseCase;
use crate::shared::clock::Clock;
use crate::text::domain::normalizer;
use crate::text::domain::word_counter::WordFrequencyTable;
use crate::transcription::domain::poller::JobPoller;
use crate::transcription::domain::transcript_api::TranscriptApi;

use super::error::PipelineError;
use super::stage::Stage;

/// Orchestrates one full run: acquire audio, drive the remote transcription
/// job to completion, normalize the transcript, tally word frequencies.
///
/// Stages run strictly in sequence; the first failure short-circuits with
/// its typed cause. Temp audio files are owned by the resolved source and
/// removed when the run ends, success or failure.
pub struct CountWordsUseCase {
    resolver: ResolveAudioUseCase,
    api: Box<dyn TranscriptApi>,
    poller: JobPoller,
    clock: Box<dyn Clock>,
    on_progress: Option<Box<dyn Fn(Stage) + Send>>,
    cancelled: Arc<AtomicBool>,
}

impl CountWordsUseCase {
    pub fn new(
        resolver: ResolveAudioUseCase,
        api: Box<dyn TranscriptApi>,
        poller: JobPoller,
        clock: Box<dyn Clock>,
        on_progress: Option<Box<dyn Fn(Stage) + Send>>,
        cancelled: Option<Arc<AtomicBool>>,
    ) -> Self {
        Self {
            resolver,
            api,
            poller,
            clock,
            on_progress,
            cancelled: cancelled.unwrap_or_else(|| Arc::new(AtomicBool::new(false))),
        }
    }

    pub fn execute(&self, source: &AudioSource) -> Result<WordFrequencyTable, PipelineError> {
        self.progress(Stage::Acquiring);
        let resolved = self.resolver.execute(source, &self.cancelled)?;
        self.check_cancelled()?;

        self.progress(Stage::Uploading);
        if !self.api.verify_credentials()? {
            return Err(PipelineError::Auth);
        }
        let audio_url = self.api.upload(&resolved.path)?;
        self.check_cancelled()?;
        let job_id = self.api.create_job(&audio_url)?;
        info!("transcription job {job_id} submitted");

        self.progress(Stage::Transcribing);
        let transcript = self.poller.await_completion(
            self.api.as_ref(),
            &job_id,
            self.clock.as_ref(),
            &self.cancelled,
        )?;
        self.check_cancelled()?;

        self.progress(Stage::Counting);
        let table = WordFrequencyTable::from_tokens(normalizer::tokens(&transcript));
        info!(
            "counted {} tokens, {} distinct words",
            table.total(),
            table.distinct()
        );
        Ok(table)
    }

    fn progress(&self, stage: Stage) {
        if let Some(ref cb) = self.on_progress {
            cb(stage);
        }
    }

    fn check_cancelled(&self) -> Result<(), PipelineError> {
        if self.cancelled.load(Ordering::Relaxed) {
            Err(PipelineError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::domain::audio_converter::AudioConverter;
    use crate::acquisition::domain::audio_downloader::AudioDownloader;
    use crate::acquisition::domain::error::AcquireError;
    use crate::acquisition::domain::link_checker::LinkChecker;
    use crate::shared::clock::fake::FakeClock;
    use crate::transcription::domain::job::{JobId, JobSnapshot, JobStatus};
    use crate::transcription::domain::transcript_api::TranscribeError;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    struct NoopChecker;
    impl LinkChecker for NoopChecker {
        fn exists(&self, _video_url: &str) -> Result<bool, AcquireError> {
            Ok(true)
        }
    }

    struct NoopDownloader;
    impl AudioDownloader for NoopDownloader {
        fn download(&self, _video_url: &str, dest_dir: &Path) -> Result<PathBuf, AcquireError> {
            let path = dest_dir.join("audio.mp3");
            std::fs::write(&path, b"audio")?;
            Ok(path)
        }
    }

    struct NoopConverter;
    impl AudioConverter for NoopConverter {
        fn convert(&self, _input: &Path, dest_dir: &Path) -> Result<PathBuf, AcquireError> {
            let path = dest_dir.join("converted.mp3");
            std::fs::write(&path, b"audio")?;
            Ok(path)
        }
    }

    /// API double that accepts the upload and completes the job with a
    /// fixed transcript after one processing poll.
    struct HappyApi {
        transcript: &'static str,
        valid_key: bool,
        polled: Mutex<u32>,
    }

    impl TranscriptApi for HappyApi {
        fn verify_credentials(&self) -> Result<bool, TranscribeError> {
            Ok(self.valid_key)
        }

        fn upload(&self, audio_path: &Path) -> Result<String, TranscribeError> {
            assert!(audio_path.exists());
            Ok("https://cdn.example/upload/1".to_string())
        }

        fn create_job(&self, _audio_url: &str) -> Result<JobId, TranscribeError> {
            Ok(JobId::new("job-1"))
        }

        fn job_status(&self, id: &JobId) -> Result<JobSnapshot, TranscribeError> {
            let mut polled = self.polled.lock().unwrap();
            *polled += 1;
            let status = if *polled > 1 {
                JobStatus::Completed
            } else {
                JobStatus::Processing
            };
            Ok(JobSnapshot {
                id: id.clone(),
                status,
                text: (status == JobStatus::Completed).then(|| self.transcript.to_string()),
                error: None,
            })
        }
    }

    fn resolver() -> ResolveAudioUseCase {
        ResolveAudioUseCase::new(
            Box::new(NoopChecker),
            Box::new(NoopDownloader),
            Box::new(NoopConverter),
        )
    }

    fn local_source(dir: &tempfile::TempDir) -> AudioSource {
        let path = dir.path().join("talk.mp3");
        std::fs::write(&path, b"audio").unwrap();
        AudioSource::from_path(path)
    }

    #[test]
    fn test_full_run_counts_transcript_words() {
        let dir = tempfile::TempDir::new().unwrap();
        let stages: Arc<Mutex<Vec<Stage>>> = Arc::new(Mutex::new(Vec::new()));
        let stages_cb = stages.clone();

        let use_case = CountWordsUseCase::new(
            resolver(),
            Box::new(HappyApi {
                transcript: "the cat sat on the mat",
                valid_key: true,
                polled: Mutex::new(0),
            }),
            JobPoller::default(),
            Box::new(FakeClock::new()),
            Some(Box::new(move |stage| {
                stages_cb.lock().unwrap().push(stage);
            })),
            None,
        );

        let table = use_case.execute(&local_source(&dir)).unwrap();
        assert_eq!(table.count("the"), 2);
        assert_eq!(table.total(), 6);
        assert_eq!(
            *stages.lock().unwrap(),
            vec![
                Stage::Acquiring,
                Stage::Uploading,
                Stage::Transcribing,
                Stage::Counting
            ]
        );
    }

    #[test]
    fn test_rejected_credential_stops_before_upload() {
        let dir = tempfile::TempDir::new().unwrap();
        let use_case = CountWordsUseCase::new(
            resolver(),
            Box::new(HappyApi {
                transcript: "",
                valid_key: false,
                polled: Mutex::new(0),
            }),
            JobPoller::default(),
            Box::new(FakeClock::new()),
            None,
            None,
        );

        let err = use_case.execute(&local_source(&dir)).unwrap_err();
        assert!(matches!(err, PipelineError::Auth));
    }

    #[test]
    fn test_cancelled_flag_short_circuits_run() {
        let dir = tempfile::TempDir::new().unwrap();
        let cancelled = Arc::new(AtomicBool::new(true));
        let use_case = CountWordsUseCase::new(
            resolver(),
            Box::new(HappyApi {
                transcript: "never reached",
                valid_key: true,
                polled: Mutex::new(0),
            }),
            JobPoller::default(),
            Box::new(FakeClock::new()),
            None,
            Some(cancelled),
        );

        let err = use_case.execute(&local_source(&dir)).unwrap_err();
        assert!(matches!(err, PipelineError::Cancelled));
    }

    #[test]
    fn test_remote_error_surfaces_with_message() {
        struct FailingApi;
        impl TranscriptApi for FailingApi {
            fn verify_credentials(&self) -> Result<bool, TranscribeError> {
                Ok(true)
            }
            fn upload(&self, _audio_path: &Path) -> Result<String, TranscribeError> {
                Ok("url".to_string())
            }
            fn create_job(&self, _audio_url: &str) -> Result<JobId, TranscribeError> {
                Ok(JobId::new("job-2"))
            }
            fn job_status(&self, id: &JobId) -> Result<JobSnapshot, TranscribeError> {
                Ok(JobSnapshot {
                    id: id.clone(),
                    status: JobStatus::Error,
                    text: None,
                    error: Some("unsupported audio codec".to_string()),
                })
            }
        }

        let dir = tempfile::TempDir::new().unwrap();
        let use_case = CountWordsUseCase::new(
            resolver(),
            Box::new(FailingApi),
            JobPoller::default(),
            Box::new(FakeClock::new()),
            None,
            None,
        );

        let err = use_case.execute(&local_source(&dir)).unwrap_err();
        match err {
            PipelineError::Transcription(msg) => assert_eq!(msg, "unsupported audio codec"),
            other => panic!("expected Transcription, got {other:?}"),
        }
    }
}
