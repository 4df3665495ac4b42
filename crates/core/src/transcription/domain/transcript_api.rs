use std::path::Path;
use std::time::Duration;

use thiserror::Error;

use super::job::{JobId, JobSnapshot};

#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("API key rejected by the transcription service")]
    Auth,
    #[error("upload failed: {0}")]
    Upload(String),
    #[error("service rate or usage limit exceeded")]
    Quota,
    #[error("transcription failed: {0}")]
    Remote(String),
    #[error("network failure: {0}")]
    Network(String),
    #[error("service returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("no terminal job status within {0:?}")]
    Timeout(Duration),
    #[error("cancelled")]
    Cancelled,
}

impl TranscribeError {
    /// Whether a retry could plausibly succeed. Connection-level failures
    /// are transient; everything the service said "no" to is permanent.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Abstraction over the remote speech-to-text service.
///
/// Implementations make network calls only; they never mutate local files
/// beyond reading the audio path handed to `upload`.
pub trait TranscriptApi: Send {
    /// Lightweight credential check before any upload is attempted.
    fn verify_credentials(&self) -> Result<bool, TranscribeError>;

    /// Upload the audio file, returning the service-side URL for it.
    fn upload(&self, audio_path: &Path) -> Result<String, TranscribeError>;

    /// Create a transcription job for previously uploaded audio.
    fn create_job(&self, audio_url: &str) -> Result<JobId, TranscribeError>;

    /// Fetch the current status (and, when terminal, text or error) of a job.
    fn job_status(&self, id: &JobId) -> Result<JobSnapshot, TranscribeError>;
}
