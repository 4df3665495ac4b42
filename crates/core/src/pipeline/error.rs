use std::time::Duration;

use thiserror::Error;

use crate::acquisition::domain::error::AcquireError;
use crate::transcription::domain::transcript_api::TranscribeError;

/// The typed failure a pipeline run surfaces to its caller. Every stage
/// error maps into exactly one of these; the runner never swallows one.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("not a valid video URL: {0}")]
    InvalidUrl(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("download failed: {0}")]
    Download(String),
    #[error("API key rejected by the transcription service")]
    Auth,
    #[error("upload failed: {0}")]
    Upload(String),
    #[error("service rate or usage limit exceeded")]
    Quota,
    #[error("transcription failed: {0}")]
    Transcription(String),
    #[error("no result within {0:?}")]
    Timeout(Duration),
    #[error("a run is already in progress")]
    AlreadyRunning,
    #[error("cancelled")]
    Cancelled,
    #[error("io error: {0}")]
    Io(String),
}

impl PipelineError {
    /// Short kind label for UI display next to the full message.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "invalid URL",
            Self::UnsupportedFormat(_) => "unsupported format",
            Self::Download(_) => "download",
            Self::Auth => "authentication",
            Self::Upload(_) => "upload",
            Self::Quota => "quota",
            Self::Transcription(_) => "transcription",
            Self::Timeout(_) => "timeout",
            Self::AlreadyRunning => "already running",
            Self::Cancelled => "cancelled",
            Self::Io(_) => "io",
        }
    }
}

impl From<AcquireError> for PipelineError {
    fn from(e: AcquireError) -> Self {
        match e {
            AcquireError::InvalidUrl(url) => Self::InvalidUrl(url),
            AcquireError::UnsupportedFormat(msg) => Self::UnsupportedFormat(msg),
            AcquireError::Download(msg) => Self::Download(msg),
            AcquireError::FileNotFound(path) => Self::Io(format!("file not found: {}", path.display())),
            AcquireError::Io(e) => Self::Io(e.to_string()),
            AcquireError::Cancelled => Self::Cancelled,
        }
    }
}

impl From<TranscribeError> for PipelineError {
    fn from(e: TranscribeError) -> Self {
        match e {
            TranscribeError::Auth => Self::Auth,
            TranscribeError::Upload(msg) => Self::Upload(msg),
            TranscribeError::Quota => Self::Quota,
            TranscribeError::Remote(msg) => Self::Transcription(msg),
            TranscribeError::Network(msg) => Self::Transcription(format!("network failure: {msg}")),
            TranscribeError::Api { status, message } => {
                Self::Transcription(format!("HTTP {status}: {message}"))
            }
            TranscribeError::Timeout(d) => Self::Timeout(d),
            TranscribeError::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message_preserved() {
        let err: PipelineError =
            TranscribeError::Remote("unsupported audio codec".to_string()).into();
        assert_eq!(err.to_string(), "transcription failed: unsupported audio codec");
        assert_eq!(err.kind(), "transcription");
    }

    #[test]
    fn test_cancelled_maps_through_both_taxonomies() {
        assert!(matches!(
            PipelineError::from(AcquireError::Cancelled),
            PipelineError::Cancelled
        ));
        assert!(matches!(
            PipelineError::from(TranscribeError::Cancelled),
            PipelineError::Cancelled
        ));
    }

    #[test]
    fn test_invalid_url_maps_with_offending_input() {
        let err: PipelineError = AcquireError::InvalidUrl("not a url".to_string()).into();
        assert!(err.to_string().contains("not a url"));
        assert_eq!(err.kind(), "invalid URL");
    }
}
