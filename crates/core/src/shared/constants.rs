use std::time::Duration;

/// Audio containers the transcription service accepts directly.
/// Anything else goes through the converter first.
pub const SUPPORTED_AUDIO_EXTENSIONS: &[&str] =
    &["mp3", "wav", "m4a", "flac", "ogg", "opus", "webm", "aac"];

pub const ASSEMBLYAI_BASE_URL: &str = "https://api.assemblyai.com/v2";
pub const YOUTUBE_OEMBED_URL: &str = "https://www.youtube.com/oembed";

/// Delay between job status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);
/// Absolute cap on one transcription job, independent of cancellation.
pub const DEFAULT_JOB_TIMEOUT: Duration = Duration::from_secs(10 * 60);
/// Request timeout for the lightweight URL existence check.
pub const LINK_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Chunk size for streaming the audio file to the upload endpoint.
pub const UPLOAD_CHUNK_SIZE: usize = 5 * 1024 * 1024;
