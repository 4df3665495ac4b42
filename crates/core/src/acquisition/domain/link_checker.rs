use super::error::AcquireError;

/// Lightweight existence check for a remote video, without downloading it.
///
/// Front-ends run this on a worker thread so the check never blocks the
/// interactive context; cancellation is the caller's concern (the check is
/// a single bounded request).
pub trait LinkChecker: Send {
    /// `Ok(true)` if the video exists, `Ok(false)` if the service says it
    /// does not; `Err` only for network-level failure.
    fn exists(&self, video_url: &str) -> Result<bool, AcquireError>;
}
