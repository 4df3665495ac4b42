use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, warn};

use crate::shared::clock::Clock;
use crate::shared::constants::{DEFAULT_JOB_TIMEOUT, DEFAULT_POLL_INTERVAL};
use crate::shared::retry::RetryPolicy;

use super::job::{JobId, JobStatus};
use super::transcript_api::{TranscribeError, TranscriptApi};

/// Drives a submitted job to a terminal status.
///
/// Polls at a fixed interval under an absolute deadline. Transient network
/// failures are retried with capped exponential backoff; permanent API
/// errors surface immediately. The cancellation flag is checked on every
/// iteration, so a cancel request is honored within one poll interval.
pub struct JobPoller {
    pub poll_interval: Duration,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for JobPoller {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_JOB_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

impl JobPoller {
    /// Poll until `id` reaches a terminal status and return the transcript
    /// text. The job status is monotonic, so the first terminal snapshot is
    /// final.
    pub fn await_completion(
        &self,
        api: &dyn TranscriptApi,
        id: &JobId,
        clock: &dyn Clock,
        cancelled: &AtomicBool,
    ) -> Result<String, TranscribeError> {
        let deadline = clock.now() + self.timeout;
        let mut transient_failures: u32 = 0;

        loop {
            if cancelled.load(Ordering::Relaxed) {
                return Err(TranscribeError::Cancelled);
            }
            if clock.now() >= deadline {
                return Err(TranscribeError::Timeout(self.timeout));
            }

            match api.job_status(id) {
                Ok(snapshot) => {
                    transient_failures = 0;
                    debug!("job {id}: status {:?}", snapshot.status);
                    match snapshot.status {
                        JobStatus::Completed => {
                            return Ok(snapshot.text.unwrap_or_default());
                        }
                        JobStatus::Error => {
                            let message = snapshot
                                .error
                                .unwrap_or_else(|| "unknown service error".to_string());
                            return Err(TranscribeError::Remote(message));
                        }
                        JobStatus::Queued | JobStatus::Processing => {
                            clock.sleep(self.poll_interval);
                        }
                    }
                }
                Err(e) if e.is_transient() => {
                    if self.retry.attempts_exhausted(transient_failures) {
                        return Err(e);
                    }
                    let delay = self.retry.delay_for(transient_failures);
                    warn!("job {id}: transient poll failure, retrying in {delay:?}: {e}");
                    transient_failures += 1;
                    clock.sleep(delay);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
