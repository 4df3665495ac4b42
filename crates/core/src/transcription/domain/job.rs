/// Opaque job identifier assigned by the transcription service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote job state. `Completed` and `Error` are terminal: once reported,
/// the service never moves the job back to a pending state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

impl JobStatus {
    /// Parse the service's status string. The service has used both
    /// "queued" and "queue" for the pending state.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "queued" | "queue" => Some(Self::Queued),
            "processing" => Some(Self::Processing),
            "completed" => Some(Self::Completed),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

/// One polled view of a job: status plus, on completion, the transcript
/// text, or on failure the service-reported error message.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    pub id: JobId,
    pub status: JobStatus,
    pub text: Option<String>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("queued", JobStatus::Queued)]
    #[case("queue", JobStatus::Queued)]
    #[case("processing", JobStatus::Processing)]
    #[case("completed", JobStatus::Completed)]
    #[case("error", JobStatus::Error)]
    fn test_parse_known_statuses(#[case] raw: &str, #[case] expected: JobStatus) {
        assert_eq!(JobStatus::parse(raw), Some(expected));
    }

    #[test]
    fn test_parse_unknown_status() {
        assert_eq!(JobStatus::parse("exploded"), None);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Error.is_terminal());
        assert!(!JobStatus::Queued.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
    }
}
