use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::shared::api_key::ApiKey;
use crate::shared::constants::{ASSEMBLYAI_BASE_URL, UPLOAD_CHUNK_SIZE};
use crate::transcription::domain::job::{JobId, JobSnapshot, JobStatus};
use crate::transcription::domain::transcript_api::{TranscribeError, TranscriptApi};

#[derive(Serialize)]
struct CreateJobRequest<'a> {
    audio_url: &'a str,
    language_detection: bool,
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Deserialize)]
struct CreateJobResponse {
    id: String,
}

#[derive(Deserialize)]
struct StatusResponse {
    id: String,
    status: String,
    text: Option<String>,
    error: Option<String>,
}

/// Blocking client for the AssemblyAI v2 transcription API.
///
/// Network calls only; the audio path handed to `upload` is read, never
/// modified. Language detection is always requested since input may be in
/// any of the ~99 languages the service recognizes.
pub struct AssemblyAiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: ApiKey,
}

impl AssemblyAiClient {
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_base_url(api_key, ASSEMBLYAI_BASE_URL)
    }

    /// Base URL override for pointing at a local stub server in tests.
    pub fn with_base_url(api_key: ApiKey, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map an HTTP error status to the error taxonomy. 5xx is transient
    /// (the poller may retry it), 4xx is permanent.
    fn classify_status(status: reqwest::StatusCode, body: String) -> TranscribeError {
        match status.as_u16() {
            401 => TranscribeError::Auth,
            429 => TranscribeError::Quota,
            code if status.is_server_error() => {
                TranscribeError::Network(format!("HTTP {code}: {body}"))
            }
            code => TranscribeError::Api {
                status: code,
                message: body,
            },
        }
    }

    fn network_error(e: reqwest::Error) -> TranscribeError {
        TranscribeError::Network(e.to_string())
    }
}

impl TranscriptApi for AssemblyAiClient {
    fn verify_credentials(&self) -> Result<bool, TranscribeError> {
        let response = self
            .http
            .get(self.endpoint("/transcript"))
            .header("authorization", self.api_key.as_str())
            .send()
            .map_err(Self::network_error)?;
        // Only 401 means the key itself is bad; any other status proves
        // the credential was accepted.
        Ok(response.status() != reqwest::StatusCode::UNAUTHORIZED)
    }

    fn upload(&self, audio_path: &Path) -> Result<String, TranscribeError> {
        let file = File::open(audio_path)
            .map_err(|e| TranscribeError::Upload(format!("{}: {e}", audio_path.display())))?;
        let reader = BufReader::with_capacity(UPLOAD_CHUNK_SIZE, file);

        debug!("uploading {}", audio_path.display());
        let response = self
            .http
            .post(self.endpoint("/upload"))
            .header("authorization", self.api_key.as_str())
            .body(reqwest::blocking::Body::new(reader))
            .send()
            .map_err(|e| TranscribeError::Upload(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(match Self::classify_status(status, body) {
                TranscribeError::Api { message, .. } => TranscribeError::Upload(message),
                other => other,
            });
        }

        let parsed: UploadResponse = response
            .json()
            .map_err(|e| TranscribeError::Upload(format!("malformed upload response: {e}")))?;
        Ok(parsed.upload_url)
    }

    fn create_job(&self, audio_url: &str) -> Result<JobId, TranscribeError> {
        let response = self
            .http
            .post(self.endpoint("/transcript"))
            .header("authorization", self.api_key.as_str())
            .json(&CreateJobRequest {
                audio_url,
                language_detection: true,
            })
            .send()
            .map_err(Self::network_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Self::classify_status(status, body));
        }

        let parsed: CreateJobResponse = response
            .json()
            .map_err(|e| TranscribeError::Network(format!("malformed job response: {e}")))?;
        debug!("created transcription job {}", parsed.id);
        Ok(JobId::new(parsed.id))
    }

    fn job_status(&self, id: &JobId) -> Result<JobSnapshot, TranscribeError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/transcript/{}", id.as_str())))
            .header("authorization", self.api_key.as_str())
            .send()
            .map_err(Self::network_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Self::classify_status(status, body));
        }

        let parsed: StatusResponse = response
            .json()
            .map_err(|e| TranscribeError::Network(format!("malformed status response: {e}")))?;
        let job_status = JobStatus::parse(&parsed.status).ok_or_else(|| TranscribeError::Api {
            status: status.as_u16(),
            message: format!("unknown job status \"{}\"", parsed.status),
        })?;

        Ok(JobSnapshot {
            id: JobId::new(parsed.id),
            status: job_status,
            text: parsed.text,
            error: parsed.error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_auth() {
        let err = AssemblyAiClient::classify_status(
            reqwest::StatusCode::UNAUTHORIZED,
            "bad key".into(),
        );
        assert!(matches!(err, TranscribeError::Auth));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_classify_quota() {
        let err = AssemblyAiClient::classify_status(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            String::new(),
        );
        assert!(matches!(err, TranscribeError::Quota));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_classify_client_error_is_permanent() {
        let err = AssemblyAiClient::classify_status(
            reqwest::StatusCode::BAD_REQUEST,
            "bad audio_url".into(),
        );
        assert!(matches!(err, TranscribeError::Api { status: 400, .. }));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_classify_server_error_is_transient() {
        let err = AssemblyAiClient::classify_status(
            reqwest::StatusCode::BAD_GATEWAY,
            String::new(),
        );
        assert!(err.is_transient());
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let client =
            AssemblyAiClient::with_base_url(ApiKey::new("k"), "http://localhost:9999/v2");
        assert_eq!(
            client.endpoint("/transcript/abc"),
            "http://localhost:9999/v2/transcript/abc"
        );
    }

    #[test]
    fn test_upload_unreadable_file_fails_without_network() {
        let client =
            AssemblyAiClient::with_base_url(ApiKey::new("k"), "http://localhost:9999/v2");
        let err = client
            .upload(Path::new("/nonexistent/audio.mp3"))
            .unwrap_err();
        assert!(matches!(err, TranscribeError::Upload(_)));
    }
}
