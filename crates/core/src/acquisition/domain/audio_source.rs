use std::path::{Path, PathBuf};

use url::Url;

use super::error::AcquireError;

/// What the user asked to transcribe: a file on disk or a remote video URL.
/// Resolution turns either variant into exactly one local audio file before
/// transcription starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    LocalFile(PathBuf),
    Url(Url),
}

impl AudioSource {
    /// Interpret free-form user input. An existing path wins; otherwise the
    /// input must parse as an http(s) URL. No network is touched here.
    pub fn parse(input: &str) -> Result<Self, AcquireError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AcquireError::InvalidUrl(input.to_string()));
        }

        let path = Path::new(trimmed);
        if path.exists() {
            return Ok(Self::LocalFile(path.to_path_buf()));
        }

        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::Url(url)),
            _ => Err(AcquireError::InvalidUrl(trimmed.to_string())),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::LocalFile(path.into())
    }

    pub fn from_url(input: &str) -> Result<Self, AcquireError> {
        match Url::parse(input.trim()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::Url(url)),
            _ => Err(AcquireError::InvalidUrl(input.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("not a url")]
    #[case("")]
    #[case("   ")]
    #[case("ftp://example.com/audio.mp3")]
    #[case("youtube.com/watch?v=abc")] // no scheme
    fn test_invalid_inputs_rejected(#[case] input: &str) {
        assert!(matches!(
            AudioSource::parse(input),
            Err(AcquireError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_existing_path_wins() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let source = AudioSource::parse(tmp.path().to_str().unwrap()).unwrap();
        assert_eq!(source, AudioSource::LocalFile(tmp.path().to_path_buf()));
    }

    #[test]
    fn test_http_url_accepted() {
        let source = AudioSource::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert!(matches!(source, AudioSource::Url(_)));
    }

    #[test]
    fn test_missing_path_that_is_not_a_url_rejected() {
        assert!(matches!(
            AudioSource::parse("/no/such/file.mp3"),
            Err(AcquireError::InvalidUrl(_))
        ));
    }
}
