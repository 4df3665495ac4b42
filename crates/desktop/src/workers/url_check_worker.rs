use std::thread;

use crossbeam_channel::Receiver;

use speechcount_core::acquisition::domain::audio_source::AudioSource;
use speechcount_core::acquisition::domain::youtube;
use speechcount_core::acquisition::domain::link_checker::LinkChecker;
use speechcount_core::acquisition::infrastructure::oembed_checker::OembedChecker;

/// Outcome of the background URL check.
#[derive(Debug, Clone)]
pub enum UrlCheckMessage {
    Valid,
    Invalid(String),
}

/// Validate a YouTube URL off the UI thread: shape check first, then the
/// lightweight oEmbed existence probe. The URL shape is rejected without
/// any network traffic.
pub fn spawn(input: String) -> Receiver<UrlCheckMessage> {
    let (tx, rx) = crossbeam_channel::unbounded::<UrlCheckMessage>();

    thread::spawn(move || {
        let result = check(&input);
        let _ = tx.send(result);
    });

    rx
}

fn check(input: &str) -> UrlCheckMessage {
    let url = match AudioSource::from_url(input) {
        Ok(AudioSource::Url(url)) => url,
        _ => return UrlCheckMessage::Invalid("not a valid URL".to_string()),
    };
    let Some(video_id) = youtube::extract_video_id(&url) else {
        return UrlCheckMessage::Invalid("not a YouTube video link".to_string());
    };

    match OembedChecker::new().exists(&youtube::watch_url(&video_id)) {
        Ok(true) => UrlCheckMessage::Valid,
        Ok(false) => UrlCheckMessage::Invalid("video not found".to_string()),
        Err(e) => UrlCheckMessage::Invalid(format!("check failed: {e}")),
    }
}
