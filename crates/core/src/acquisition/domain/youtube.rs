use url::Url;

/// Pull the video id out of the URL shapes YouTube serves:
/// `youtu.be/<id>`, `/watch?v=<id>`, `/shorts/<id>`, `/embed/<id>`.
/// Returns `None` for anything without a recognizable id.
pub fn extract_video_id(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();

    if host == "youtu.be" || host.ends_with(".youtu.be") {
        let id = url.path_segments()?.next()?.to_string();
        return non_empty(id);
    }

    if host == "youtube.com" || host.ends_with(".youtube.com") {
        if url.path() == "/watch" {
            let id = url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())?;
            return non_empty(id);
        }
        let mut segments = url.path_segments()?;
        if let Some(first) = segments.next() {
            if first == "shorts" || first == "embed" {
                return segments.next().map(str::to_string).and_then(non_empty);
            }
        }
    }

    None
}

/// Canonical watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

fn non_empty(id: String) -> Option<String> {
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn id_of(input: &str) -> Option<String> {
        extract_video_id(&Url::parse(input).unwrap())
    }

    #[rstest]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case("https://youtube.com/watch?v=dQw4w9WgXcQ&t=42")]
    #[case("https://youtu.be/dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/shorts/dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ")]
    #[case("https://m.youtube.com/watch?v=dQw4w9WgXcQ")]
    fn test_extracts_id_from_known_shapes(#[case] input: &str) {
        assert_eq!(id_of(input).as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[rstest]
    #[case("https://www.youtube.com/watch")]
    #[case("https://www.youtube.com/")]
    #[case("https://youtu.be/")]
    #[case("https://example.com/watch?v=dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/playlist?list=PL123")]
    fn test_unrecognized_shapes_yield_none(#[case] input: &str) {
        assert_eq!(id_of(input), None);
    }

    #[test]
    fn test_watch_url_round_trip() {
        let url = watch_url("dQw4w9WgXcQ");
        assert_eq!(id_of(&url).as_deref(), Some("dQw4w9WgXcQ"));
    }
}
