//! YouTube URL parsing.

use regex::Regex;
use std::sync::OnceLock;

fn video_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Matches `youtu.be/<id>` or `watch?v=<id>` anywhere in the input.
    RE.get_or_init(|| Regex::new(r"(?:youtu\.be/|watch\?v=)([\w-]+)").expect("Invalid regex"))
}

/// Extract the video ID from a YouTube URL.
///
/// Returns the token following the first `watch?v=` or `youtu.be/` in the string.
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id_regex()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// A URL together with the video ID derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef {
    pub url: String,
    pub video_id: Option<String>,
}

impl VideoRef {
    pub fn parse(url: &str) -> Self {
        Self {
            url: url.to_string(),
            video_id: extract_video_id(url),
        }
    }
}
