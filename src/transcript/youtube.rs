//! YouTube caption retrieval over the public watch page.

use super::{Segment, TranscriptApi};
use crate::config::YoutubeSettings;
use crate::error::{RecapError, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

const PLAYER_RESPONSE_MARKER: &str = "ytInitialPlayerResponse = ";
const LANGUAGE: &str = "en";

/// Transcript service backed by YouTube caption tracks.
pub struct YoutubeTranscriptApi {
    client: reqwest::Client,
    base_url: String,
}

impl YoutubeTranscriptApi {
    pub fn new(settings: &YoutubeSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_watch_page(&self, video_id: &str) -> Result<String> {
        let url = format!("{}/watch?v={}", self.base_url, video_id);
        debug!("Fetching watch page {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US")
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    async fn fetch_track(&self, base_url: &str) -> Result<Vec<Segment>> {
        let url = json3_url(base_url)?;
        debug!("Fetching caption track");

        let body: TimedText = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(body.into_segments())
    }
}

#[async_trait]
impl TranscriptApi for YoutubeTranscriptApi {
    #[instrument(skip(self))]
    async fn list_segments(&self, video_id: &str) -> Result<Vec<Segment>> {
        let page = self.fetch_watch_page(video_id).await?;
        let player = extract_player_response(&page)?;
        let track = select_track(video_id, &player)?;

        debug!(
            "Using caption track {} ({})",
            track.language_code,
            if track.is_generated() { "auto-generated" } else { "manual" }
        );

        self.fetch_track(&track.base_url).await
    }
}

/// A caption track advertised by the player response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    #[serde(default)]
    kind: Option<String>,
}

impl CaptionTrack {
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }

    fn is_english(&self) -> bool {
        self.language_code == LANGUAGE || self.language_code.starts_with("en-")
    }
}

/// Pull the `ytInitialPlayerResponse` object out of a watch page.
fn extract_player_response(page: &str) -> Result<Value> {
    let start = page
        .find(PLAYER_RESPONSE_MARKER)
        .ok_or_else(|| RecapError::Transcript("Player response not found in watch page".to_string()))?
        + PLAYER_RESPONSE_MARKER.len();

    // The object is followed by more script; read exactly one JSON value.
    serde_json::Deserializer::from_str(&page[start..])
        .into_iter::<Value>()
        .next()
        .ok_or_else(|| RecapError::Transcript("Empty player response".to_string()))?
        .map_err(RecapError::from)
}

/// Choose the English caption track, preferring manual tracks over auto-generated ones.
fn select_track(video_id: &str, player: &Value) -> Result<CaptionTrack> {
    if let Some(status) = player["playabilityStatus"]["status"].as_str() {
        if status != "OK" {
            let reason = player["playabilityStatus"]["reason"]
                .as_str()
                .unwrap_or(status);
            return Err(RecapError::VideoUnavailable(format!("{}: {}", video_id, reason)));
        }
    }

    let tracks: Vec<CaptionTrack> = match player["captions"]["playerCaptionsTracklistRenderer"]
        .get("captionTracks")
    {
        Some(value) => serde_json::from_value(value.clone())?,
        None => Vec::new(),
    };

    if tracks.is_empty() {
        return Err(RecapError::TranscriptsDisabled(video_id.to_string()));
    }

    let english = || tracks.iter().filter(|t| t.is_english());
    english()
        .find(|t| !t.is_generated())
        .or_else(|| english().next())
        .cloned()
        .ok_or_else(|| RecapError::NoTranscript(video_id.to_string()))
}

/// Rewrite a track URL to request the JSON timed-text format.
fn json3_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| RecapError::Transcript(format!("Invalid caption URL: {}", e)))?;

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "fmt")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs)
        .append_pair("fmt", "json3");

    Ok(url)
}

/// Timed-text document in `json3` format.
#[derive(Debug, Default, Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedTextEvent {
    #[serde(default)]
    t_start_ms: u64,
    #[serde(default)]
    d_duration_ms: u64,
    #[serde(default)]
    segs: Option<Vec<TimedTextSeg>>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}

impl TimedText {
    fn into_segments(self) -> Vec<Segment> {
        self.events
            .into_iter()
            .filter_map(|event| {
                let segs = event.segs?;
                let text: String = segs.iter().map(|s| s.utf8.as_str()).collect();
                let text = text.replace('\n', " ").trim().to_string();
                if text.is_empty() {
                    return None;
                }
                Some(Segment {
                    text,
                    start: event.t_start_ms as f64 / 1000.0,
                    duration: event.d_duration_ms as f64 / 1000.0,
                })
            })
            .collect()
    }
}
