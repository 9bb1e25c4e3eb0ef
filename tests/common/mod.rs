use axum::{
    extract::{Query, State},
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Clone)]
struct MockState {
    base_url: String,
    timedtext_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    completion_requests: Arc<Mutex<Vec<JsonValue>>>,
}

/// Local stand-in for the YouTube watch page, the timed-text endpoint and the chat API.
///
/// Known video IDs on the watch page:
/// - `abc123` has an English manual track and an auto-generated one
/// - `nocaps` has no captions
/// - `frOnly` has only a French track
/// - anything else is unplayable
pub struct MockServices {
    pub base_url: String,
    pub timedtext_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    pub completion_requests: Arc<Mutex<Vec<JsonValue>>>,
    _server_handle: tokio::task::JoinHandle<()>,
}

impl MockServices {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let timedtext_queries = Arc::new(Mutex::new(Vec::new()));
        let completion_requests = Arc::new(Mutex::new(Vec::new()));

        let state = MockState {
            base_url: base_url.clone(),
            timedtext_queries: timedtext_queries.clone(),
            completion_requests: completion_requests.clone(),
        };

        let app = Router::new()
            .route("/watch", get(watch_page))
            .route("/api/timedtext", get(timed_text))
            .route("/v1/chat/completions", post(chat_completion))
            .with_state(state);

        let server_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            base_url,
            timedtext_queries,
            completion_requests,
            _server_handle: server_handle,
        })
    }

    pub fn api_base(&self) -> String {
        format!("{}/v1", self.base_url)
    }
}

async fn watch_page(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let video_id = params.get("v").cloned().unwrap_or_default();
    let track = |lang: &str, kind: Option<&str>| {
        let mut base_url = format!(
            "{}/api/timedtext?v={}&lang={}&fmt=srv3",
            state.base_url, video_id, lang
        );
        let mut t = json!({"languageCode": lang});
        if let Some(kind) = kind {
            base_url.push_str(&format!("&kind={}", kind));
            t["kind"] = json!(kind);
        }
        t["baseUrl"] = json!(base_url);
        t
    };

    let player = match video_id.as_str() {
        "abc123" => json!({
            "playabilityStatus": {"status": "OK"},
            "captions": {"playerCaptionsTracklistRenderer": {"captionTracks": [
                track("en", Some("asr")),
                track("en", None),
            ]}}
        }),
        "nocaps" => json!({"playabilityStatus": {"status": "OK"}}),
        "frOnly" => json!({
            "playabilityStatus": {"status": "OK"},
            "captions": {"playerCaptionsTracklistRenderer": {"captionTracks": [track("fr", None)]}}
        }),
        _ => json!({"playabilityStatus": {"status": "ERROR", "reason": "Video unavailable"}}),
    };

    Html(format!(
        "<html><script>var ytInitialPlayerResponse = {};var meta = {{}};</script></html>",
        player
    ))
}

async fn timed_text(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<JsonValue> {
    let generated = params.get("kind").is_some();
    state.timedtext_queries.lock().unwrap().push(params);

    let first = if generated { "auto" } else { "hello" };
    Json(json!({
        "events": [
            {"tStartMs": 0, "dDurationMs": 90000},
            {"tStartMs": 0, "dDurationMs": 1500, "segs": [{"utf8": first}]},
            {"tStartMs": 1500, "dDurationMs": 1500, "segs": [{"utf8": "big"}, {"utf8": "\nworld"}]},
            {"tStartMs": 3000, "dDurationMs": 1000, "segs": [{"utf8": "again"}]}
        ]
    }))
}

async fn chat_completion(
    State(state): State<MockState>,
    Json(body): Json<JsonValue>,
) -> Json<JsonValue> {
    state.completion_requests.lock().unwrap().push(body);

    Json(json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": "\n- hello big world\n- again\n"},
            "finish_reason": "stop"
        }]
    }))
}
