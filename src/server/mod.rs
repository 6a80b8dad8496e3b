//! HTTP API front end.
//!
//! Exposes the generation and history operations over a small axum router.
//! Every response uses the `{"success": bool, ...}` envelope; persistence
//! failures map to HTTP 500 with an `error` field. The history log is
//! shared behind a single mutex so each load/mutate/persist cycle runs as
//! one critical section; the log itself provides no coordination.

use crate::emergency::EmergencySystem;
use crate::generators::{ApologyGenerator, ExcuseGenerator};
use crate::history::{HistoryError, HistoryLog};
use crate::proof::ProofGenerator;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<Mutex<HistoryLog>>,
    pub excuse: Arc<ExcuseGenerator>,
    pub apology: Arc<ApologyGenerator>,
    pub proof: ProofGenerator,
    pub emergency: EmergencySystem,
    /// Where proof requests save the chat screenshot.
    pub screenshot_path: Arc<PathBuf>,
}

/// Builds the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/generate", post(generate_content))
        .route("/api/emergency", post(simulate_emergency))
        .route("/api/history", get(get_history))
        .route("/api/favorites", get(get_favorites))
        .route("/api/toggle-favorite", post(toggle_favorite))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    #[serde(rename = "type")]
    gen_type: String,
    scenario: String,
    tone: String,
    #[serde(default = "default_urgency")]
    urgency: String,
}

#[derive(Debug, Deserialize)]
struct EmergencyRequest {
    #[serde(default = "default_emergency_scenario")]
    scenario: String,
}

#[derive(Debug, Deserialize)]
struct ToggleFavoriteRequest {
    timestamp: String,
}

#[derive(Debug, Deserialize)]
struct HistoryParams {
    #[serde(default = "default_history_limit")]
    limit: usize,
}

fn default_urgency() -> String {
    "medium".to_string()
}

fn default_emergency_scenario() -> String {
    "general".to_string()
}

fn default_history_limit() -> usize {
    10
}

async fn root() -> &'static str {
    "Excuse generator API. POST /api/generate to get started."
}

/// POST /api/generate: generate an excuse, apology, or proof package and
/// record it in history.
async fn generate_content(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> impl IntoResponse {
    let content = match payload.gen_type.as_str() {
        "excuse" => {
            state
                .excuse
                .generate_excuse(&payload.scenario, &payload.urgency, &payload.tone)
                .await
        }
        "apology" => {
            state
                .apology
                .generate_apology(&payload.scenario, &payload.tone)
                .await
        }
        "proof" => {
            let doc = state.proof.generate_document(&payload.scenario);
            let location = state.proof.generate_location_log();

            let screenshot = state
                .proof
                .generate_chat_screenshot(&format!("Excuse for {}", payload.scenario));
            if let Err(e) = screenshot.save(state.screenshot_path.as_ref()) {
                tracing::error!(error = %e, "failed to save chat screenshot");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": e.to_string() })),
                );
            }

            render_proof_package(&doc, &location)
        }
        other => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "error": format!("Unknown generation type: {}", other),
                })),
            );
        }
    };

    let tags = vec![
        payload.gen_type.clone(),
        payload.tone.clone(),
        payload.urgency.clone(),
    ];

    let mut history = state.history.lock().await;
    match history.add(content.clone(), payload.scenario, tags) {
        Ok(entry) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "content": content,
                "timestamp": entry.timestamp,
            })),
        ),
        Err(e) => persistence_failure(e),
    }
}

/// POST /api/emergency: stage the fake call and text, record the result.
async fn simulate_emergency(
    State(state): State<AppState>,
    Json(payload): Json<EmergencyRequest>,
) -> impl IntoResponse {
    let transcript = state.emergency.simulate_call("Emergency Contact").await;
    let message = state.emergency.emergency_text(
        "Family Member",
        &format!("Urgent {} situation", payload.scenario),
    );

    let content = format!(
        "Emergency simulation active\nScenario: {}\n\n{}\n\nMessage sent: {}",
        payload.scenario,
        transcript.join("\n"),
        message
    );

    let tags = vec![
        "emergency".to_string(),
        "urgent".to_string(),
        "high".to_string(),
    ];

    let mut history = state.history.lock().await;
    match history.add(content.clone(), payload.scenario, tags) {
        Ok(entry) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "content": content,
                "timestamp": entry.timestamp,
            })),
        ),
        Err(e) => persistence_failure(e),
    }
}

/// GET /api/history?limit=N: most recent entries, oldest first.
async fn get_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    let history = state.history.lock().await;
    let entries = history.get_recent(params.limit).to_vec();
    Json(json!({ "success": true, "history": entries }))
}

/// GET /api/favorites: favorited entries in storage order.
async fn get_favorites(State(state): State<AppState>) -> impl IntoResponse {
    let history = state.history.lock().await;
    let favorites: Vec<_> = history.get_favorites().into_iter().cloned().collect();
    Json(json!({ "success": true, "favorites": favorites }))
}

/// POST /api/toggle-favorite: flip the favorite tag on an exact timestamp
/// match.
async fn toggle_favorite(
    State(state): State<AppState>,
    Json(payload): Json<ToggleFavoriteRequest>,
) -> impl IntoResponse {
    let mut history = state.history.lock().await;
    match history.toggle_favorite(&payload.timestamp) {
        Ok(found) => (
            StatusCode::OK,
            Json(json!({
                "success": found,
                "message": if found { "Favorite status updated" } else { "Item not found" },
            })),
        ),
        Err(e) => persistence_failure(e),
    }
}

fn persistence_failure(e: HistoryError) -> (StatusCode, Json<serde_json::Value>) {
    tracing::error!(error = %e, "history persistence failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": e.to_string() })),
    )
}

/// Renders the proof documentation package the way the web UI shows it.
fn render_proof_package(
    doc: &crate::proof::DocumentProof,
    location: &crate::proof::LocationLog,
) -> String {
    format!(
        "<div class=\"proof-section\">\n\
         <h3>Supporting Documentation Package</h3>\n\
         <div class=\"proof-item\">\n\
         <h4>1. {}</h4>\n\
         <p><strong>Date:</strong> {}</p>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Details:</strong> {}</p>\n\
         <p><strong>Authorized by:</strong> {}</p>\n\
         </div>\n\
         <div class=\"proof-item\">\n\
         <h4>2. Location Verification</h4>\n\
         <p><strong>Timestamp:</strong> {}</p>\n\
         <p><strong>Location:</strong> {}</p>\n\
         <p><strong>Coordinates:</strong> {}, {}</p>\n\
         </div>\n\
         <div class=\"proof-item\">\n\
         <h4>3. Chat Screenshot</h4>\n\
         <p>Chat proof image has been generated and saved as 'chat_proof.png'</p>\n\
         </div>\n\
         </div>",
        doc.title,
        doc.date,
        doc.name,
        doc.details,
        doc.signature,
        location.timestamp,
        location.address,
        location.latitude,
        location.longitude,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::GeminiClient;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use std::time::Duration;
    use tempfile::TempDir;
    use tower::ServiceExt; // for `oneshot`
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(base_url: &str) -> GeminiClient {
        GeminiClient::new(
            "test-key".to_string(),
            "gemini-1.5-flash".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
        .with_base_url(base_url)
    }

    fn test_state(dir: &TempDir, llm_base_url: &str) -> AppState {
        let history = HistoryLog::load(dir.path().join("history.json"), 50).unwrap();
        AppState {
            history: Arc::new(Mutex::new(history)),
            excuse: Arc::new(ExcuseGenerator::new(
                client_for(llm_base_url),
                "English".to_string(),
            )),
            apology: Arc::new(ApologyGenerator::new(client_for(llm_base_url))),
            proof: ProofGenerator::new(),
            emergency: EmergencySystem::without_delays(),
            screenshot_path: Arc::new(dir.path().join("chat_proof.png")),
        }
    }

    async fn mock_model(text: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": text}]}}]
            })))
            .mount(&server)
            .await;
        server
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_generate_excuse_records_history() {
        let server = mock_model("Sudden plumbing disaster.").await;
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, &server.uri());
        let app = build_router(state);

        let (status, body) = post_json(
            app.clone(),
            "/api/generate",
            serde_json::json!({
                "type": "excuse",
                "scenario": "work",
                "tone": "professional",
                "urgency": "high"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["content"], "Sudden plumbing disaster.");
        assert!(body["timestamp"].is_string());

        let (_, history) = get_json(app, "/api/history?limit=10").await;
        let entries = history["history"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["scenario"], "work");
        assert_eq!(
            entries[0]["tags"],
            serde_json::json!(["excuse", "professional", "high"])
        );
    }

    #[tokio::test]
    async fn test_generate_defaults_urgency_to_medium() {
        let server = mock_model("text").await;
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(&dir, &server.uri()));

        let (status, _) = post_json(
            app.clone(),
            "/api/generate",
            serde_json::json!({"type": "apology", "scenario": "family", "tone": "emotional"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, history) = get_json(app, "/api/history?limit=1").await;
        assert_eq!(
            history["history"][0]["tags"],
            serde_json::json!(["apology", "emotional", "medium"])
        );
    }

    #[tokio::test]
    async fn test_generate_unknown_type_is_bad_request() {
        let server = mock_model("unused").await;
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(&dir, &server.uri()));

        let (status, body) = post_json(
            app,
            "/api/generate",
            serde_json::json!({"type": "alibi", "scenario": "work", "tone": "casual"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("alibi"));
    }

    #[tokio::test]
    async fn test_generate_proof_saves_screenshot() {
        let server = mock_model("unused").await;
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, &server.uri());
        let screenshot_path = state.screenshot_path.clone();
        let app = build_router(state);

        let (status, body) = post_json(
            app,
            "/api/generate",
            serde_json::json!({"type": "proof", "scenario": "school", "tone": "urgent"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let content = body["content"].as_str().unwrap();
        assert!(content.contains("Supporting Documentation Package"));
        assert!(content.contains("Location Verification"));
        assert!(screenshot_path.exists());
    }

    #[tokio::test]
    async fn test_emergency_simulation() {
        let server = mock_model("unused").await;
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(&dir, &server.uri()));

        let (status, body) = post_json(
            app.clone(),
            "/api/emergency",
            serde_json::json!({"scenario": "work"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let content = body["content"].as_str().unwrap();
        assert!(content.contains("Ring... Ring..."));
        assert!(content.contains("URGENT from Family Member: Urgent work situation"));

        let (_, history) = get_json(app, "/api/history?limit=1").await;
        assert_eq!(
            history["history"][0]["tags"],
            serde_json::json!(["emergency", "urgent", "high"])
        );
    }

    #[tokio::test]
    async fn test_history_limit_parameter() {
        let server = mock_model("text").await;
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(&dir, &server.uri()));

        for _ in 0..3 {
            post_json(
                app.clone(),
                "/api/generate",
                serde_json::json!({"type": "excuse", "scenario": "work", "tone": "casual"}),
            )
            .await;
        }

        let (_, body) = get_json(app.clone(), "/api/history?limit=2").await;
        assert_eq!(body["history"].as_array().unwrap().len(), 2);

        // Default limit is 10.
        let (_, body) = get_json(app, "/api/history").await;
        assert_eq!(body["history"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_toggle_favorite_flow() {
        let server = mock_model("text").await;
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(&dir, &server.uri()));

        let (_, generated) = post_json(
            app.clone(),
            "/api/generate",
            serde_json::json!({"type": "excuse", "scenario": "social", "tone": "casual"}),
        )
        .await;
        let timestamp = generated["timestamp"].as_str().unwrap().to_string();

        let (status, body) = post_json(
            app.clone(),
            "/api/toggle-favorite",
            serde_json::json!({"timestamp": timestamp}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Favorite status updated");

        let (_, favorites) = get_json(app, "/api/favorites").await;
        let list = favorites["favorites"].as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["timestamp"], timestamp.as_str());
    }

    #[tokio::test]
    async fn test_toggle_favorite_not_found() {
        let server = mock_model("unused").await;
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(&dir, &server.uri()));

        let (status, body) = post_json(
            app,
            "/api/toggle-favorite",
            serde_json::json!({"timestamp": "nonexistent-ts"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Item not found");
    }
}
