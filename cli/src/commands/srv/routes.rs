//! # Campus Assistant HTTP API Routes
//!
//! File: cli/src/commands/srv/routes.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! JSON endpoints mounted under `/api`:
//!
//! | Method | Path                 | Body / Response                                  |
//! |--------|----------------------|--------------------------------------------------|
//! | GET    | `/api/health`        | `{"status":"ok","name":"..."}`                   |
//! | POST   | `/api/chat`          | `{"message":"..."}` → `{"response","category","timestamp"}` |
//! | GET    | `/api/quick-actions` | `[{"label","query"}, ...]`                       |
//! | GET    | `/api/knowledge`     | the full knowledge base                          |
//!
//! The API answers immediately; the typing delay belongs to the terminal chat.
//! A blank chat message is rejected with `400 Bad Request`.
//!
use crate::assistant::quick_actions::{QuickAction, QUICK_ACTIONS};
use crate::assistant::{Category, Classifier, KnowledgeBase};
use crate::core::error::CampusError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Classifier,
    pub assistant_name: Arc<str>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub category: Category,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    name: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for CampusError {
    fn into_response(self) -> Response {
        let status = match self {
            CampusError::EmptyMessage
            | CampusError::InvalidRequest(_)
            | CampusError::UnknownCategory { .. }
            | CampusError::UnknownQuickAction { .. } => StatusCode::BAD_REQUEST,
            CampusError::Config(_) | CampusError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!("API request failed ({}): {}", status, self);
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds the API router. Mount it with `Router::nest("/api", ...)`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat))
        .route("/quick-actions", get(quick_actions))
        .route("/knowledge", get(knowledge))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        name: state.assistant_name.to_string(),
    })
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, CampusError> {
    let Json(request) =
        payload.map_err(|rejection| CampusError::InvalidRequest(rejection.body_text()))?;
    if request.message.trim().is_empty() {
        return Err(CampusError::EmptyMessage);
    }
    let classification = state.classifier.classify(&request.message);
    debug!("Answering chat request with category {}", classification.category);
    Ok(Json(ChatResponse {
        response: classification.response,
        category: classification.category,
        timestamp: Utc::now(),
    }))
}

async fn quick_actions() -> Json<&'static [QuickAction]> {
    Json(&QUICK_ACTIONS[..])
}

async fn knowledge(State(state): State<AppState>) -> Json<KnowledgeBase> {
    Json(state.classifier.knowledge().clone())
}
