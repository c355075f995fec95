//! HTTP API routes
//!
//! The server only hands out round content. Scores never reach it.

use crate::constants::api::GENERATE_ROUND_PATH;
use crate::error::Error;
use crate::provider::{RoundProvider, RoundRequest};
use crate::quiz::{available_categories, available_difficulties, GameRound};
use crate::server::state::AppState;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(GENERATE_ROUND_PATH, post(generate_round_handler))
        .route("/api/categories", get(categories_handler))
        .route("/api/difficulties", get(difficulties_handler))
        .route("/api/status", get(status_handler))
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip, default = "default_status")]
    status: StatusCode,
}

fn default_status() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

impl ApiError {
    fn new(status: StatusCode, error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match &err {
            // Provider details stay in the server log
            Error::Generation(_) | Error::InvalidRound(_) | Error::Http(_) | Error::Json(_) => {
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate game round",
                    "GENERATION_ERROR",
                )
            }
            Error::Config(_) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), "CONFIG_ERROR"),
            _ => Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), "INTERNAL_ERROR"),
        }
    }
}

/// Generate one round of content
///
/// POST /api/generate-round
async fn generate_round_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RoundRequest>,
) -> Result<Json<GameRound>, ApiError> {
    info!(
        "Round {} requested: {} / {}",
        req.round_number, req.category, req.difficulty
    );

    let round = state.provider().generate_round(&req).await.map_err(|e| {
        warn!("Error generating round: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(round))
}

/// Name and description of a selectable option
#[derive(Debug, Serialize, Deserialize)]
pub struct ChoiceInfo {
    pub name: String,
    pub description: String,
}

/// Categories list response
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<ChoiceInfo>,
}

/// List available categories
///
/// GET /api/categories
async fn categories_handler() -> Json<CategoriesResponse> {
    let categories = available_categories()
        .into_iter()
        .map(|c| ChoiceInfo {
            name: c.to_string(),
            description: c.description().to_string(),
        })
        .collect();

    Json(CategoriesResponse { categories })
}

/// Difficulties list response
#[derive(Debug, Serialize, Deserialize)]
pub struct DifficultiesResponse {
    pub difficulties: Vec<ChoiceInfo>,
}

/// List available difficulties
///
/// GET /api/difficulties
async fn difficulties_handler() -> Json<DifficultiesResponse> {
    let difficulties = available_difficulties()
        .into_iter()
        .map(|d| ChoiceInfo {
            name: d.to_string(),
            description: d.description().to_string(),
        })
        .collect();

    Json(DifficultiesResponse { difficulties })
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Round provider in use
    pub provider: String,
    /// Configured LLM model
    pub model: String,
    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let model = state.config().provider.model.clone();

    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.provider_name().to_string(),
        model,
        uptime_secs: state.uptime_secs(),
    })
}
