//! API routes for gating endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use hush_core::{
    consensus_gate, decide, measure, should_silence, Decision, GateConfig, Reason, Signals,
    Thresholds, CONSENSUS_THRESHOLD,
};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Health check handler
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Decide request: a signal bundle plus optional threshold overrides.
///
/// A partial `thresholds` object fills missing fields with the canonical
/// defaults; an absent one uses the deployment's configured thresholds.
#[derive(Debug, Deserialize)]
pub struct DecideRequest {
    pub signals: Signals,
    #[serde(default)]
    pub thresholds: Option<Thresholds>,
}

/// Decide response: the outcome plus triggered reasons.
#[derive(Debug, Serialize)]
pub struct DecideResponse {
    pub decision: Decision,
    pub meta: DecideMeta,
}

#[derive(Debug, Serialize)]
pub struct DecideMeta {
    pub reasons: Vec<Reason>,
}

/// Full policy evaluation
pub async fn decide_handler(
    State(state): State<AppState>,
    Json(req): Json<DecideRequest>,
) -> ApiResult<Json<DecideResponse>> {
    let thresholds = req.thresholds.unwrap_or_else(|| state.thresholds());
    let verdict = decide(&req.signals, &thresholds);

    Ok(Json(DecideResponse {
        decision: verdict.decision,
        meta: DecideMeta {
            reasons: verdict.reasons,
        },
    }))
}

/// Two-threshold gate request
#[derive(Debug, Deserialize)]
pub struct GateRequest {
    pub coherence: f64,
    pub drift: f64,
    #[serde(default)]
    pub thresholds: GateConfig,
}

/// Two-threshold gate response
#[derive(Debug, Serialize)]
pub struct GateResponse {
    pub silence: bool,
}

/// Two-threshold gate
pub async fn gate_handler(Json(req): Json<GateRequest>) -> ApiResult<Json<GateResponse>> {
    Ok(Json(GateResponse {
        silence: should_silence(req.coherence, req.drift, &req.thresholds),
    }))
}

/// Consensus request
#[derive(Debug, Deserialize)]
pub struct ConsensusRequest {
    pub responses: Vec<String>,
    #[serde(default = "default_consensus_threshold")]
    pub threshold: f64,
}

fn default_consensus_threshold() -> f64 {
    CONSENSUS_THRESHOLD
}

/// Consensus response
#[derive(Debug, Serialize)]
pub struct ConsensusResponse {
    pub consensus: f64,
    pub silence: bool,
}

/// Consensus measurement + gate
pub async fn consensus_handler(
    Json(req): Json<ConsensusRequest>,
) -> ApiResult<Json<ConsensusResponse>> {
    let consensus = measure::consensus(&req.responses);
    Ok(Json(ConsensusResponse {
        consensus,
        silence: consensus_gate(consensus, req.threshold),
    }))
}

/// Fallback for unknown routes
async fn not_found() -> ApiError {
    ApiError::NotFound("no such endpoint".to_string())
}

/// Build the API router
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/decide", post(decide_handler))
        .route("/v1/gate", post(gate_handler))
        .route("/v1/consensus", post(consensus_handler))
        .fallback(not_found)
        .with_state(state)
}
