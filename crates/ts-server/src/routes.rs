use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};
use ts_core::{SimplifyParams, SimplifyRequest, SimplifyResult, TsError};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn simplify_routes() -> Router<AppState> {
    Router::new().route("/api/simplify", post(simplify))
}

/// Wire shape of a simplify call. Absent fields take the server defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifyBody {
    pub text: Option<String>,
    pub compress_ratio: Option<i64>,
    pub dup_threshold: Option<f64>,
    pub dedupe: Option<bool>,
    pub preserve_order: Option<bool>,
    pub clean_fillers: Option<bool>,
}

impl SimplifyBody {
    pub fn into_request(self, defaults: &SimplifyParams) -> SimplifyRequest {
        let params = SimplifyParams {
            compress_ratio: self
                .compress_ratio
                .map(|r| r.clamp(0, 100) as i32)
                .unwrap_or(defaults.compress_ratio),
            dup_threshold: self.dup_threshold.unwrap_or(defaults.dup_threshold),
            dedupe: self.dedupe.unwrap_or(defaults.dedupe),
            preserve_order: self.preserve_order.unwrap_or(defaults.preserve_order),
            clean_fillers: self.clean_fillers.unwrap_or(defaults.clean_fillers),
        };
        SimplifyRequest::new(self.text.unwrap_or_default()).with_params(params.clamped())
    }
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn simplify(
    State(state): State<AppState>,
    body: Result<Json<SimplifyBody>, JsonRejection>,
) -> Result<Json<SimplifyResult>, ApiError> {
    let Json(body) = body.map_err(|e| {
        warn!(error = %e.body_text(), "rejected simplify body");
        ApiError::bad_request(e.body_text())
    })?;
    let request = body.into_request(&state.config.defaults);

    let chars = request.text.chars().count();
    let limit = state.config.server.max_text_chars;
    if chars > limit {
        warn!(chars, limit, "simplify text over limit");
        return Err(ApiError::payload_too_large(format!(
            "text has {chars} characters, limit is {limit}"
        )));
    }

    let result = tokio::task::spawn_blocking(move || ts_engine::simplify(&request))
        .await
        .map_err(|e| TsError::Other(anyhow::Error::new(e)))?;
    info!(
        orig_len = result.orig_len,
        new_len = result.new_len,
        removed = result.removed.len(),
        "simplified"
    );
    Ok(Json(result))
}
