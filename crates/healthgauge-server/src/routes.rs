//! HTTP routes and handlers

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info, warn};

use healthgauge_core::{BodyPrediction, Error};
use healthgauge_models::split_sentences;

use crate::predict::{self, HIGH_RISK_MESSAGE, LOW_RISK_MESSAGE};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/predict/mind", post(predict_mind))
        .route("/predict/body", post(predict_body))
        .fallback(fallback)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Json<Value> {
    Json(json!({
        "message": "HealthGauge prediction service: POST /predict/mind with {\"text\": ...} or /predict/body with a feature record"
    }))
}

async fn health_check() -> &'static str {
    "OK"
}

async fn metrics(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

/// Score free text against the mental-health classifier.
async fn predict_mind(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    metrics::counter!("healthgauge_requests_total", "endpoint" => "mind").increment(1);
    let start = Instant::now();

    let Json(body) = payload
        .map_err(|e| AppError(Error::validation(format!("invalid JSON body: {e}"))))?;

    let text = body
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string();
    if text.is_empty() {
        return Err(AppError(Error::validation("empty input text")));
    }

    let model = state.models.text().map_err(AppError)?;

    let segments = split_sentences(&text);
    if segments.is_empty() {
        return Err(AppError(Error::validation("no valid sentences detected")));
    }
    debug!(segments = segments.len(), "scoring text input");

    let mean = model.score_segments(&segments).map_err(AppError)?;
    let prediction = predict::shape_mind_prediction(
        &mean,
        &state.content,
        state.config.article_sample_factor,
        &mut rand::thread_rng(),
    )
    .map_err(AppError)?;

    metrics::histogram!("healthgauge_predict_latency_us", "endpoint" => "mind")
        .record(start.elapsed().as_micros() as f64);
    info!(top_category = %prediction.top_category, "text prediction complete");

    Ok(Json(prediction).into_response())
}

/// Score a tabular feature record against the heart-disease classifier.
async fn predict_body(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    metrics::counter!("healthgauge_requests_total", "endpoint" => "body").increment(1);
    let start = Instant::now();

    let Json(body) = payload
        .map_err(|e| AppError(Error::validation(format!("invalid JSON body: {e}"))))?;

    let model = state.models.tabular().map_err(AppError)?;
    let features = predict::extract_features(model, &body).map_err(AppError)?;

    let (class, probability) = model.predict(&features).map_err(AppError)?;
    let message = if class == 1 {
        HIGH_RISK_MESSAGE
    } else {
        LOW_RISK_MESSAGE
    };

    metrics::histogram!("healthgauge_predict_latency_us", "endpoint" => "body")
        .record(start.elapsed().as_micros() as f64);
    info!(prediction = class, "tabular prediction complete");

    Ok(Json(BodyPrediction {
        prediction: class,
        probability,
        message: message.to_string(),
    })
    .into_response())
}

async fn fallback() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "not found"})),
    )
}

/// Error wrapper translating domain errors into HTTP responses.
///
/// Validation problems echo their message to the caller; everything
/// else is logged server-side and surfaced as a generic message so
/// internals never leak.
#[derive(Debug)]
pub struct AppError(pub Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self.0 {
            Error::Validation(msg) => {
                warn!(error = %msg, "request rejected");
                (StatusCode::BAD_REQUEST, "validation", msg.clone())
            }
            Error::ModelUnavailable(msg) => {
                error!(error = %msg, "prediction requested against unloaded model");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "model_unavailable",
                    "model not loaded properly".to_string(),
                )
            }
            other => {
                error!(error = %other, "prediction failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "prediction",
                    "internal prediction error".to_string(),
                )
            }
        };

        metrics::counter!("healthgauge_errors_total", "kind" => kind).increment(1);
        (status, Json(json!({"error": message}))).into_response()
    }
}
