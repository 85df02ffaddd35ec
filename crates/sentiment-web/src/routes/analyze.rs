//! Sentiment analysis route handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use sentiment_core::{AnalysisRequest, AnalysisResult};
use tracing::{error, warn};

use crate::state::AppState;

/// POST /analyze - Classify the submitted text and echo it back.
///
/// A body that does not parse into [`AnalysisRequest`] (bad JSON, wrong
/// shape, missing JSON content type) is answered with 422. Failures reading
/// the body itself keep axum's own status.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, (StatusCode, String)> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected analyze request body");
        (rejection_status(&rejection), rejection.body_text())
    })?;

    let result = state.classifier.analyze(request).await.map_err(|e| {
        error!(error = %e, "Sentiment inference failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(result))
}

fn rejection_status(rejection: &JsonRejection) -> StatusCode {
    match rejection {
        JsonRejection::JsonDataError(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::MissingJsonContentType(_) => StatusCode::UNPROCESSABLE_ENTITY,
        other => other.status(),
    }
}
