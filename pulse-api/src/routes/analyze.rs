//! Company analysis endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

use crate::AppState;
use pulse_services::ReportServiceError;

/// Query parameters for company analysis
#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    /// Company or entity name to analyze
    pub company: Option<String>,
    /// Maximum number of articles to keep
    pub limit: Option<usize>,
}

/// Create analysis routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/analyze", get(analyze_company))
}

/// GET /analyze?company=Tesla&limit=10 - Build the full sentiment report
async fn analyze_company(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeQuery>,
) -> impl IntoResponse {
    let company = match params.company {
        Some(c) if !c.trim().is_empty() => c,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Query parameter 'company' is required"
                })),
            )
                .into_response();
        }
    };

    let limit = params.limit.unwrap_or(10).max(1);

    match state.report_service.analyze(&company, limit).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(ReportServiceError::NoArticles { .. }) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": "No articles found."
            })),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to analyze '{}': {}", company, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": format!("Failed to analyze company: {}", e)
                })),
            )
                .into_response()
        }
    }
}
