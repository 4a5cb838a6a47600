use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{DomainError, PlanMode};
use crate::services::planner;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    pub location: Option<String>,
    pub mode: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/plan",
    params(
        ("location" = String, Query, description = "Free-text place name to plan around"),
        ("mode" = Option<String>, Query, description = "attractions or full (default: full)")
    ),
    responses(
        (status = 200, description = "Ranked travel plan"),
        (status = 400, description = "Missing or invalid parameters"),
        (status = 404, description = "Location not found"),
        (status = 502, description = "Geocoding service unavailable")
    )
)]
pub async fn generate_plan(
    State(state): State<AppState>,
    Query(params): Query<PlanQuery>,
) -> impl IntoResponse {
    let location = match params.location.as_deref().map(str::trim) {
        Some(location) if !location.is_empty() => location.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": "Missing 'location' parameter" })),
            )
                .into_response();
        }
    };

    let mode = match params.mode.as_deref() {
        None => PlanMode::Full,
        Some(raw) => match PlanMode::parse(raw) {
            Some(mode) => mode,
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": format!("Unknown mode '{}', expected 'attractions' or 'full'", raw)
                    })),
                )
                    .into_response();
            }
        },
    };

    match planner::build_plan(&state.http, &state.config, &location, mode).await {
        Ok(plan) if plan.places.is_empty() => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "plan": plan,
                "warning": "No places found nearby"
            })),
        )
            .into_response(),
        Ok(plan) => (
            StatusCode::OK,
            Json(json!({ "success": true, "plan": plan })),
        )
            .into_response(),
        Err(DomainError::LocationNotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "Location not found" })),
        )
            .into_response(),
        Err(DomainError::External(e)) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "success": false, "error": e })),
        )
            .into_response(),
        Err(DomainError::Validation(e)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": e })),
        )
            .into_response(),
    }
}
