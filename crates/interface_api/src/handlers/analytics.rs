//! Analytics handler

use axum::{extract::State, Json};

use domain_claims::AnalyticsSummary;

use crate::{AppState, error::ApiError};

/// Returns claim and rule counts computed from the live collections
pub async fn get_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSummary>, ApiError> {
    Ok(Json(state.records.analytics().await))
}
