//! Rules handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use domain_claims::{Rule, RuleFields};

use crate::{AppState, error::ApiError};

/// Lists rules
pub async fn list_rules(
    State(state): State<AppState>,
) -> Result<Json<Vec<Rule>>, ApiError> {
    Ok(Json(state.records.list_rules().await))
}

/// Creates an active rule
pub async fn create_rule(
    State(state): State<AppState>,
    payload: Result<Json<RuleFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Rule>), ApiError> {
    let fields = super::record_fields(payload)?;
    let rule = state.records.create_rule(fields).await;
    Ok((StatusCode::CREATED, Json(rule)))
}
