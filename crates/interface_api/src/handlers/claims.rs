//! Claims handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimFields};

use crate::{AppState, error::ApiError};

/// Lists claims
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<Claim>>, ApiError> {
    Ok(Json(state.records.list_claims().await))
}

/// Creates a pending claim
pub async fn create_claim(
    State(state): State<AppState>,
    payload: Result<Json<ClaimFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Claim>), ApiError> {
    let fields = super::record_fields(payload)?;
    let claim = state.records.create_claim(fields).await;
    Ok((StatusCode::CREATED, Json(claim)))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Claim>, ApiError> {
    let id = ClaimId::parse_lenient(&id)
        .ok_or_else(|| ApiError::NotFound("Claim not found".to_string()))?;

    let claim = state.records.get_claim(id).await?;
    Ok(Json(claim))
}
