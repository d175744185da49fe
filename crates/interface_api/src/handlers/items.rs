//! Shopping list handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::ItemId;
use domain_items::Item;

use crate::{AppState, error::ApiError};
use crate::dto::items::*;

fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    ItemId::parse_lenient(raw).ok_or_else(|| ApiError::NotFound("Item not found".to_string()))
}

/// Lists items
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(state.items.list_items().await))
}

/// Creates an item
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    // A body that is not a JSON object carries no name
    let name = payload.ok().and_then(|Json(request)| request.into_name());
    let item = state.items.create_item(name).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Sets the purchased flag of an item
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_item_id(&id)?;
    let Json(request) = payload?;
    let item = state.items.update_item(id, request.purchased).await?;
    Ok(Json(item))
}

/// Deletes an item
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_item_id(&id)?;
    state.items.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
