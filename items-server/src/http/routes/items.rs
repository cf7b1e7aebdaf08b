//! Item endpoints - create, list, get, update, delete
//!
//! Validation happens before the store is touched; the store only ever
//! sees a well-formed id and a `NewItem`/non-empty `ItemPatch`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::http::error::{ApiError, ErrorBody};
use crate::http::extractors::{AppJson, ItemId};
use crate::http::server::AppState;
use crate::models::{Item, ItemPatch, NewItem};

const ITEM: &str = "Item";

/// Create item request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    /// Required, must not be empty
    #[schema(example = "Widget", required = true, nullable = false)]
    pub name: Option<String>,
    /// Stored as null when omitted
    #[schema(example = "A widget")]
    pub description: Option<String>,
}

/// Update item request; omitted fields are left unchanged
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    /// Must not be empty when present
    pub name: Option<String>,
    /// An empty string is stored as-is; null counts as omitted
    pub description: Option<String>,
}

/// Confirmation body for delete
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Item deleted successfully")]
    pub message: String,
}

/// POST /items - create an item
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Missing or empty name", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let new_item = NewItem::new(req.name, req.description)?;
    let item = state.store.create(new_item).await?;

    tracing::debug!(id = item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /items - list all items, ascending by id
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All items", body = [Item]),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.store.list().await?;
    Ok(Json(items))
}

/// GET /items/{id} - get a single item
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No such item", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, ApiError> {
    let item = state
        .store
        .get(id)
        .await?
        .ok_or(ApiError::NotFound { resource: ITEM })?;

    Ok(Json(item))
}

/// PUT /items/{id} - update the supplied fields
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "The updated item", body = Item),
        (status = 400, description = "Bad id, no fields or empty name", body = ErrorBody),
        (status = 404, description = "No such item", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    AppJson(req): AppJson<UpdateItemRequest>,
) -> Result<Json<Item>, ApiError> {
    let patch = ItemPatch::new(req.name, req.description)?;
    let item = state
        .store
        .update(id, patch)
        .await?
        .ok_or(ApiError::NotFound { resource: ITEM })?;

    tracing::debug!(id, "item updated");
    Ok(Json(item))
}

/// DELETE /items/{id} - hard delete
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted", body = MessageBody),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No such item", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<MessageBody>, ApiError> {
    if !state.store.delete(id).await? {
        return Err(ApiError::NotFound { resource: ITEM });
    }

    tracing::debug!(id, "item deleted");
    Ok(Json(MessageBody {
        message: "Item deleted successfully".to_string(),
    }))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
