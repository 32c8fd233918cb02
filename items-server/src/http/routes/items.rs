//! Item endpoints
//!
//! Every handler that touches storage runs its repository call inside
//! `unit_of_work::run`; extractors have already rejected bad input.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::db::repos::{Item, ItemRepo};
use crate::db::unit_of_work;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidItemId, ValidJson, ValidListQuery};
use crate::http::server::AppState;
use crate::models::{ItemChanges, NewItem};

/// Create item request
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update request.
///
/// Outer `None` = field absent, `Some(None)` = field sent as `null`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

/// Marks a field as present, keeping an explicit `null` as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Item response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound { resource: "Item" }
}

/// GET /items - filtered, paginated listing
async fn list_items(
    State(state): State<Arc<AppState>>,
    ValidListQuery(query): ValidListQuery,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    tracing::info!(
        limit = query.limit,
        offset = query.offset,
        name = ?query.name,
        "Listing items"
    );

    let items = unit_of_work::run(&state.pool, |conn| {
        Box::pin(async move { ItemRepo::new(conn).list().await })
    })
    .await?;

    let total = items.len();
    let page = query.apply(items, |item| item.name.as_str());
    tracing::info!(total, returned = page.len(), "Items listed");

    Ok(Json(page.into_iter().map(ItemResponse::from).collect()))
}

/// GET /items/{id}
async fn get_item(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = unit_of_work::run(&state.pool, move |conn| {
        Box::pin(async move { ItemRepo::new(conn).get(id).await })
    })
    .await?
    .ok_or_else(not_found)?;

    Ok(Json(ItemResponse::from(item)))
}

/// POST /items
async fn create_item(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let new_item = NewItem::new(req.name, req.description)?;
    tracing::info!(name = new_item.name.as_str(), "Creating item");

    let item = unit_of_work::run(&state.pool, move |conn| {
        Box::pin(async move { ItemRepo::new(conn).create(&new_item).await })
    })
    .await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// PUT /items/{id} - only supplied fields change
async fn update_item(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
    ValidJson(req): ValidJson<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let changes = ItemChanges::new(req.name, req.description)?;
    tracing::info!(item_id = id, fields = ?changes.fields(), "Updating item");

    let item = unit_of_work::run(&state.pool, move |conn| {
        Box::pin(async move { ItemRepo::new(conn).update(id, &changes).await })
    })
    .await?
    .ok_or_else(not_found)?;

    Ok(Json(ItemResponse::from(item)))
}

/// DELETE /items/{id}
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
) -> Result<StatusCode, ApiError> {
    tracing::info!(item_id = id, "Deleting item");

    let deleted = unit_of_work::run(&state.pool, move |conn| {
        Box::pin(async move { ItemRepo::new(conn).delete(id).await })
    })
    .await?;

    if !deleted {
        return Err(not_found());
    }
    Ok(StatusCode::NO_CONTENT)
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
