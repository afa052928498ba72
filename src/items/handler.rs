use axum::{
  extract::{Path, Query, State},
  http::StatusCode,
  Extension, Json,
};

use crate::{
  error::AppError,
  items::{
      model::{
          AdminItemsQuery, AdvanceStatusRequest, BrowseItemsQuery, ItemResponse,
          SubmitItemRequest, UpdateItemRequest,
      },
      service::ItemService,
  },
};

// Submit a new recyclable listing
pub async fn submit_item(
  Extension(user_id): Extension<String>,
  State(service): State<ItemService>,
  Json(req): Json<SubmitItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), AppError> {
  let item = service.submit(&user_id, req).await?;
  Ok((StatusCode::CREATED, Json(item)))
}

// Browse approved items
pub async fn browse_items(
  State(service): State<ItemService>,
  Query(query): Query<BrowseItemsQuery>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
  let items = service.browse(query).await?;
  Ok(Json(items))
}

// List the current user's own items
pub async fn my_items(
  Extension(user_id): Extension<String>,
  State(service): State<ItemService>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
  let items = service.list_mine(&user_id).await?;
  Ok(Json(items))
}

// Owner edit of the mutable listing fields
pub async fn update_item(
  Extension(user_id): Extension<String>,
  State(service): State<ItemService>,
  Path(item_id): Path<String>,
  Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, AppError> {
  let item = service.edit(&item_id, &user_id, req).await?;
  Ok(Json(item))
}

// Owner delete
pub async fn delete_item(
  Extension(user_id): Extension<String>,
  State(service): State<ItemService>,
  Path(item_id): Path<String>,
) -> Result<StatusCode, AppError> {
  service.delete(&item_id, &user_id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// Admin: all items with filters
pub async fn list_all_items(
  State(service): State<ItemService>,
  Query(query): Query<AdminItemsQuery>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
  let items = service.admin_list(query).await?;
  Ok(Json(items))
}

// Admin: approve a listing
pub async fn approve_item(
  State(service): State<ItemService>,
  Path(item_id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
  let item = service.approve(&item_id).await?;
  Ok(Json(item))
}

// Admin: reject a listing
pub async fn reject_item(
  State(service): State<ItemService>,
  Path(item_id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
  let item = service.reject(&item_id).await?;
  Ok(Json(item))
}

// Admin: advance the pickup status; the first completion of an approved
// item issues its reward
pub async fn advance_status(
  State(service): State<ItemService>,
  Path(item_id): Path<String>,
  Json(req): Json<AdvanceStatusRequest>,
) -> Result<Json<ItemResponse>, AppError> {
  let item = service.advance_status(&item_id, req).await?;
  Ok(Json(item))
}
