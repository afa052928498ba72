use axum::{
  extract::{Path, State},
  http::StatusCode,
  Json,
};

use crate::{
  categories::{model::CreateCategoryRequest, service::CategoryService},
  error::AppError,
};

pub async fn list_categories(
  State(service): State<CategoryService>,
) -> Result<Json<Vec<String>>, AppError> {
  let categories = service.list().await?;
  Ok(Json(categories))
}

// Admin: add a category; responds with the updated set
pub async fn add_category(
  State(service): State<CategoryService>,
  Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Vec<String>>), AppError> {
  let categories = service.add(req).await?;
  Ok((StatusCode::CREATED, Json(categories)))
}

// Admin: remove a category from the set
pub async fn remove_category(
  State(service): State<CategoryService>,
  Path(name): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
  let categories = service.remove(&name).await?;
  Ok(Json(categories))
}
