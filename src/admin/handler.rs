use axum::{
  extract::{Path, State},
  http::StatusCode,
  Json,
};

use crate::{
  admin::{
      model::{AdminStatsResponse, AdminUserResponse},
      service::AdminService,
  },
  error::AppError,
};

// Every registered user with activity counters
pub async fn list_users(
  State(service): State<AdminService>,
) -> Result<Json<Vec<AdminUserResponse>>, AppError> {
  let users = service.list_users().await?;
  Ok(Json(users))
}

// Permanently remove a user and everything they own
pub async fn delete_user(
  State(service): State<AdminService>,
  Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
  service.delete_user(&user_id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// Dashboard counters
pub async fn stats(
  State(service): State<AdminService>,
) -> Result<Json<AdminStatsResponse>, AppError> {
  let stats = service.stats().await?;
  Ok(Json(stats))
}
