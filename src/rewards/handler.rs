use axum::{
  extract::{Path, State},
  Extension, Json,
};

use crate::{
  error::AppError,
  rewards::{
      model::{RewardOverviewResponse, RewardResponse, RewardSummaryResponse},
      service::RewardService,
  },
};

// List the current user's rewards
pub async fn my_rewards(
  Extension(user_id): Extension<String>,
  State(service): State<RewardService>,
) -> Result<Json<Vec<RewardResponse>>, AppError> {
  let rewards = service.list_for_user(&user_id).await?;
  Ok(Json(rewards))
}

// Credited vs gross point totals for the current user
pub async fn my_summary(
  Extension(user_id): Extension<String>,
  State(service): State<RewardService>,
) -> Result<Json<RewardSummaryResponse>, AppError> {
  let summary = service.summary_for_user(&user_id).await?;
  Ok(Json(summary))
}

// Admin: every reward in the ledger
pub async fn list_rewards(
  State(service): State<RewardService>,
) -> Result<Json<Vec<RewardResponse>>, AppError> {
  let rewards = service.list_all().await?;
  Ok(Json(rewards))
}

// Admin: payment overview counters
pub async fn overview(
  State(service): State<RewardService>,
) -> Result<Json<RewardOverviewResponse>, AppError> {
  let overview = service.overview().await?;
  Ok(Json(overview))
}

// Admin: mark a reward's payment as sent
pub async fn mark_paid(
  State(service): State<RewardService>,
  Path(reward_id): Path<String>,
) -> Result<Json<RewardResponse>, AppError> {
  let reward = service.mark_paid(&reward_id).await?;
  Ok(Json(reward))
}
