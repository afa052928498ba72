use uuid::Uuid;

use crate::error::AppError;
use crate::items::model::{Item, ItemStatus};
use crate::rewards::model::{
    PaymentStatus, Reward, RewardOverviewResponse, RewardResponse, RewardSummaryResponse,
};
use crate::rewards::repository::RewardRepository;

#[derive(Clone)]
pub struct RewardService {
    repository: RewardRepository,
}

impl RewardService {
    pub fn new(repository: RewardRepository) -> Self {
        Self { repository }
    }

    /// Issues the one reward an item can ever get. Returns whether a reward
    /// was actually created; false means one already existed and the caller
    /// must not credit points again.
    pub async fn issue_for_item(&self, item: &Item) -> Result<bool, AppError> {
        self.repository
            .create_for_item_if_absent(Reward::for_item(item))
            .await
    }

    /// PENDING -> PAID. Re-marking an already paid reward is a no-op that
    /// still succeeds.
    pub async fn mark_paid(&self, reward_id: &str) -> Result<RewardResponse, AppError> {
        let reward_id = Uuid::parse_str(reward_id)
            .map_err(|_| AppError::ValidationError("Invalid reward ID".to_string()))?;

        let reward = self.repository.set_paid(&reward_id).await?;
        Ok(reward.into())
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<RewardResponse>, AppError> {
        let user_id = Uuid::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("Invalid user ID".to_string()))?;

        let rewards = self.repository.list_by_user(&user_id).await?;
        Ok(rewards.into_iter().map(RewardResponse::from).collect())
    }

    pub async fn summary_for_user(&self, user_id: &str) -> Result<RewardSummaryResponse, AppError> {
        let user_id = Uuid::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("Invalid user ID".to_string()))?;

        self.summary_for(&user_id).await
    }

    pub async fn summary_for(&self, user_id: &Uuid) -> Result<RewardSummaryResponse, AppError> {
        let rewards = self.repository.list_by_user(user_id).await?;

        let credited_points = rewards
            .iter()
            .filter(|r| r.status == ItemStatus::Completed)
            .map(|r| r.points)
            .sum();
        let gross_points = rewards.iter().map(|r| r.points).sum();

        Ok(RewardSummaryResponse {
            reward_count: rewards.len(),
            credited_points,
            gross_points,
        })
    }

    pub async fn list_all(&self) -> Result<Vec<RewardResponse>, AppError> {
        let rewards = self.repository.list_rewards().await?;
        Ok(rewards.into_iter().map(RewardResponse::from).collect())
    }

    pub async fn delete_for_user(&self, user_id: &Uuid) -> Result<usize, AppError> {
        self.repository.delete_by_user(user_id).await
    }

    pub async fn overview(&self) -> Result<RewardOverviewResponse, AppError> {
        let rewards = self.repository.list_rewards().await?;

        let pending_count = rewards
            .iter()
            .filter(|r| r.payment_status == PaymentStatus::Pending)
            .count();
        let paid_count = rewards
            .iter()
            .filter(|r| r.payment_status == PaymentStatus::Paid)
            .count();
        let total_points = rewards.iter().map(|r| r.points).sum();
        let pending_points = rewards
            .iter()
            .filter(|r| r.payment_status == PaymentStatus::Pending)
            .map(|r| r.points)
            .sum();

        Ok(RewardOverviewResponse {
            total_rewards: rewards.len(),
            pending_count,
            paid_count,
            total_points,
            pending_points,
        })
    }
}
