use uuid::Uuid;

use crate::{db::Store, error::AppError};

use super::model::{PaymentStatus, Reward};

#[derive(Clone)]
pub struct RewardRepository {
    store: Store,
}

impl RewardRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates the reward only if the item has no reward yet. The existence
    /// check and the insert are one atomic operation on the collection, which
    /// is what keeps the at-most-one-reward-per-item invariant under
    /// concurrent completion requests.
    pub async fn create_for_item_if_absent(&self, reward: Reward) -> Result<bool, AppError> {
        let item_id = reward.item_id;
        self.store
            .rewards
            .insert_if_absent(|r| r.item_id == item_id, reward)
    }

    pub async fn set_paid(&self, reward_id: &Uuid) -> Result<Reward, AppError> {
        self.store
            .rewards
            .update_one(
                |r| r.id == *reward_id,
                |r| r.payment_status = PaymentStatus::Paid,
            )?
            .ok_or_else(|| {
                AppError::NotFoundError(format!("Reward with ID {} not found", reward_id))
            })
    }

    pub async fn list_rewards(&self) -> Result<Vec<Reward>, AppError> {
        self.store.rewards.all()
    }

    pub async fn list_by_user(&self, user_id: &Uuid) -> Result<Vec<Reward>, AppError> {
        self.store.rewards.find(|r| r.user_id == *user_id)
    }

    pub async fn delete_by_user(&self, user_id: &Uuid) -> Result<usize, AppError> {
        self.store.rewards.delete_where(|r| r.user_id == *user_id)
    }
}
