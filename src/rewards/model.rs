use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::items::model::{Item, ItemStatus};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "PAID")]
    Paid,
}

// One reward per completed item. Item and user fields are snapshotted at
// issuance so the record stays meaningful after the item is deleted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Reward {
    pub id: Uuid,
    pub item_id: Uuid,
    pub user_id: Uuid,
    pub item_title: String,
    pub category: String,
    pub user_name: String,
    pub user_email: String,
    pub points: i64,
    pub status: ItemStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Reward {
    pub fn for_item(item: &Item) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_id: item.id,
            user_id: item.user_id,
            item_title: item.title.clone(),
            category: item.category.clone(),
            user_name: item.user_name.clone(),
            user_email: item.user_email.clone(),
            points: item.points,
            status: ItemStatus::Completed,
            payment_status: PaymentStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RewardResponse {
    pub id: Uuid,
    pub item_id: Uuid,
    pub user_id: Uuid,
    pub item_title: String,
    pub category: String,
    pub user_name: String,
    pub user_email: String,
    pub points: i64,
    pub status: ItemStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Reward> for RewardResponse {
    fn from(reward: Reward) -> Self {
        Self {
            id: reward.id,
            item_id: reward.item_id,
            user_id: reward.user_id,
            item_title: reward.item_title,
            category: reward.category,
            user_name: reward.user_name,
            user_email: reward.user_email,
            points: reward.points,
            status: reward.status,
            payment_status: reward.payment_status,
            created_at: reward.created_at,
        }
    }
}

// Per-user totals. credited_points counts Completed-status rewards only,
// which is the scope the user's running balance tracks; gross_points counts
// every reward regardless of status.
#[derive(Debug, Serialize, Deserialize)]
pub struct RewardSummaryResponse {
    pub reward_count: usize,
    pub credited_points: i64,
    pub gross_points: i64,
}

// Global counters for the admin payment overview
#[derive(Debug, Serialize, Deserialize)]
pub struct RewardOverviewResponse {
    pub total_rewards: usize,
    pub pending_count: usize,
    pub paid_count: usize,
    pub total_points: i64,
    pub pending_points: i64,
}
