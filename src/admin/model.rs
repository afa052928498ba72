use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Row of the admin users table: profile plus activity counters
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminUserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub points: i64,
    pub credited_points: i64,
    pub items_posted: usize,
    pub created_at: DateTime<Utc>,
}

// Dashboard counters
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminStatsResponse {
    pub total_items: usize,
    pub total_users: usize,
    pub pending_approval: usize,
    pub completed_items: usize,
}
