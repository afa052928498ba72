use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Pickup status. "Picked Up" is a legacy value still accepted on the wire;
// the admin UI only drives Pending / In Progress / Completed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Picked Up")]
    PickedUp,
    Completed,
}

// Recyclable listing as persisted in the items collection. Submitter fields
// are denormalized at submission time.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Item {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    #[serde(default)]
    pub user_phone: String,
    pub category: String,
    pub title: String,
    pub description: String,
    // Free-form, e.g. "30 kg" or "2 units"; the leading number is what the
    // points formula reads.
    pub quantity: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
    // Computed once at submission and never recomputed, even when quantity
    // or category are edited later.
    pub points: i64,
    pub approved: bool,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitItemRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Quantity is required"))]
    pub quantity: String,
    #[serde(default)]
    pub location: String,
    pub phone: Option<String>,
    pub image: Option<String>,
}

// Only these four fields are owner-editable; category, points, approval and
// status are off limits.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdvanceStatusRequest {
    pub status: ItemStatus,
}

// Browse filters for the user-facing approved-item listing
#[derive(Debug, Default, Deserialize)]
pub struct BrowseItemsQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

// Admin listing filters; search matches title or submitter name
#[derive(Debug, Default, Deserialize)]
pub struct AdminItemsQuery {
    pub category: Option<String>,
    pub status: Option<ItemStatus>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub quantity: String,
    pub location: String,
    pub image: Option<String>,
    pub points: i64,
    pub approved: bool,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            user_id: item.user_id,
            user_name: item.user_name,
            user_email: item.user_email,
            user_phone: item.user_phone,
            category: item.category,
            title: item.title,
            description: item.description,
            quantity: item.quantity,
            location: item.location,
            image: item.image,
            points: item.points,
            approved: item.approved,
            status: item.status,
            created_at: item.created_at,
        }
    }
}
