use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::auth::repository::AuthRepository;
use crate::error::AppError;
use crate::items::model::{
    AdminItemsQuery, AdvanceStatusRequest, BrowseItemsQuery, Item, ItemResponse, ItemStatus,
    SubmitItemRequest, UpdateItemRequest,
};
use crate::items::repository::ItemRepository;
use crate::rewards::service::RewardService;

// The source UI capped image uploads at 5 MB; base64 encoding inflates the
// payload by roughly 4/3.
const MAX_IMAGE_PAYLOAD_LEN: usize = 7 * 1024 * 1024;

#[derive(Clone)]
pub struct ItemService {
    repository: ItemRepository,
    reward_service: RewardService,
    auth_repository: AuthRepository,
}

impl ItemService {
    pub fn new(
        repository: ItemRepository,
        reward_service: RewardService,
        auth_repository: AuthRepository,
    ) -> Self {
        Self {
            repository,
            reward_service,
            auth_repository,
        }
    }

    pub async fn submit(
        &self,
        user_id: &str,
        req: SubmitItemRequest,
    ) -> Result<ItemResponse, AppError> {
        req.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if let Some(image) = &req.image {
            if image.len() > MAX_IMAGE_PAYLOAD_LEN {
                return Err(AppError::ValidationError(
                    "Image size should be less than 5MB".into(),
                ));
            }
        }

        let user_id = Uuid::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("Invalid user ID".to_string()))?;

        // Snapshot the submitter onto the item
        let user = self.auth_repository.find_user_by_id(&user_id).await?;

        let points = points_for(&req.category, &req.quantity);

        let item = Item {
            id: Uuid::new_v4(),
            user_id,
            user_name: user.name,
            user_email: user.email,
            user_phone: req
                .phone
                .filter(|p| !p.is_empty())
                .or(user.phone)
                .unwrap_or_default(),
            category: req.category,
            title: req.title,
            description: req.description,
            quantity: req.quantity,
            location: req.location,
            image: req.image,
            points,
            approved: false,
            status: ItemStatus::Pending,
            created_at: Utc::now(),
        };

        let created = self.repository.create_item(item).await?;
        Ok(created.into())
    }

    // Approved items only, with optional category filter and free-text
    // search over title and description.
    pub async fn browse(&self, query: BrowseItemsQuery) -> Result<Vec<ItemResponse>, AppError> {
        let items = self.repository.list_items().await?;

        let search = query.search.as_deref().map(str::to_lowercase);
        let filtered = items
            .into_iter()
            .filter(|i| i.approved)
            .filter(|i| match &query.category {
                Some(category) => i.category == *category,
                None => true,
            })
            .filter(|i| match &search {
                Some(term) => {
                    i.title.to_lowercase().contains(term)
                        || i.description.to_lowercase().contains(term)
                }
                None => true,
            })
            .map(ItemResponse::from)
            .collect();

        Ok(filtered)
    }

    pub async fn list_mine(&self, user_id: &str) -> Result<Vec<ItemResponse>, AppError> {
        let user_id = Uuid::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("Invalid user ID".to_string()))?;

        let items = self.repository.list_by_user(&user_id).await?;
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    // Admin listing across all items; search matches title or submitter name.
    pub async fn admin_list(&self, query: AdminItemsQuery) -> Result<Vec<ItemResponse>, AppError> {
        let items = self.repository.list_items().await?;

        let search = query.search.as_deref().map(str::to_lowercase);
        let filtered = items
            .into_iter()
            .filter(|i| match &query.category {
                Some(category) => i.category == *category,
                None => true,
            })
            .filter(|i| match query.status {
                Some(status) => i.status == status,
                None => true,
            })
            .filter(|i| match &search {
                Some(term) => {
                    i.title.to_lowercase().contains(term)
                        || i.user_name.to_lowercase().contains(term)
                }
                None => true,
            })
            .map(ItemResponse::from)
            .collect();

        Ok(filtered)
    }

    pub async fn approve(&self, item_id: &str) -> Result<ItemResponse, AppError> {
        let item_id = parse_item_id(item_id)?;
        let item = self.repository.set_approved(&item_id, true).await?;
        Ok(item.into())
    }

    pub async fn reject(&self, item_id: &str) -> Result<ItemResponse, AppError> {
        let item_id = parse_item_id(item_id)?;
        let item = self.repository.set_approved(&item_id, false).await?;
        Ok(item.into())
    }

    /// Sets the pickup status; transitions are free among the admin targets.
    /// Only the first transition of an approved item into Completed issues a
    /// reward and credits the owner — repeating the call is a pure status
    /// write with no second credit.
    pub async fn advance_status(
        &self,
        item_id: &str,
        req: AdvanceStatusRequest,
    ) -> Result<ItemResponse, AppError> {
        let item_id = parse_item_id(item_id)?;
        let item = self.repository.set_status(&item_id, req.status).await?;

        if req.status == ItemStatus::Completed && item.approved {
            let issued = self.reward_service.issue_for_item(&item).await?;
            if issued {
                self.auth_repository
                    .credit_points(&item.user_id, item.points)
                    .await?;
            }
        }

        Ok(item.into())
    }

    pub async fn edit(
        &self,
        item_id: &str,
        user_id: &str,
        req: UpdateItemRequest,
    ) -> Result<ItemResponse, AppError> {
        let item_id = parse_item_id(item_id)?;
        let user_id = Uuid::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("Invalid user ID".to_string()))?;

        let item = self.repository.get_item(&item_id).await?;
        if item.user_id != user_id {
            return Err(AppError::AuthorizationError(
                "You can only edit your own items".into(),
            ));
        }

        let updated = self.repository.update_fields(&item_id, &req).await?;
        Ok(updated.into())
    }

    // Owner delete. Any issued reward is left in the ledger; it carries its
    // own snapshot of the item.
    pub async fn delete(&self, item_id: &str, user_id: &str) -> Result<(), AppError> {
        let item_id = parse_item_id(item_id)?;
        let user_id = Uuid::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("Invalid user ID".to_string()))?;

        let item = self.repository.get_item(&item_id).await?;
        if item.user_id != user_id {
            return Err(AppError::AuthorizationError(
                "You can only delete your own items".into(),
            ));
        }

        self.repository.delete_item(&item_id).await?;
        Ok(())
    }
}

fn parse_item_id(item_id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(item_id).map_err(|_| AppError::ValidationError("Invalid item ID".to_string()))
}

pub fn base_points(category: &str) -> i64 {
    match category {
        "Paper" => 10,
        "Plastic" => 20,
        "Metal" => 30,
        "E-waste" => 100,
        _ => 10,
    }
}

// Leading decimal number of the free-form quantity string, parseFloat-style:
// "30 kg" -> 30.0, "2 units" -> 2.0, anything unparsable -> 0.0.
pub fn parse_leading_quantity(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    if !s[digits_start..end].bytes().any(|b| b.is_ascii_digit()) {
        return 0.0;
    }

    s[..end].parse().unwrap_or(0.0)
}

pub fn points_for(category: &str, quantity: &str) -> i64 {
    let qty = parse_leading_quantity(quantity);
    ((base_points(category) as f64) * (qty / 10.0)).floor() as i64
}
