use uuid::Uuid;

use crate::{db::Store, error::AppError};

use super::model::{Item, ItemStatus, UpdateItemRequest};

#[derive(Clone)]
pub struct ItemRepository {
    store: Store,
}

impl ItemRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn create_item(&self, item: Item) -> Result<Item, AppError> {
        self.store.items.insert(item.clone())?;
        Ok(item)
    }

    pub async fn get_item(&self, item_id: &Uuid) -> Result<Item, AppError> {
        self.store
            .items
            .find_one(|i| i.id == *item_id)?
            .ok_or_else(|| AppError::NotFoundError(format!("Item with ID {} not found", item_id)))
    }

    pub async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        self.store.items.all()
    }

    pub async fn list_by_user(&self, user_id: &Uuid) -> Result<Vec<Item>, AppError> {
        self.store.items.find(|i| i.user_id == *user_id)
    }

    pub async fn set_approved(&self, item_id: &Uuid, approved: bool) -> Result<Item, AppError> {
        self.store
            .items
            .update_one(|i| i.id == *item_id, |i| i.approved = approved)?
            .ok_or_else(|| AppError::NotFoundError(format!("Item with ID {} not found", item_id)))
    }

    pub async fn set_status(&self, item_id: &Uuid, status: ItemStatus) -> Result<Item, AppError> {
        self.store
            .items
            .update_one(|i| i.id == *item_id, |i| i.status = status)?
            .ok_or_else(|| AppError::NotFoundError(format!("Item with ID {} not found", item_id)))
    }

    // Applies only the owner-editable fields; everything else, points
    // included, is left untouched.
    pub async fn update_fields(
        &self,
        item_id: &Uuid,
        updates: &UpdateItemRequest,
    ) -> Result<Item, AppError> {
        self.store
            .items
            .update_one(
                |i| i.id == *item_id,
                |i| {
                    if let Some(title) = &updates.title {
                        i.title = title.clone();
                    }
                    if let Some(description) = &updates.description {
                        i.description = description.clone();
                    }
                    if let Some(quantity) = &updates.quantity {
                        i.quantity = quantity.clone();
                    }
                    if let Some(location) = &updates.location {
                        i.location = location.clone();
                    }
                },
            )?
            .ok_or_else(|| AppError::NotFoundError(format!("Item with ID {} not found", item_id)))
    }

    pub async fn delete_item(&self, item_id: &Uuid) -> Result<bool, AppError> {
        let removed = self.store.items.delete_where(|i| i.id == *item_id)?;
        Ok(removed > 0)
    }

    pub async fn delete_by_user(&self, user_id: &Uuid) -> Result<usize, AppError> {
        self.store.items.delete_where(|i| i.user_id == *user_id)
    }

    pub async fn count_items(&self) -> Result<usize, AppError> {
        self.store.items.count(|_| true)
    }

    pub async fn count_pending_approval(&self) -> Result<usize, AppError> {
        self.store.items.count(|i| !i.approved)
    }

    pub async fn count_by_status(&self, status: ItemStatus) -> Result<usize, AppError> {
        self.store.items.count(|i| i.status == status)
    }

    pub async fn count_by_user(&self, user_id: &Uuid) -> Result<usize, AppError> {
        self.store.items.count(|i| i.user_id == *user_id)
    }
}
