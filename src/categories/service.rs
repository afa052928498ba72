use validator::Validate;

use crate::categories::model::CreateCategoryRequest;
use crate::categories::repository::CategoryRepository;
use crate::error::AppError;

#[derive(Clone)]
pub struct CategoryService {
    repository: CategoryRepository,
}

impl CategoryService {
    pub fn new(repository: CategoryRepository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<String>, AppError> {
        self.repository.list_categories().await
    }

    pub async fn add(&self, req: CreateCategoryRequest) -> Result<Vec<String>, AppError> {
        req.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::ValidationError("Category name is required".into()));
        }

        self.repository.add_category(name).await?;
        self.repository.list_categories().await
    }

    pub async fn remove(&self, name: &str) -> Result<Vec<String>, AppError> {
        self.repository.remove_category(name).await?;
        self.repository.list_categories().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;
    use crate::items::model::{Item, ItemStatus};
    use crate::items::repository::ItemRepository;
    use chrono::Utc;
    use uuid::Uuid;

    fn test_store() -> Store {
        let dir = std::env::temp_dir().join(format!("recyclo-categories-test-{}", Uuid::new_v4()));
        Store::open(&dir).unwrap()
    }

    fn test_service(store: &Store) -> CategoryService {
        CategoryService::new(CategoryRepository::new(store.clone()))
    }

    #[tokio::test]
    async fn starts_with_the_default_set() {
        let store = test_store();
        let service = test_service(&store);
        assert_eq!(
            service.list().await.unwrap(),
            vec!["Paper", "Plastic", "Metal", "E-waste"]
        );
    }

    #[tokio::test]
    async fn adding_an_existing_category_is_a_no_op() {
        let store = test_store();
        let service = test_service(&store);

        let after_new = service
            .add(CreateCategoryRequest {
                name: "Glass".into(),
            })
            .await
            .unwrap();
        assert!(after_new.contains(&"Glass".to_string()));
        assert_eq!(after_new.len(), 5);

        let after_dup = service
            .add(CreateCategoryRequest {
                name: "Glass".into(),
            })
            .await
            .unwrap();
        assert_eq!(after_dup.len(), 5);
    }

    #[tokio::test]
    async fn blank_names_are_rejected() {
        let store = test_store();
        let service = test_service(&store);

        let blank = service
            .add(CreateCategoryRequest { name: "   ".into() })
            .await;
        assert!(matches!(blank, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn removing_a_category_leaves_tagged_items_alone() {
        let store = test_store();
        let service = test_service(&store);
        let items = ItemRepository::new(store.clone());

        let item = Item {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            user_name: "Bob Johnson".into(),
            user_email: "bob@example.com".into(),
            user_phone: String::new(),
            category: "Metal".into(),
            title: "Aluminum Cans".into(),
            description: "Various aluminum cans".into(),
            quantity: "20 kg".into(),
            location: "Chicago, IL".into(),
            image: None,
            points: 60,
            approved: true,
            status: ItemStatus::Pending,
            created_at: Utc::now(),
        };
        items.create_item(item.clone()).await.unwrap();

        let remaining = service.remove("Metal").await.unwrap();
        assert!(!remaining.contains(&"Metal".to_string()));

        // The item keeps its now-orphaned category string
        let kept = items.get_item(&item.id).await.unwrap();
        assert_eq!(kept.category, "Metal");
    }
}
