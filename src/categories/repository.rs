use crate::{db::Store, error::AppError};

#[derive(Clone)]
pub struct CategoryRepository {
    store: Store,
}

impl CategoryRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list_categories(&self) -> Result<Vec<String>, AppError> {
        self.store.categories.all()
    }

    // Set semantics: adding an existing name changes nothing.
    pub async fn add_category(&self, name: &str) -> Result<bool, AppError> {
        self.store
            .categories
            .insert_if_absent(|c| c == name, name.to_string())
    }

    // Removes the name from the set only; items keep whatever category
    // string they were submitted with.
    pub async fn remove_category(&self, name: &str) -> Result<bool, AppError> {
        let removed = self.store.categories.delete_where(|c| c == name)?;
        Ok(removed > 0)
    }
}
