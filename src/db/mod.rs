use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::model::User;
use crate::error::AppError;
use crate::items::model::Item;
use crate::rewards::model::Reward;

// Categories seeded on first run only. An explicitly emptied set must stay
// empty across restarts, so seeding is keyed on file absence, not emptiness.
const DEFAULT_CATEGORIES: [&str; 4] = ["Paper", "Plastic", "Metal", "E-waste"];

/// Local persistence adapter: one JSON file per named collection under a
/// data directory owned exclusively by this process. Every mutation runs
/// under the collection's write lock for the full read-modify-write, then
/// persists via temp-file + rename.
#[derive(Clone)]
pub struct Store {
    pub users: Collection<User>,
    pub items: Collection<Item>,
    pub categories: Collection<String>,
    pub rewards: Collection<Reward>,
}

impl Store {
    pub fn open(data_dir: &Path) -> Result<Self, AppError> {
        fs::create_dir_all(data_dir)?;

        let seed_categories = !data_dir.join("categories.json").exists();

        let store = Self {
            users: Collection::open(data_dir, "users")?,
            items: Collection::open(data_dir, "items")?,
            categories: Collection::open(data_dir, "categories")?,
            rewards: Collection::open(data_dir, "rewards")?,
        };

        if seed_categories {
            let defaults = DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect();
            store.categories.replace_all(defaults)?;
        }

        Ok(store)
    }
}

#[derive(Clone)]
pub struct Collection<T> {
    path: PathBuf,
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    fn open(data_dir: &Path, name: &str) -> Result<Self, AppError> {
        let path = data_dir.join(format!("{}.json", name));

        let records = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| {
                AppError::StorageError(format!("Failed to load collection {}: {}", name, e))
            })?
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            records: Arc::new(RwLock::new(records)),
        })
    }

    pub fn all(&self) -> Result<Vec<T>, AppError> {
        let records = self.records.read().map_err(|_| lock_poisoned())?;
        Ok(records.clone())
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Result<Vec<T>, AppError> {
        let records = self.records.read().map_err(|_| lock_poisoned())?;
        Ok(records.iter().filter(|r| pred(r)).cloned().collect())
    }

    pub fn find_one(&self, pred: impl Fn(&T) -> bool) -> Result<Option<T>, AppError> {
        let records = self.records.read().map_err(|_| lock_poisoned())?;
        Ok(records.iter().find(|r| pred(r)).cloned())
    }

    pub fn count(&self, pred: impl Fn(&T) -> bool) -> Result<usize, AppError> {
        let records = self.records.read().map_err(|_| lock_poisoned())?;
        Ok(records.iter().filter(|r| pred(r)).count())
    }

    pub fn insert(&self, record: T) -> Result<(), AppError> {
        let mut records = self.records.write().map_err(|_| lock_poisoned())?;
        records.push(record);
        self.persist(&records)
    }

    /// Atomic check-then-create: inserts only when no record matches the
    /// predicate. Returns whether the insert happened. The check and the
    /// insert run under one write lock.
    pub fn insert_if_absent(
        &self,
        pred: impl Fn(&T) -> bool,
        record: T,
    ) -> Result<bool, AppError> {
        let mut records = self.records.write().map_err(|_| lock_poisoned())?;
        if records.iter().any(|r| pred(r)) {
            return Ok(false);
        }
        records.push(record);
        self.persist(&records)?;
        Ok(true)
    }

    /// Transactional update of the first matching record. Returns the
    /// updated record, or None when nothing matched.
    pub fn update_one(
        &self,
        pred: impl Fn(&T) -> bool,
        mutate: impl FnOnce(&mut T),
    ) -> Result<Option<T>, AppError> {
        let mut records = self.records.write().map_err(|_| lock_poisoned())?;
        let Some(record) = records.iter_mut().find(|r| pred(r)) else {
            return Ok(None);
        };
        mutate(record);
        let updated = record.clone();
        self.persist(&records)?;
        Ok(Some(updated))
    }

    /// Deletes every matching record, returning how many were removed.
    pub fn delete_where(&self, pred: impl Fn(&T) -> bool) -> Result<usize, AppError> {
        let mut records = self.records.write().map_err(|_| lock_poisoned())?;
        let before = records.len();
        records.retain(|r| !pred(r));
        let removed = before - records.len();
        if removed > 0 {
            self.persist(&records)?;
        }
        Ok(removed)
    }

    pub fn replace_all(&self, new_records: Vec<T>) -> Result<(), AppError> {
        let mut records = self.records.write().map_err(|_| lock_poisoned())?;
        *records = new_records;
        self.persist(&records)
    }

    fn persist(&self, records: &[T]) -> Result<(), AppError> {
        let raw = serde_json::to_vec_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn lock_poisoned() -> AppError {
    AppError::StorageError("Collection lock poisoned".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use uuid::Uuid;

    #[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
    struct TestRecord {
        id: u32,
        label: String,
    }

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("recyclo-db-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn record(id: u32, label: &str) -> TestRecord {
        TestRecord {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn records_survive_reopen() {
        let dir = temp_dir();
        let collection: Collection<TestRecord> = Collection::open(&dir, "things").unwrap();
        collection.insert(record(1, "one")).unwrap();
        collection.insert(record(2, "two")).unwrap();

        let reopened: Collection<TestRecord> = Collection::open(&dir, "things").unwrap();
        assert_eq!(reopened.all().unwrap().len(), 2);
        assert_eq!(
            reopened.find_one(|r| r.id == 2).unwrap().unwrap().label,
            "two"
        );
    }

    #[test]
    fn insert_if_absent_inserts_at_most_once() {
        let dir = temp_dir();
        let collection: Collection<TestRecord> = Collection::open(&dir, "things").unwrap();

        assert!(collection
            .insert_if_absent(|r| r.id == 7, record(7, "first"))
            .unwrap());
        assert!(!collection
            .insert_if_absent(|r| r.id == 7, record(7, "second"))
            .unwrap());

        let matching = collection.find(|r| r.id == 7).unwrap();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].label, "first");
    }

    #[test]
    fn update_one_persists_the_mutation() {
        let dir = temp_dir();
        let collection: Collection<TestRecord> = Collection::open(&dir, "things").unwrap();
        collection.insert(record(1, "before")).unwrap();

        let updated = collection
            .update_one(|r| r.id == 1, |r| r.label = "after".to_string())
            .unwrap();
        assert_eq!(updated.unwrap().label, "after");

        let reopened: Collection<TestRecord> = Collection::open(&dir, "things").unwrap();
        assert_eq!(
            reopened.find_one(|r| r.id == 1).unwrap().unwrap().label,
            "after"
        );
    }

    #[test]
    fn update_one_returns_none_for_missing_records() {
        let dir = temp_dir();
        let collection: Collection<TestRecord> = Collection::open(&dir, "things").unwrap();
        let updated = collection
            .update_one(|r| r.id == 99, |r| r.label.clear())
            .unwrap();
        assert!(updated.is_none());
    }

    #[test]
    fn delete_where_removes_matching_records() {
        let dir = temp_dir();
        let collection: Collection<TestRecord> = Collection::open(&dir, "things").unwrap();
        collection.insert(record(1, "keep")).unwrap();
        collection.insert(record(2, "drop")).unwrap();
        collection.insert(record(3, "drop")).unwrap();

        assert_eq!(collection.delete_where(|r| r.label == "drop").unwrap(), 2);
        assert_eq!(collection.all().unwrap(), vec![record(1, "keep")]);
    }

    #[test]
    fn store_seeds_default_categories_on_first_open_only() {
        let dir = temp_dir();
        let store = Store::open(&dir).unwrap();
        assert_eq!(
            store.categories.all().unwrap(),
            vec!["Paper", "Plastic", "Metal", "E-waste"]
        );

        // An emptied set must stay empty on reopen.
        store.categories.replace_all(Vec::new()).unwrap();
        let reopened = Store::open(&dir).unwrap();
        assert!(reopened.categories.all().unwrap().is_empty());
    }
}
