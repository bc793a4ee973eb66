use crate::error::ServiceError;
use crate::models::category::Category;
use crate::models::goal::Goal;
use crate::models::user::User;
use std::fs;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-wide dataset, loaded once at startup and never reloaded.
///
/// Goals and categories are immutable after load. Users accumulate goal
/// copies at request time, so they sit behind a lock; the server runs
/// handlers on multiple worker threads.
pub struct MemoryStore {
    goals: Vec<Goal>,
    categories: Vec<Category>,
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    /// The first user in the collection is the logged-in user, so an empty
    /// user dataset is rejected here rather than at request time.
    pub fn new(
        goals: Vec<Goal>,
        categories: Vec<Category>,
        users: Vec<User>,
    ) -> Result<Self, ServiceError> {
        if users.is_empty() {
            return Err(ServiceError::Custom(
                "user dataset is empty, no user can be logged in".to_string(),
            ));
        }
        Ok(Self {
            goals,
            categories,
            users: RwLock::new(users),
        })
    }

    /// Reads the three seed datasets from `dir`. Any failure here is fatal
    /// to startup, not a request-time concern.
    pub fn load(dir: &Path) -> Result<Self, ServiceError> {
        let goals: Vec<Goal> = read_dataset(&dir.join("goals.json"))?;
        let users: Vec<User> = read_dataset(&dir.join("users.json"))?;
        let categories: Vec<Category> = read_dataset(&dir.join("categories.json"))?;
        Self::new(goals, categories, users)
    }

    pub(crate) fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub(crate) fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub(crate) fn read_users(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, ServiceError> {
        self.users
            .read()
            .map_err(|e| ServiceError::LockPoisoned(e.to_string()))
    }

    pub(crate) fn write_users(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, ServiceError> {
        self.users
            .write()
            .map_err(|e| ServiceError::LockPoisoned(e.to_string()))
    }
}

fn read_dataset<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, ServiceError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_seed_files(dir: &Path) {
        fs::write(
            dir.join("goals.json"),
            r#"[
                {"id": 1, "categoryId": "fitness", "description": "Run a 10k"},
                {"id": 2, "categoryId": "learning", "description": "Finish an online course"}
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.join("categories.json"),
            r#"[
                {"id": "fitness", "name": "Fitness"},
                {"id": "learning", "name": "Learning"}
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.join("users.json"),
            r#"[
                {"id": 1, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com",
                 "acceptedGoals": [], "achievedGoals": [], "challengedGoals": []},
                {"id": 2, "firstName": "Alan", "lastName": "Turing", "email": "alan@example.com"}
            ]"#,
        )
        .unwrap();
    }

    #[test]
    fn load_reads_all_three_datasets() {
        let dir = tempfile::tempdir().unwrap();
        write_seed_files(dir.path());

        let store = MemoryStore::load(dir.path()).unwrap();
        assert_eq!(store.goals().len(), 2);
        assert_eq!(store.categories().len(), 2);

        let users = store.read_users().unwrap();
        assert_eq!(users.len(), 2);
        // First record is the logged-in user
        assert_eq!(users[0].id, 1);
        // Collections absent from the file default to empty
        assert!(users[1].accepted_goals.is_empty());
    }

    #[test]
    fn load_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = MemoryStore::load(dir.path());
        assert!(matches!(result, Err(ServiceError::Io(_))));
    }

    #[test]
    fn load_fails_on_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        write_seed_files(dir.path());
        fs::write(dir.path().join("goals.json"), "not json").unwrap();

        let result = MemoryStore::load(dir.path());
        assert!(matches!(result, Err(ServiceError::SerializationError(_))));
    }

    #[test]
    fn empty_user_dataset_is_rejected() {
        let result = MemoryStore::new(vec![], vec![], vec![]);
        assert!(matches!(result, Err(ServiceError::Custom(_))));
    }
}
