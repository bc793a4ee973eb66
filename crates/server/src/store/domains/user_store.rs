use crate::error::ServiceError;
use crate::models::goal::Goal;
use crate::models::user::User;
use crate::store::core::MemoryStore;
use std::sync::Arc;

pub struct UserStore {
    store: Arc<MemoryStore>,
}

impl UserStore {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// The logged-in user is the first record of the loaded dataset.
    /// `MemoryStore::new` guarantees it exists.
    pub fn get_current_user(&self) -> Result<User, ServiceError> {
        let users = self.store.read_users()?;
        Ok(users[0].clone())
    }

    pub fn get_user(&self, id: u32) -> Result<Option<User>, ServiceError> {
        let users = self.store.read_users()?;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    /// Appends without deduplication; accepting the same goal twice records
    /// it twice.
    pub fn accept_goal(&self, goal: Goal) -> Result<(), ServiceError> {
        let mut users = self.store.write_users()?;
        users[0].accepted_goals.push(goal);
        Ok(())
    }

    /// Independent of acceptance; achieving an un-accepted goal is allowed.
    pub fn achieve_goal(&self, goal: Goal) -> Result<(), ServiceError> {
        let mut users = self.store.write_users()?;
        users[0].achieved_goals.push(goal);
        Ok(())
    }

    /// The target may be any user, including the logged-in one. An unknown
    /// target is a validation error and leaves every collection untouched.
    pub fn challenge_goal(&self, user_id: u32, goal: Goal) -> Result<(), ServiceError> {
        let mut users = self.store.write_users()?;
        match users.iter_mut().find(|user| user.id == user_id) {
            Some(user) => {
                user.challenged_goals.push(goal);
                Ok(())
            }
            None => Err(ServiceError::Validation {
                field: "userId",
                message: "Invalid user specified".to_string(),
            }),
        }
    }
}
