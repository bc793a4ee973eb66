use crate::store::core::memory::MemoryStore;
use crate::store::domains::goal_store::GoalStore;
use crate::store::domains::user_store::UserStore;
use std::sync::Arc;

pub struct StoreContext {
    pub goal_store: Arc<GoalStore>,
    pub user_store: Arc<UserStore>,
}

impl StoreContext {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            goal_store: Arc::new(GoalStore::new(store.clone())),
            user_store: Arc::new(UserStore::new(store.clone())),
        }
    }
}
