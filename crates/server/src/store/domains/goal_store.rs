use crate::models::category::Category;
use crate::models::goal::Goal;
use crate::store::core::MemoryStore;
use std::sync::Arc;

pub struct GoalStore {
    store: Arc<MemoryStore>,
}

impl GoalStore {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Full catalog in load order.
    pub fn get_goals(&self) -> Vec<Goal> {
        self.store.goals().to_vec()
    }

    pub fn get_goal(&self, id: u32) -> Option<Goal> {
        self.store.goals().iter().find(|goal| goal.id == id).cloned()
    }

    /// Category names match case-insensitively.
    pub fn find_category(&self, name: &str) -> Option<Category> {
        self.store
            .categories()
            .iter()
            .find(|category| category.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Order-preserving filter on the category foreign key. A category id
    /// no goal references yields an empty list, not an error.
    pub fn goals_in_category(&self, category_id: &str) -> Vec<Goal> {
        self.store
            .goals()
            .iter()
            .filter(|goal| goal.category_id == category_id)
            .cloned()
            .collect()
    }
}
