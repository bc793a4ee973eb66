use serde::{Deserialize, Serialize};

/// Catalog entry. Goals are immutable after load; user actions copy them
/// by value into the per-user collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: u32,
    pub category_id: String,
    pub description: String,
}
