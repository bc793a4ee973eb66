use crate::models::goal::Goal;
use serde::{Deserialize, Serialize};

/// The three goal collections grow only by append and keep duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub accepted_goals: Vec<Goal>,
    #[serde(default)]
    pub achieved_goals: Vec<Goal>,
    #[serde(default)]
    pub challenged_goals: Vec<Goal>,
}
