use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i32,
    pub user_id: i32,
    pub property_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
}
