use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::coerce::{lenient, lenient_id};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDto {
    #[serde(default, deserialize_with = "lenient_id")]
    #[validate(required(message = "User ID must be a number"))]
    pub user_id: Option<i32>,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(
        required(message = "Rating must be an integer"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    pub rating: Option<i32>,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(length(min = 1, max = 500, message = "Comment must be between 1 and 500 characters"))]
    pub comment: Option<String>,
}
