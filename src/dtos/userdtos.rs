use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    models::usermodel::{Gender, UserRole},
    utils::coerce::{lenient, lenient_date, lenient_string},
};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(required(message = "Role must be one of admin, user"))]
    pub role: Option<UserRole>,
}

/// Profile completion; every field is required and the account becomes active.
#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(equal = 8, message = "Phone number must be exactly 8 characters"))]
    pub phone_number: String,

    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(equal = 11, message = "National ID must be exactly 11 characters"))]
    pub national_id: String,

    #[serde(default, deserialize_with = "lenient_date")]
    #[validate(required(message = "Date of birth must be an ISO date"))]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(required(message = "Gender must be one of male, female"))]
    pub gender: Option<Gender>,
}

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: &'static str,
    pub message: String,
}
