use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "ownership_type")]
pub enum OwnershipType {
    Owned,
    Rented,
    Managed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "property_type")]
pub enum PropertyType {
    Villa,
    Apartment,
    Shop,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "furnishing_type")]
pub enum FurnishingType {
    Furnished,
    Unfurnished,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "usage_type")]
pub enum UsageType {
    Residential,
    Commercial,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i32,
    pub address: String,
    /// Square metres.
    pub size: f64,
    pub ownership_type: OwnershipType,
    pub property_type: PropertyType,
    pub furnishing_type: FurnishingType,
    pub usage_type: UsageType,
    pub image_url: Option<String>,
}
