use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    models::propertymodel::{FurnishingType, OwnershipType, PropertyType, UsageType},
    utils::coerce::{lenient, lenient_f64, lenient_string},
};

/// Body for both creating and replacing a property.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(min = 5, max = 100, message = "Address must be between 5 and 100 characters"))]
    pub address: String,

    #[serde(default, deserialize_with = "lenient_f64")]
    #[validate(
        required(message = "Size must be a number"),
        range(min = 1.0, message = "Size must be at least 1")
    )]
    pub size: Option<f64>,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(required(message = "Ownership type must be one of Owned, Rented, Managed"))]
    pub ownership_type: Option<OwnershipType>,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(required(message = "Property type must be one of Villa, Apartment, Shop"))]
    pub property_type: Option<PropertyType>,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(required(message = "Furnishing type must be one of Furnished, Unfurnished"))]
    pub furnishing_type: Option<FurnishingType>,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(required(message = "Usage type must be one of Residential, Commercial"))]
    pub usage_type: Option<UsageType>,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(url(message = "Image URL is invalid"))]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_dto_accepts_villa() {
        let dto: PropertyDto = serde_json::from_str(
            r#"{
                "address": "12 Corniche Street",
                "size": "120",
                "ownershipType": "Owned",
                "propertyType": "Villa",
                "furnishingType": "Furnished",
                "usageType": "Residential"
            }"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.size, Some(120.0));
        assert_eq!(dto.property_type, Some(PropertyType::Villa));
        assert_eq!(dto.image_url, None);
    }

    #[test]
    fn test_property_dto_reports_every_violation() {
        let dto = PropertyDto {
            address: "abc".to_string(),
            size: Some(0.5),
            ownership_type: Some(OwnershipType::Managed),
            property_type: Some(PropertyType::Shop),
            furnishing_type: Some(FurnishingType::Unfurnished),
            usage_type: Some(UsageType::Commercial),
            image_url: Some("not a url".to_string()),
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 3);
        assert!(fields.contains_key("address"));
        assert!(fields.contains_key("size"));
        assert!(fields.contains_key("image_url"));
    }

    #[test]
    fn test_unknown_enums_are_reported_with_rule_violations() {
        let dto: PropertyDto = serde_json::from_str(
            r#"{
                "address": "abc",
                "size": 0,
                "ownershipType": "Leased",
                "propertyType": "Castle",
                "furnishingType": "Furnished",
                "usageType": "Residential"
            }"#,
        )
        .unwrap();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 4);
        for field in ["address", "size", "ownership_type", "property_type"] {
            assert!(fields.contains_key(field), "missing {}", field);
        }
    }
}
