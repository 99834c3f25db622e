use async_trait::async_trait;

use super::DBClient;
use crate::{dtos::propertydtos::PropertyDto, models::propertymodel::Property};

#[async_trait]
pub trait PropertyExt {
    async fn get_properties(&self) -> Result<Vec<Property>, sqlx::Error>;

    async fn get_property_by_id(&self, property_id: i32) -> Result<Option<Property>, sqlx::Error>;

    async fn create_property(&self, property: &PropertyDto) -> Result<Property, sqlx::Error>;

    async fn update_property(
        &self,
        property_id: i32,
        property: &PropertyDto,
    ) -> Result<Option<Property>, sqlx::Error>;

    /// Hard delete. Fails with a foreign key violation while contracts or
    /// feedback still reference the property.
    async fn delete_property(&self, property_id: i32) -> Result<Option<Property>, sqlx::Error>;
}

#[async_trait]
impl PropertyExt for DBClient {
    async fn get_properties(&self) -> Result<Vec<Property>, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            r#"
            SELECT id, address, size, ownership_type, property_type, furnishing_type, usage_type, image_url
            FROM properties
            ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get_property_by_id(&self, property_id: i32) -> Result<Option<Property>, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            r#"
            SELECT id, address, size, ownership_type, property_type, furnishing_type, usage_type, image_url
            FROM properties
            WHERE id = $1"#,
        )
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create_property(&self, property: &PropertyDto) -> Result<Property, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                address, size, ownership_type, property_type, furnishing_type, usage_type, image_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, address, size, ownership_type, property_type, furnishing_type, usage_type, image_url"#,
        )
        .bind(&property.address)
        .bind(property.size)
        .bind(property.ownership_type)
        .bind(property.property_type)
        .bind(property.furnishing_type)
        .bind(property.usage_type)
        .bind(&property.image_url)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_property(
        &self,
        property_id: i32,
        property: &PropertyDto,
    ) -> Result<Option<Property>, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties
            SET address = $1, size = $2, ownership_type = $3, property_type = $4,
                furnishing_type = $5, usage_type = $6, image_url = $7
            WHERE id = $8
            RETURNING id, address, size, ownership_type, property_type, furnishing_type, usage_type, image_url"#,
        )
        .bind(&property.address)
        .bind(property.size)
        .bind(property.ownership_type)
        .bind(property.property_type)
        .bind(property.furnishing_type)
        .bind(property.usage_type)
        .bind(&property.image_url)
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_property(&self, property_id: i32) -> Result<Option<Property>, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            r#"
            DELETE FROM properties
            WHERE id = $1
            RETURNING id, address, size, ownership_type, property_type, furnishing_type, usage_type, image_url"#,
        )
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await
    }
}
