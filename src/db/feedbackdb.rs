use async_trait::async_trait;

use super::{is_unique_violation, DBClient};
use crate::{dtos::feedbackdtos::FeedbackDto, models::feedbackmodel::Feedback};

#[async_trait]
pub trait FeedbackExt {
    async fn get_feedback_for_property(&self, property_id: i32) -> Result<Vec<Feedback>, sqlx::Error>;

    /// Returns `None` when the user already left feedback for the property.
    async fn create_feedback(
        &self,
        property_id: i32,
        feedback: &FeedbackDto,
    ) -> Result<Option<Feedback>, sqlx::Error>;

    /// Returns `None` when there is no feedback from the user to update.
    async fn update_feedback(
        &self,
        property_id: i32,
        feedback: &FeedbackDto,
    ) -> Result<Option<Feedback>, sqlx::Error>;
}

#[async_trait]
impl FeedbackExt for DBClient {
    async fn get_feedback_for_property(&self, property_id: i32) -> Result<Vec<Feedback>, sqlx::Error> {
        sqlx::query_as::<_, Feedback>(
            r#"
            SELECT id, user_id, property_id, rating, comment
            FROM feedback
            WHERE property_id = $1
            ORDER BY id"#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn create_feedback(
        &self,
        property_id: i32,
        feedback: &FeedbackDto,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i32> = sqlx::query_scalar(
            "SELECT id FROM feedback WHERE property_id = $1 AND user_id = $2",
        )
        .bind(property_id)
        .bind(feedback.user_id)
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_some() {
            return Ok(None);
        }

        let inserted = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (property_id, user_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, property_id, rating, comment"#,
        )
        .bind(property_id)
        .bind(feedback.user_id)
        .bind(feedback.rating)
        .bind(&feedback.comment)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(row) => {
                tx.commit().await?;
                Ok(Some(row))
            }
            // A concurrent request won the race; the unique key caught it.
            Err(e) if is_unique_violation(&e) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn update_feedback(
        &self,
        property_id: i32,
        feedback: &FeedbackDto,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        sqlx::query_as::<_, Feedback>(
            r#"
            UPDATE feedback
            SET rating = $1, comment = $2
            WHERE property_id = $3 AND user_id = $4
            RETURNING id, user_id, property_id, rating, comment"#,
        )
        .bind(feedback.rating)
        .bind(&feedback.comment)
        .bind(property_id)
        .bind(feedback.user_id)
        .fetch_optional(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures::{seed_property, seed_user};
    use sqlx::PgPool;

    fn feedback(user_id: i32, rating: i32) -> FeedbackDto {
        FeedbackDto {
            user_id: Some(user_id),
            rating: Some(rating),
            comment: Some("Quiet street".to_string()),
        }
    }

    #[sqlx::test]
    async fn test_second_feedback_is_rejected(pool: PgPool) {
        let property_id = seed_property(&pool).await;
        let user_id = seed_user(&pool, "tenant@example.com").await;
        let db_client = DBClient::new(pool);

        let first = db_client.create_feedback(property_id, &feedback(user_id, 4)).await.unwrap();
        assert_eq!(first.map(|f| f.rating), Some(4));

        let second = db_client.create_feedback(property_id, &feedback(user_id, 2)).await.unwrap();
        assert!(second.is_none());

        let stored = db_client.get_feedback_for_property(property_id).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].rating, 4);
    }

    #[sqlx::test]
    async fn test_concurrent_feedback_keeps_one_row(pool: PgPool) {
        let property_id = seed_property(&pool).await;
        let user_id = seed_user(&pool, "tenant@example.com").await;
        let db_client = DBClient::new(pool);

        // Both may pass the existence check; the unique key rejects the loser.
        let first = feedback(user_id, 5);
        let second = feedback(user_id, 1);
        let (a, b) = tokio::join!(
            db_client.create_feedback(property_id, &first),
            db_client.create_feedback(property_id, &second),
        );

        let created = [a.unwrap(), b.unwrap()].into_iter().flatten().count();
        assert_eq!(created, 1);
        assert_eq!(db_client.get_feedback_for_property(property_id).await.unwrap().len(), 1);
    }

    #[sqlx::test]
    async fn test_update_requires_existing_feedback(pool: PgPool) {
        let property_id = seed_property(&pool).await;
        let user_id = seed_user(&pool, "tenant@example.com").await;
        let db_client = DBClient::new(pool);

        assert!(db_client.update_feedback(property_id, &feedback(user_id, 3)).await.unwrap().is_none());

        db_client.create_feedback(property_id, &feedback(user_id, 3)).await.unwrap();
        let updated = db_client.update_feedback(property_id, &feedback(user_id, 5)).await.unwrap();
        assert_eq!(updated.map(|f| f.rating), Some(5));
    }
}
