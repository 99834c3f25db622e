use async_trait::async_trait;

use super::DBClient;
use crate::{
    dtos::userdtos::{CreateUserDto, UpdateUserDto},
    models::usermodel::{User, UserStatus},
};

#[async_trait]
pub trait UserExt {
    async fn get_users(&self) -> Result<Vec<User>, sqlx::Error>;

    async fn get_user(&self, user_id: i32) -> Result<Option<User>, sqlx::Error>;

    async fn save_user(&self, user: &CreateUserDto) -> Result<User, sqlx::Error>;

    /// Fills in the profile and activates the account.
    async fn complete_user_profile(
        &self,
        user_id: i32,
        profile: &UpdateUserDto,
    ) -> Result<Option<User>, sqlx::Error>;

    /// Soft delete: the row stays, only the status changes.
    async fn deactivate_user(&self, user_id: i32) -> Result<Option<User>, sqlx::Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_users(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, phone_number, gender, national_id, date_of_birth, status, role
            FROM users
            ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get_user(&self, user_id: i32) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, phone_number, gender, national_id, date_of_birth, status, role
            FROM users
            WHERE id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn save_user(&self, user: &CreateUserDto) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, role, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, phone_number, gender, national_id, date_of_birth, status, role"#,
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.role)
        .bind(UserStatus::Invited)
        .fetch_one(&self.pool)
        .await
    }

    async fn complete_user_profile(
        &self,
        user_id: i32,
        profile: &UpdateUserDto,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $1, phone_number = $2, email = $3, national_id = $4,
                date_of_birth = $5, gender = $6, status = $7
            WHERE id = $8
            RETURNING id, email, name, phone_number, gender, national_id, date_of_birth, status, role"#,
        )
        .bind(&profile.name)
        .bind(&profile.phone_number)
        .bind(&profile.email)
        .bind(&profile.national_id)
        .bind(profile.date_of_birth)
        .bind(profile.gender)
        .bind(UserStatus::Active)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn deactivate_user(&self, user_id: i32) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET status = $1
            WHERE id = $2
            RETURNING id, email, name, phone_number, gender, national_id, date_of_birth, status, role"#,
        )
        .bind(UserStatus::Inactive)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::is_unique_violation, models::usermodel::{Gender, UserRole}};
    use chrono::NaiveDate;
    use sqlx::PgPool;

    fn invite(email: &str) -> CreateUserDto {
        CreateUserDto {
            name: "Mariam Saleh".to_string(),
            email: email.to_string(),
            role: Some(UserRole::User),
        }
    }

    #[sqlx::test]
    async fn test_saved_user_is_invited(pool: PgPool) {
        let db_client = DBClient::new(pool);
        let user = db_client.save_user(&invite("mariam@example.com")).await.unwrap();

        assert_eq!(user.status, UserStatus::Invited);
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.phone_number, None);
    }

    #[sqlx::test]
    async fn test_duplicate_email_is_unique_violation(pool: PgPool) {
        let db_client = DBClient::new(pool);
        db_client.save_user(&invite("mariam@example.com")).await.unwrap();

        let err = db_client.save_user(&invite("mariam@example.com")).await.unwrap_err();
        assert!(is_unique_violation(&err));
    }

    #[sqlx::test]
    async fn test_completed_profile_is_active(pool: PgPool) {
        let db_client = DBClient::new(pool);
        let user = db_client.save_user(&invite("mariam@example.com")).await.unwrap();

        let profile = UpdateUserDto {
            name: "Mariam Saleh".to_string(),
            phone_number: "55512345".to_string(),
            email: "mariam@example.com".to_string(),
            national_id: "28763400012".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12),
            gender: Some(Gender::Female),
        };
        let updated = db_client.complete_user_profile(user.id, &profile).await.unwrap().unwrap();
        assert_eq!(updated.status, UserStatus::Active);
        assert_eq!(updated.gender, Some(Gender::Female));

        assert!(db_client.complete_user_profile(user.id + 1, &profile).await.unwrap().is_none());
    }

    #[sqlx::test]
    async fn test_deactivated_user_is_still_selectable(pool: PgPool) {
        let db_client = DBClient::new(pool);
        let user = db_client.save_user(&invite("mariam@example.com")).await.unwrap();

        let deactivated = db_client.deactivate_user(user.id).await.unwrap().unwrap();
        assert_eq!(deactivated.status, UserStatus::Inactive);

        let fetched = db_client.get_user(user.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, UserStatus::Inactive);
        assert_eq!(db_client.get_users().await.unwrap().len(), 1);

        assert!(db_client.deactivate_user(user.id + 1).await.unwrap().is_none());
    }
}
