// Rows for database tests. Each `#[sqlx::test]` gets a fresh, migrated
// database, so fixed emails and ids never collide across tests.
use chrono::NaiveDate;
use sqlx::PgPool;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn seed_property(pool: &PgPool) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO properties (address, size, ownership_type, property_type, furnishing_type, usage_type)
        VALUES ('12 Corniche Street', 120, 'Owned', 'Villa', 'Furnished', 'Residential')
        RETURNING id"#,
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_user(pool: &PgPool, email: &str) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO users (email, name, status, role)
        VALUES ($1, 'Mariam Saleh', 'Invited', 'user')
        RETURNING id"#,
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_contract(
    pool: &PgPool,
    property_id: i32,
    user_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO contracts (property_id, user_id, start_date, end_date, contract_url, status)
        VALUES ($1, $2, $3, $4, 'https://docs.example.com/seed.pdf', 'Pending')
        RETURNING id"#,
    )
    .bind(property_id)
    .bind(user_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_contracts(pool: &PgPool, property_id: i32) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM contracts WHERE property_id = $1")
        .bind(property_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
