use async_trait::async_trait;
use sqlx::{Postgres, Transaction};

use super::DBClient;
use crate::models::contractmodel::{Contract, NewContract};

#[async_trait]
pub trait ContractExt {
    async fn get_contracts_by_property(&self, property_id: i32) -> Result<Vec<Contract>, sqlx::Error>;

    async fn get_contracts_by_user(&self, user_id: i32) -> Result<Vec<Contract>, sqlx::Error>;
}

#[async_trait]
impl ContractExt for DBClient {
    async fn get_contracts_by_property(&self, property_id: i32) -> Result<Vec<Contract>, sqlx::Error> {
        sqlx::query_as::<_, Contract>(
            r#"
            SELECT id, property_id, user_id, start_date, end_date, contract_url, status
            FROM contracts
            WHERE property_id = $1
            ORDER BY start_date"#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_contracts_by_user(&self, user_id: i32) -> Result<Vec<Contract>, sqlx::Error> {
        sqlx::query_as::<_, Contract>(
            r#"
            SELECT id, property_id, user_id, start_date, end_date, contract_url, status
            FROM contracts
            WHERE user_id = $1
            ORDER BY start_date"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }
}

// Steps of the contract creation transaction. Callers hold the transaction
// open from `lock_property` until the insert commits.

/// Row-locks the property so concurrent creations for it run one at a time.
/// Returns `false` when the property does not exist.
pub async fn lock_property(
    tx: &mut Transaction<'_, Postgres>,
    property_id: i32,
) -> Result<bool, sqlx::Error> {
    let locked: Option<i32> = sqlx::query_scalar("SELECT id FROM properties WHERE id = $1 FOR UPDATE")
        .bind(property_id)
        .fetch_optional(&mut **tx)
        .await?;

    Ok(locked.is_some())
}

pub async fn user_exists(
    tx: &mut Transaction<'_, Postgres>,
    user_id: i32,
) -> Result<bool, sqlx::Error> {
    let found: Option<i32> = sqlx::query_scalar("SELECT id FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await?;

    Ok(found.is_some())
}

pub async fn contracts_for_property(
    tx: &mut Transaction<'_, Postgres>,
    property_id: i32,
) -> Result<Vec<Contract>, sqlx::Error> {
    sqlx::query_as::<_, Contract>(
        r#"
        SELECT id, property_id, user_id, start_date, end_date, contract_url, status
        FROM contracts
        WHERE property_id = $1"#,
    )
    .bind(property_id)
    .fetch_all(&mut **tx)
    .await
}

pub async fn insert_contract(
    tx: &mut Transaction<'_, Postgres>,
    contract: &NewContract,
) -> Result<Contract, sqlx::Error> {
    sqlx::query_as::<_, Contract>(
        r#"
        INSERT INTO contracts (property_id, user_id, start_date, end_date, contract_url, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, property_id, user_id, start_date, end_date, contract_url, status"#,
    )
    .bind(contract.property_id)
    .bind(contract.user_id)
    .bind(contract.window.start_date)
    .bind(contract.window.end_date)
    .bind(&contract.contract_url)
    .bind(contract.status)
    .fetch_one(&mut **tx)
    .await
}
