// Lease document storage. Objects are addressed by name and served publicly
// under a configured base URL.
pub mod http;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use axum::body::Bytes;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentStoreError {
    #[error("Document store request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Document store rejected {name} with status {status}")]
    Rejected { name: String, status: u16 },

    #[error("Document store is misconfigured: {0}")]
    Config(String),
}

/// Headers and custom metadata stored alongside an object.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMetadata {
    pub content_type: String,
    pub content_disposition: String,
    pub user_id: i32,
    pub property_id: i32,
    pub created_at: DateTime<Utc>,
}

impl DocumentMetadata {
    pub fn attachment(name: &str, content_type: &str, user_id: i32, property_id: i32) -> Self {
        Self {
            content_type: content_type.to_string(),
            content_disposition: format!("attachment; filename=\"{}\"", name),
            user_id,
            property_id,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait DocumentStore: std::fmt::Debug + Send + Sync {
    async fn put(
        &self,
        name: &str,
        bytes: Bytes,
        metadata: DocumentMetadata,
    ) -> Result<(), DocumentStoreError>;

    async fn delete(&self, name: &str) -> Result<(), DocumentStoreError>;
}
