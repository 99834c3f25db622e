// S3/R2-style object endpoint: PUT and DELETE on `{endpoint}/{name}`.
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::{
    header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    Client, StatusCode,
};

use super::{DocumentMetadata, DocumentStore, DocumentStoreError};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpDocumentStore {
    pub fn new(endpoint: &str, token: Option<String>, timeout: Duration) -> Result<Self, DocumentStoreError> {
        let endpoint = endpoint.trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err(DocumentStoreError::Config("DOCUMENT_STORE_URL is empty".to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, endpoint, token })
    }

    pub fn from_config(config: &Config) -> Result<Self, DocumentStoreError> {
        Self::new(
            &config.document_store_url,
            config.document_store_token.clone(),
            Duration::from_secs(config.document_store_timeout_secs),
        )
    }

    fn object_url(&self, name: &str) -> String {
        format!("{}/{}", self.endpoint, name)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn put(
        &self,
        name: &str,
        bytes: Bytes,
        metadata: DocumentMetadata,
    ) -> Result<(), DocumentStoreError> {
        let request = self
            .client
            .put(self.object_url(name))
            .header(CONTENT_TYPE, metadata.content_type.as_str())
            .header(CONTENT_DISPOSITION, metadata.content_disposition.as_str())
            .header("x-amz-meta-user-id", metadata.user_id.to_string())
            .header("x-amz-meta-property-id", metadata.property_id.to_string())
            .header("x-amz-meta-created-at", metadata.created_at.to_rfc3339())
            .body(bytes);

        let response = self.authorize(request).send().await?;
        if !response.status().is_success() {
            return Err(DocumentStoreError::Rejected {
                name: name.to_string(),
                status: response.status().as_u16(),
            });
        }

        tracing::debug!(document = name, "stored lease document");
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), DocumentStoreError> {
        let response = self
            .authorize(self.client.delete(self.object_url(name)))
            .send()
            .await?;

        // Already gone counts as deleted.
        if response.status().is_success() || response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        Err(DocumentStoreError::Rejected {
            name: name.to_string(),
            status: response.status().as_u16(),
        })
    }
}
