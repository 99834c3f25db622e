// Lease contract lifecycle: upload gating, overlap rejection, status
// derivation and the document + row write.
use std::{cmp::Ordering, sync::Arc};

use chrono::{NaiveDate, Utc};
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{
    db::{
        contractdb::{contracts_for_property, insert_contract, lock_property, user_exists},
        DBClient,
    },
    dtos::contractdtos::{CreateContractDto, DocumentPart},
    error::ErrorMessage,
    models::contractmodel::{Contract, ContractStatus, LeaseWindow, NewContract},
    service::error::ServiceError,
    storage::{DocumentMetadata, DocumentStore},
};

/// Largest accepted lease document, 10 MiB.
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Status fixed at creation time and never recomputed.
///
/// A lease starting today is `Expired`.
pub fn derive_status(start_date: NaiveDate, today: NaiveDate) -> ContractStatus {
    match start_date.cmp(&today) {
        Ordering::Greater => ContractStatus::Pending,
        Ordering::Less => ContractStatus::Active,
        Ordering::Equal => ContractStatus::Expired,
    }
}

fn invalid(message: ErrorMessage) -> ServiceError {
    ServiceError::InvalidDocument(message.to_string())
}

pub fn validate_document(document: Option<&DocumentPart>) -> Result<&DocumentPart, ServiceError> {
    let document = document.ok_or_else(|| invalid(ErrorMessage::DocumentMissing))?;

    if document.file_name.is_none() {
        return Err(invalid(ErrorMessage::InvalidUploadMethod));
    }

    let is_pdf = document
        .content_type
        .as_deref()
        .map(|content_type| content_type.ends_with("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(invalid(ErrorMessage::InvalidFileType));
    }

    if document.bytes.is_empty() {
        return Err(invalid(ErrorMessage::EmptyFile));
    }

    if document.bytes.len() > MAX_DOCUMENT_BYTES {
        return Err(invalid(ErrorMessage::FileTooLarge));
    }

    Ok(document)
}

pub fn document_name(user_id: i32, property_id: i32, token: Uuid) -> String {
    format!("{}-{}-{}.pdf", user_id, property_id, token)
}

pub fn document_url(base_url: &str, name: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), name)
}

#[derive(Debug)]
pub struct ContractService {
    db_client: Arc<DBClient>,
    document_store: Arc<dyn DocumentStore>,
    document_base_url: String,
}

impl ContractService {
    pub fn new(
        db_client: Arc<DBClient>,
        document_store: Arc<dyn DocumentStore>,
        document_base_url: impl Into<String>,
    ) -> Self {
        Self {
            db_client,
            document_store,
            document_base_url: document_base_url.into(),
        }
    }

    /// Creates a contract for `property_id` and stores its lease document.
    ///
    /// The property row stays locked from the existence checks through the
    /// insert, so the overlap scan and the insert see the same contracts. An
    /// overlapping window is rejected before the upload is looked at. The
    /// upload is checked before anything is written.
    pub async fn create_contract(
        &self,
        property_id: i32,
        contract: CreateContractDto,
    ) -> Result<Contract, ServiceError> {
        let window = LeaseWindow::new(contract.start_date, contract.end_date);

        let mut tx = self.db_client.pool.begin().await?;

        if !lock_property(&mut tx, property_id).await? {
            return Err(ServiceError::NotFound { entity: "Property", id: property_id });
        }
        if !user_exists(&mut tx, contract.user_id).await? {
            return Err(ServiceError::NotFound { entity: "User", id: contract.user_id });
        }

        let existing = contracts_for_property(&mut tx, property_id).await?;
        if let Some(conflict) = existing.iter().find(|c| window.conflicts_with(&c.window())) {
            tracing::info!(
                property_id,
                conflicting_contract = conflict.id,
                "rejecting contract with overlapping dates"
            );
            return Err(ServiceError::ContractOverlap(property_id));
        }

        let document = validate_document(contract.document.as_ref())?;

        self.persist(tx, property_id, &contract, document).await
    }

    /// Stores the document, then inserts and commits the row. Either failure
    /// after the put removes the stored document again.
    async fn persist(
        &self,
        mut tx: Transaction<'_, Postgres>,
        property_id: i32,
        contract: &CreateContractDto,
        document: &DocumentPart,
    ) -> Result<Contract, ServiceError> {
        let window = LeaseWindow::new(contract.start_date, contract.end_date);
        let status = derive_status(window.start_date, Utc::now().date_naive());
        let content_type = document.content_type.clone().unwrap_or_default();

        let name = document_name(contract.user_id, property_id, Uuid::new_v4());
        let metadata = DocumentMetadata::attachment(&name, &content_type, contract.user_id, property_id);
        self.document_store
            .put(&name, document.bytes.clone(), metadata)
            .await?;

        let new_contract = NewContract {
            property_id,
            user_id: contract.user_id,
            window,
            contract_url: document_url(&self.document_base_url, &name),
            status,
        };

        let created = match insert_contract(&mut tx, &new_contract).await {
            Ok(created) => created,
            Err(e) => {
                self.discard_document(&name).await;
                return Err(e.into());
            }
        };

        if let Err(e) = tx.commit().await {
            self.discard_document(&name).await;
            return Err(e.into());
        }

        tracing::info!(
            contract_id = created.id,
            property_id,
            user_id = created.user_id,
            status = ?created.status,
            "contract created"
        );
        Ok(created)
    }

    async fn discard_document(&self, name: &str) {
        if let Err(e) = self.document_store.delete(name).await {
            // Nothing references the object; it needs manual cleanup.
            tracing::error!(document = name, error = %e, "failed to delete orphaned lease document");
        }
    }
}
