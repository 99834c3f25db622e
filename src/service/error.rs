use thiserror::Error;

use crate::{
    db::{is_foreign_key_violation, is_unique_violation},
    error::{ErrorMessage, HttpError},
    storage::DocumentStoreError,
};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidDocument(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Contract already exists for property {0} in the requested period")]
    ContractOverlap(i32),

    #[error("Feedback already exists for property {0}")]
    FeedbackExists(i32),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    DocumentStore(#[from] DocumentStoreError),
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::Validation(_) | ServiceError::InvalidDocument(_) => {
                HttpError::bad_request(error.to_string())
            }

            ServiceError::NotFound { .. } => HttpError::not_found(error.to_string()),

            ServiceError::ContractOverlap(_) => HttpError::conflict(ErrorMessage::ContractOverlap.to_string()),

            ServiceError::FeedbackExists(_) => HttpError::conflict(ErrorMessage::FeedbackExists.to_string()),

            ServiceError::Database(ref e) if is_unique_violation(e) => {
                HttpError::conflict(ErrorMessage::DuplicateRecord.to_string())
            }

            ServiceError::Database(ref e) if is_foreign_key_violation(e) => {
                HttpError::conflict(ErrorMessage::ReferencedRecord.to_string())
            }

            ServiceError::Database(_) | ServiceError::DocumentStore(_) => {
                tracing::error!("{}", error);
                HttpError::server_error(ErrorMessage::ServerError.to_string())
            }
        }
    }
}

impl From<sqlx::Error> for HttpError {
    fn from(error: sqlx::Error) -> Self {
        ServiceError::Database(error).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ServiceError::Validation("userId is required".to_string()), StatusCode::BAD_REQUEST),
            (ServiceError::InvalidDocument(ErrorMessage::EmptyFile.to_string()), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound { entity: "Property", id: 4 }, StatusCode::NOT_FOUND),
            (ServiceError::ContractOverlap(4), StatusCode::CONFLICT),
            (ServiceError::FeedbackExists(4), StatusCode::CONFLICT),
            (ServiceError::Database(sqlx::Error::RowNotFound), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ServiceError::DocumentStore(DocumentStoreError::Rejected { name: "a.pdf".to_string(), status: 503 }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(HttpError::from(error).status, status);
        }
    }

    #[test]
    fn test_server_errors_hide_details() {
        let http_error = HttpError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(http_error.message, ErrorMessage::ServerError.to_string());
    }

    #[test]
    fn test_not_found_names_the_entity() {
        let http_error = HttpError::from(ServiceError::NotFound { entity: "User", id: 12 });
        assert_eq!(http_error.message, "User 12 not found");
    }
}
