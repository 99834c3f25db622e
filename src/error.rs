use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::multipart::MultipartRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(&self).map_err(|_| fmt::Error)?)
    }
}

#[derive(Debug, PartialEq)]
pub enum ErrorMessage {
    ServerError,
    UserNotFound,
    PropertyNotFound,
    FeedbackNotFound,
    FeedbackExists,
    ContractOverlap,
    ReferencedRecord,
    DuplicateRecord,
    DocumentMissing,
    InvalidUploadMethod,
    InvalidFileType,
    EmptyFile,
    FileTooLarge,
}

impl ToString for ErrorMessage {
    fn to_string(&self) -> String {
        self.to_str().to_owned()
    }
}

impl ErrorMessage {
    fn to_str(&self) -> &str {
        match self {
            ErrorMessage::ServerError => "Server Error. Please try again later",
            ErrorMessage::UserNotFound => "Can't find user with given user ID",
            ErrorMessage::PropertyNotFound => "Can't find property with given property ID",
            ErrorMessage::FeedbackNotFound => "Feedback does not exist",
            ErrorMessage::FeedbackExists => "Feedback already exists",
            ErrorMessage::ContractOverlap => "Contract already exists",
            ErrorMessage::ReferencedRecord => "Record is still referenced by contracts or feedback",
            ErrorMessage::DuplicateRecord => "A record with the same unique details already exists",
            ErrorMessage::DocumentMissing => "Contract document is required in the 'file' field",
            ErrorMessage::InvalidUploadMethod => "Invalid method to upload file",
            ErrorMessage::InvalidFileType => "Invalid file type",
            ErrorMessage::EmptyFile => "File cannot be empty",
            ErrorMessage::FileTooLarge => "File size exceeds limit",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::CONFLICT,
        }
    }

    pub fn into_http_response(self) -> Response {
        let json_response = Json(ErrorResponse {
            status: "fail".to_string(),
            message: self.message.clone(),
        });

        (self.status, json_response).into_response()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HttpError: message: {}, status: {}",
            self.message, self.status
        )
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

// Extractor rejections are client input errors; they all become 400 with the
// usual error body.
impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        HttpError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::bad_request(rejection.body_text())
    }
}

impl From<MultipartRejection> for HttpError {
    fn from(rejection: MultipartRejection) -> Self {
        HttpError::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_display_is_json() {
        let response = ErrorResponse {
            status: "fail".to_string(),
            message: ErrorMessage::FeedbackExists.to_string(),
        };
        assert_eq!(
            response.to_string(),
            r#"{"status":"fail","message":"Feedback already exists"}"#
        );
    }

    #[test]
    fn test_http_error_into_response_keeps_status() {
        let response = HttpError::conflict(ErrorMessage::ContractOverlap.to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = HttpError::new("slow down", StatusCode::TOO_MANY_REQUESTS).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
