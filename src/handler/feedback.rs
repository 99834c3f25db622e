use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use validator::Validate;

use crate::{
    db::{feedbackdb::FeedbackExt, is_foreign_key_violation},
    dtos::feedbackdtos::FeedbackDto,
    error::{ErrorMessage, HttpError},
    extractors::{AppJson, AppPath},
    service::error::ServiceError,
    AppState,
};

pub async fn get_property_feedback(
    AppPath(property_id): AppPath<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let feedback = app_state.db_client.get_feedback_for_property(property_id).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "feedback": feedback,
            "results": feedback.len()
        }
    })))
}

/// One feedback per user per property.
pub async fn create_feedback(
    AppPath(property_id): AppPath<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
    AppJson(body): AppJson<FeedbackDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let feedback = app_state.db_client
        .create_feedback(property_id, &body)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                HttpError::not_found("User or property not found")
            } else {
                HttpError::from(e)
            }
        })?
        .ok_or_else(|| HttpError::from(ServiceError::FeedbackExists(property_id)))?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "status": "success",
            "data": {
                "feedback": feedback
            }
        })),
    ))
}

pub async fn update_feedback(
    AppPath(property_id): AppPath<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
    AppJson(body): AppJson<FeedbackDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let feedback = app_state.db_client
        .update_feedback(property_id, &body)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::FeedbackNotFound.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "feedback": feedback
        }
    })))
}
