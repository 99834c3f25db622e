use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::propertydb::PropertyExt,
    dtos::propertydtos::PropertyDto,
    error::{ErrorMessage, HttpError},
    extractors::{AppJson, AppPath},
    handler::{
        contracts::{create_contract, get_property_contracts, MAX_CONTRACT_REQUEST_BYTES},
        feedback::{create_feedback, get_property_feedback, update_feedback},
    },
    AppState,
};

pub fn property_handler() -> Router {
    Router::new()
        .route("/", get(get_properties).post(create_property))
        .route(
            "/:property_id",
            get(get_property_by_id).put(update_property).delete(delete_property),
        )
        .route(
            "/:property_id/feedback",
            get(get_property_feedback).post(create_feedback).put(update_feedback),
        )
        .route(
            "/:property_id/contract",
            get(get_property_contracts)
                .post(create_contract)
                .layer(DefaultBodyLimit::max(MAX_CONTRACT_REQUEST_BYTES)),
        )
}

pub async fn get_properties(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let properties = app_state.db_client.get_properties().await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "properties": properties,
            "results": properties.len()
        }
    })))
}

pub async fn get_property_by_id(
    AppPath(property_id): AppPath<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let property = app_state.db_client
        .get_property_by_id(property_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::PropertyNotFound.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "property": property
        }
    })))
}

pub async fn create_property(
    Extension(app_state): Extension<Arc<AppState>>,
    AppJson(body): AppJson<PropertyDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let property = app_state.db_client.create_property(&body).await?;
    tracing::info!(property_id = property.id, "property created");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "status": "success",
            "data": {
                "property": property
            }
        })),
    ))
}

pub async fn update_property(
    AppPath(property_id): AppPath<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
    AppJson(body): AppJson<PropertyDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let property = app_state.db_client
        .update_property(property_id, &body)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::PropertyNotFound.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "property": property
        }
    })))
}

pub async fn delete_property(
    AppPath(property_id): AppPath<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    // Referenced properties fail with a foreign key violation, mapped to 409.
    let property = app_state.db_client
        .delete_property(property_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::PropertyNotFound.to_string()))?;

    tracing::info!(property_id, "property deleted");

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "property": property
        }
    })))
}
