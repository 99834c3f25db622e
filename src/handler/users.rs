use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::{contractdb::ContractExt, userdb::UserExt},
    dtos::userdtos::{CreateUserDto, Response, UpdateUserDto},
    error::{ErrorMessage, HttpError},
    extractors::{AppJson, AppPath},
    AppState,
};

pub fn users_handler() -> Router {
    Router::new()
        .route("/", get(get_users).post(create_user))
        .route(
            "/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/:user_id/contract", get(get_user_contracts))
}

pub async fn get_users(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let users = app_state.db_client.get_users().await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "users": users,
            "results": users.len()
        }
    })))
}

pub async fn get_user(
    AppPath(user_id): AppPath<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let user = app_state.db_client
        .get_user(user_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::UserNotFound.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "user": user
        }
    })))
}

pub async fn create_user(
    Extension(app_state): Extension<Arc<AppState>>,
    AppJson(body): AppJson<CreateUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let user = app_state.db_client.save_user(&body).await?;
    tracing::info!(user_id = user.id, role = user.role.to_str(), "user invited");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "status": "success",
            "data": {
                "user": user
            }
        })),
    ))
}

pub async fn update_user(
    AppPath(user_id): AppPath<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
    AppJson(body): AppJson<UpdateUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let user = app_state.db_client
        .complete_user_profile(user_id, &body)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::UserNotFound.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Profile completed",
        "data": {
            "user": user
        }
    })))
}

pub async fn delete_user(
    AppPath(user_id): AppPath<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    app_state.db_client
        .deactivate_user(user_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::UserNotFound.to_string()))?;

    tracing::info!(user_id, "user deactivated");

    Ok(Json(Response {
        status: "success",
        message: "Deleted the account".to_string(),
    }))
}

pub async fn get_user_contracts(
    AppPath(user_id): AppPath<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let contracts = app_state.db_client.get_contracts_by_user(user_id).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "contracts": contracts,
            "results": contracts.len()
        }
    })))
}
