use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart,
    },
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    db::contractdb::ContractExt,
    dtos::contractdtos::{ContractFormDto, DocumentPart},
    error::HttpError,
    extractors::AppPath,
    service::{contract_service::MAX_DOCUMENT_BYTES, error::ServiceError},
    AppState,
};

/// Body limit for the contract upload route. Leaves headroom above the
/// document limit so oversized files reach validation instead of being cut
/// off by the transport.
pub const MAX_CONTRACT_REQUEST_BYTES: usize = MAX_DOCUMENT_BYTES + 6 * 1024 * 1024;

fn multipart_error(error: MultipartError) -> HttpError {
    HttpError::new(error.body_text(), error.status())
}

/// Reads the `userId`, `startDate`, `endDate` and `file` parts. Unknown parts
/// are ignored.
pub async fn read_contract_form(mut multipart: Multipart) -> Result<ContractFormDto, HttpError> {
    let mut form = ContractFormDto::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "userId" => form.user_id = Some(field.text().await.map_err(multipart_error)?),
            "startDate" => form.start_date = Some(field.text().await.map_err(multipart_error)?),
            "endDate" => form.end_date = Some(field.text().await.map_err(multipart_error)?),
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                form.document = Some(DocumentPart {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    Ok(form)
}

pub async fn get_property_contracts(
    AppPath(property_id): AppPath<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let contracts = app_state.db_client.get_contracts_by_property(property_id).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "contracts": contracts,
            "results": contracts.len()
        }
    })))
}

pub async fn create_contract(
    AppPath(property_id): AppPath<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let form = read_contract_form(multipart?).await?;
    let body = form
        .into_validated()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    let contract = app_state.contract_service
        .create_contract(property_id, body)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "status": "success",
            "data": {
                "contract": contract
            }
        })),
    ))
}
