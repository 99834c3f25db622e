use std::borrow::Cow;

use axum::body::Bytes;
use chrono::NaiveDate;
use validator::{ValidationError, ValidationErrors};

use crate::utils::coerce::{parse_calendar_date, parse_id};

/// One multipart part submitted under the `file` field.
#[derive(Debug, Clone)]
pub struct DocumentPart {
    /// `None` when the part was sent as a plain form value rather than a file.
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Contract creation form as it arrives, before coercion.
#[derive(Debug, Default, Clone)]
pub struct ContractFormDto {
    pub user_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub document: Option<DocumentPart>,
}

#[derive(Debug, Clone)]
pub struct CreateContractDto {
    pub user_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Checked by the contract service, not here.
    pub document: Option<DocumentPart>,
}

fn field_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}

fn required_date(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: Option<&str>,
) -> Option<NaiveDate> {
    match raw {
        None => {
            errors.add(field, field_error("required", format!("{} is required", field)));
            None
        }
        Some(raw) => {
            let date = parse_calendar_date(raw);
            if date.is_none() {
                errors.add(field, field_error("date", format!("{} must be an ISO date", field)));
            }
            date
        }
    }
}

impl ContractFormDto {
    /// Coerces every text field, collecting all failures before returning.
    pub fn into_validated(self) -> Result<CreateContractDto, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let user_id = match self.user_id.as_deref() {
            None => {
                errors.add("userId", field_error("required", "userId is required".to_string()));
                None
            }
            Some(raw) => {
                let id = parse_id(raw);
                if id.is_none() {
                    errors.add("userId", field_error("number", "userId must be a number".to_string()));
                }
                id
            }
        };
        let start_date = required_date(&mut errors, "startDate", self.start_date.as_deref());
        let end_date = required_date(&mut errors, "endDate", self.end_date.as_deref());

        match (user_id, start_date, end_date) {
            (Some(user_id), Some(start_date), Some(end_date)) if errors.is_empty() => Ok(CreateContractDto {
                user_id,
                start_date,
                end_date,
                document: self.document,
            }),
            _ => Err(errors),
        }
    }
}
