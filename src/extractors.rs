// `Json` and `Path` with rejections rendered as `HttpError`, so malformed
// bodies and ids get the same `{"status":"fail"}` body as every other error.
use axum::extract::{FromRequest, FromRequestParts};

use crate::error::HttpError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct AppPath<T>(pub T);
