use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// `Json` extractor whose rejection is routed through `AppError`, so body
/// parsing failures get the same envelope as every other error.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Path` extractor whose rejection becomes `AppError::InvalidId`.
///
/// Covers segments axum cannot decode at all, such as invalid UTF-8.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
