//! HTTP request handlers.
//!
//! Controllers extract request data, check identifier shape, call the service
//! layer, and wrap results in the response envelope. Failures are returned as
//! `AppError` and formatted by its `IntoResponse` implementation.

pub mod game;
pub mod health;
