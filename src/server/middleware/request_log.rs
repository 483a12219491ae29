use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};

/// Logs method, path, and arrival time of every request.
///
/// Runs before the request reaches its handler and never alters it.
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        timestamp = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "Incoming request"
    );

    next.run(request).await
}
