use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::api::ErrorDto,
    server::{error::ErrorTrace, state::AppState},
};

/// Terminal stage for failed responses.
///
/// Every `AppError` response carries an `ErrorTrace`. In development mode the
/// trace is written into the body as `stack`; otherwise it is dropped.
pub async fn error_handler(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let Some(ErrorTrace(stack)) = response.extensions_mut().remove::<ErrorTrace>() else {
        return response;
    };

    if !state.config.is_development() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to read error response body: {}", e);
            return Response::from_parts(parts, Body::empty());
        }
    };

    match serde_json::from_slice::<ErrorDto>(&bytes) {
        Ok(mut dto) => {
            dto.stack = Some(stack);
            parts.headers.remove(header::CONTENT_LENGTH);
            (parts, Json(dto)).into_response()
        }
        Err(_) => Response::from_parts(parts, Body::from(bytes)),
    }
}
