//! Catch-all handlers so unmatched requests still get the error body

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::http::error::ApiError;

/// Unknown path
pub async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::not_found("path", uri.path())
}

/// Known path, wrong verb
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Panic inside a handler, used by `CatchPanicLayer`
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "handler panicked".to_owned()
    };

    ApiError::Internal { message }.into_response()
}
