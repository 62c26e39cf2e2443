//! Problem-details replacements for actix-web's bare 404 and 405 responses.

use actix_web::{HttpRequest, HttpResponse};

use crate::error::AppError;

/// App-wide default service: no resource matched the path.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}

/// Resource default service for GET-only resources.
pub async fn get_only_method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::method_not_allowed(
        "GET",
        format!("{} is not supported on {}", req.method(), req.path()),
    ))
}
