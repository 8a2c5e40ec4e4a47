use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

/// Helper function for bad request errors
pub fn handle_error<E: std::fmt::Display>(msg: &str, e: E) -> actix_web::Error {
    error!("{}: {}", msg, e);
    actix_web::error::ErrorBadRequest(format!("{}: {}", msg, e))
}

/// Helper function for server errors
pub fn handle_server_error<E: std::fmt::Display>(msg: &str, e: E) -> actix_web::Error {
    error!("{}: {}", msg, e);
    actix_web::error::ErrorInternalServerError(format!("{}: {}", msg, e))
}

/// Default service for known paths hit with an unsupported verb
pub async fn method_not_allowed() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::MethodNotAllowed().finish())
}
