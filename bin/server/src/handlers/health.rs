use actix_web::{HttpResponse, Result as ActixResult};

/// Health check endpoint
pub async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(common::HealthResponse {
        status: "ok".to_string(),
    }))
}
