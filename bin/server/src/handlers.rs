//! HTTP request handlers and route table

pub mod error;
pub mod health;
pub mod login;
pub mod posts;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Register the API routes
///
/// Unsupported verbs on known paths fall through to the per-resource
/// default service, which answers 405.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/login")
            .route(web::post().to(login::login))
            .default_service(web::to(error::method_not_allowed)),
    )
    .service(
        web::resource("/posts")
            .route(web::get().to(posts::list_posts))
            .route(web::post().to(posts::create_post))
            .default_service(web::to(error::method_not_allowed)),
    )
    .service(
        web::resource("/posts/{id}")
            .route(web::get().to(posts::get_post))
            .route(web::put().to(posts::update_post))
            .route(web::delete().to(posts::delete_post))
            .default_service(web::to(error::method_not_allowed)),
    )
    .service(web::resource("/health").route(web::get().to(health::health)));
}
