//! CRUD handlers for the post resource
//!
//! All routes here require a valid bearer token; the [`Claims`] extractor
//! rejects the request before the storage backend is touched.

use crate::auth::Claims;
use crate::handlers::error::{handle_error, handle_server_error};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Result as ActixResult};
use common::NewPost;
use tracing::info;

fn parse_id(raw: &str) -> Result<i64, actix_web::Error> {
    raw.parse().map_err(|e| handle_error("Invalid post id", e))
}

/// GET /posts
pub async fn list_posts(
    _claims: Claims,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let posts = state
        .storage
        .list_posts()
        .await
        .map_err(|e| handle_server_error("Failed to list posts", e))?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /posts
pub async fn create_post(
    _claims: Claims,
    body: web::Json<NewPost>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let post = state
        .storage
        .create_post(&body.title, &body.content)
        .await
        .map_err(|e| handle_server_error("Failed to create post", e))?;

    info!("POST /posts - Created post {}", post.id);
    Ok(HttpResponse::Created().json(post))
}

/// GET /posts/{id}
pub async fn get_post(
    _claims: Claims,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state
        .storage
        .get_post(id)
        .await
        .map_err(|e| handle_server_error("Failed to load post", e))?;

    match post {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// PUT /posts/{id}
pub async fn update_post(
    _claims: Claims,
    path: web::Path<String>,
    body: web::Json<NewPost>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state
        .storage
        .update_post(id, &body.title, &body.content)
        .await
        .map_err(|e| handle_server_error("Failed to update post", e))?;

    match post {
        Some(post) => {
            info!("PUT /posts/{} - Updated", id);
            Ok(HttpResponse::Ok().json(post))
        }
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// DELETE /posts/{id}
pub async fn delete_post(
    _claims: Claims,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let id = parse_id(&path)?;
    let deleted = state
        .storage
        .delete_post(id)
        .await
        .map_err(|e| handle_server_error("Failed to delete post", e))?;

    if deleted {
        info!("DELETE /posts/{} - Removed", id);
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().finish())
    }
}
