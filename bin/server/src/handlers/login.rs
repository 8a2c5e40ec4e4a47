use crate::auth::{self, AuthError};
use crate::constants::TOKEN_TTL_SECONDS;
use actix_web::cookie::{time::Duration, Cookie};
use actix_web::{web, HttpResponse};
use common::{Credentials, LoginResponse};
use tracing::info;

/// Handle login: exchange the static credential pair for a bearer token
///
/// The token is also set as a cookie with the same lifetime.
pub async fn login(body: web::Json<Credentials>) -> Result<HttpResponse, AuthError> {
    let token = auth::login(&body.username, &body.password)?;

    info!("POST /login - Token issued for {}", body.username);

    let cookie = Cookie::build("token", token.clone())
        .path("/")
        .max_age(Duration::seconds(TOKEN_TTL_SECONDS))
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(LoginResponse { token }))
}
