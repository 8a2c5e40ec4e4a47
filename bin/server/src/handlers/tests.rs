use crate::auth;
use crate::constants::{ADMIN_PASSWORD, ADMIN_USERNAME};
use crate::handlers;
use crate::state::AppState;
use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::{ContentType, AUTHORIZATION};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use common::{LoginResponse, Post};
use serde_json::json;
use storage::StorageBackend;

async fn test_app(
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let storage = StorageBackend::Memory.initialize().await.unwrap();
    let state = web::Data::new(AppState::new(storage));
    test::init_service(
        App::new()
            .app_data(state)
            .configure(handlers::configure),
    )
    .await
}

fn bearer() -> (actix_web::http::header::HeaderName, String) {
    let token = auth::login(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    (AUTHORIZATION, format!("Bearer {}", token))
}

#[actix_web::test]
async fn login_returns_token_for_valid_credentials() {
    let app = test_app().await;
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"username": "admin", "password": "password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: LoginResponse = test::read_body_json(resp).await;
    assert!(auth::verify_token(&body.token).is_ok());
}

#[actix_web::test]
async fn login_rejects_bad_credentials() {
    let app = test_app().await;
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"username": "admin", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn login_rejects_malformed_body() {
    let app = test_app().await;
    let req = test::TestRequest::post()
        .uri("/login")
        .insert_header(ContentType::json())
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn protected_routes_require_a_token() {
    let app = test_app().await;
    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn header_without_bearer_prefix_is_unauthorized() {
    let app = test_app().await;
    let token = auth::login(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    let req = test::TestRequest::get()
        .uri("/posts")
        .insert_header((AUTHORIZATION, token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn unparseable_token_is_bad_request() {
    let app = test_app().await;
    let req = test::TestRequest::get()
        .uri("/posts")
        .insert_header((AUTHORIZATION, "Bearer not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn crud_lifecycle() {
    let app = test_app().await;
    let auth = bearer();

    // Create
    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(auth.clone())
        .set_json(json!({"title": "A", "content": "B"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Post = test::read_body_json(resp).await;
    assert_eq!(
        created,
        Post {
            id: 1,
            title: "A".to_string(),
            content: "B".to_string()
        }
    );

    // Read back
    let req = test::TestRequest::get()
        .uri("/posts/1")
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Post = test::read_body_json(resp).await;
    assert_eq!(fetched, created);

    // Update
    let req = test::TestRequest::put()
        .uri("/posts/1")
        .insert_header(auth.clone())
        .set_json(json!({"title": "C", "content": "D"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Post = test::read_body_json(resp).await;
    assert_eq!(
        updated,
        Post {
            id: 1,
            title: "C".to_string(),
            content: "D".to_string()
        }
    );

    // Delete
    let req = test::TestRequest::delete()
        .uri("/posts/1")
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Gone
    let req = test::TestRequest::get()
        .uri("/posts/1")
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Second delete stays a 404, not an escalated error
    let req = test::TestRequest::delete()
        .uri("/posts/1")
        .insert_header(auth)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_grows_with_creates() {
    let app = test_app().await;
    let auth = bearer();

    let req = test::TestRequest::get()
        .uri("/posts")
        .insert_header(auth.clone())
        .to_request();
    let empty: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert!(empty.is_empty());

    for i in 0..3 {
        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header(auth.clone())
            .set_json(json!({"title": format!("post {}", i), "content": "body"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/posts")
        .insert_header(auth)
        .to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 3);
}

#[actix_web::test]
async fn client_supplied_id_is_ignored_on_create() {
    let app = test_app().await;
    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(bearer())
        .set_json(json!({"id": 99, "title": "A", "content": "B"}))
        .to_request();
    let created: Post = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.id, 1);
}

#[actix_web::test]
async fn non_numeric_id_is_bad_request() {
    let app = test_app().await;
    for method in [test::TestRequest::get, test::TestRequest::delete] {
        let req = method()
            .uri("/posts/abc")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn malformed_post_body_is_bad_request() {
    let app = test_app().await;
    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(bearer())
        .insert_header(ContentType::json())
        .set_payload("{broken")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn unsupported_verbs_are_method_not_allowed() {
    let app = test_app().await;

    let req = test::TestRequest::get().uri("/login").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let req = test::TestRequest::patch()
        .uri("/posts")
        .insert_header(bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let req = test::TestRequest::post()
        .uri("/posts/1")
        .insert_header(bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn health_is_open() {
    let app = test_app().await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
