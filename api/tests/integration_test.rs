//! Integration tests for the HTTP API, backed by in-memory repositories

use std::sync::Arc;

use actix_web::{
    http::{header, StatusCode},
    test, web,
};
use serde_json::{json, Value};

use bt_api::{create_app, AppState};
use bt_core::repositories::{InMemoryBookRepository, InMemoryUserRepository};
use bt_core::services::{
    AuthService, AuthServiceConfig, BookService, TokenService, TokenServiceConfig,
};
use bt_shared::{Environment, ServerConfig};

const SECRET: &str = "integration-test-secret";
const PASSWORD: &str = "Abcdef1!";

type TestState = AppState<InMemoryUserRepository, InMemoryBookRepository>;

fn app_state(environment: Environment) -> web::Data<TestState> {
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new(SECRET)).unwrap());
    let auth_service = Arc::new(AuthService::new(
        Arc::new(InMemoryUserRepository::new()),
        tokens,
        AuthServiceConfig {
            password_hash_cost: 4,
        },
    ));
    let book_service = Arc::new(BookService::new(Arc::new(InMemoryBookRepository::new())));
    web::Data::new(AppState::new(auth_service, book_service, environment))
}

macro_rules! init_app {
    ($environment:expr) => {
        test::init_service(create_app(app_state($environment), &ServerConfig::default())).await
    };
}

/// Send a request and decode the JSON body (`Null` when there is none)
macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req).await;
        let status = resp.status();
        let bytes = test::read_body(resp).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }};
}

/// Register `username` with a valid profile, log in, and return the token
macro_rules! register_and_login {
    ($app:expr, $username:expr) => {{
        let username: &str = $username;
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(registration(username, &format!("{}@gmail.com", username)))
            .to_request();
        let (status, _) = call!($app, req);
        assert_eq!(status, StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": username, "password": PASSWORD }))
            .to_request();
        let (status, body) = call!($app, req);
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }};
}

macro_rules! create_book {
    ($app:expr, $token:expr, $book:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/books")
            .insert_header(bearer($token))
            .set_json($book)
            .to_request();
        let (status, body) = call!($app, req);
        assert_eq!(status, StatusCode::CREATED);
        body
    }};
}

fn registration(username: &str, email: &str) -> Value {
    json!({
        "username": username,
        "password": PASSWORD,
        "firstName": "Alice",
        "lastName": "Liddell",
        "email": email,
        "mobile": "0123456789"
    })
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

#[actix_web::test]
async fn test_register_login_and_empty_list() {
    let app = init_app!(Environment::Development);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(registration("alice1", "alice@gmail.com"))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "alice1");
    assert_eq!(body["firstName"], "Alice");
    assert_eq!(body["lastName"], "Liddell");
    assert_eq!(body["email"], "alice@gmail.com");
    assert_eq!(body["mobile"], "0123456789");
    assert!(body["id"].is_u64());
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "alice1", "password": PASSWORD }))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/books")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_register_requires_every_field() {
    let app = init_app!(Environment::Development);

    let mut body = registration("alice1", "alice@gmail.com");
    body.as_object_mut().unwrap().remove("mobile");
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(body)
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "All fields are required");
}

#[actix_web::test]
async fn test_register_applies_credential_rules() {
    let app = init_app!(Environment::Development);

    let cases = [
        (
            registration("1alice", "alice@gmail.com"),
            "Username must start with a letter and can only contain letters, numbers, and # _ ! characters",
        ),
        (
            registration("alice1", "alice@yahoo.com"),
            "Email must be a valid @gmail.com address",
        ),
    ];

    for (body, message) in cases {
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(body)
            .to_request();
        let (status, body) = call!(app, req);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], message);
    }
}

#[actix_web::test]
async fn test_duplicate_registrations_conflict() {
    let app = init_app!(Environment::Development);
    register_and_login!(app, "alice1");

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(registration("alice1", "other@gmail.com"))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
    assert_eq!(body["message"], "Username already exists");

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(registration("alice2", "alice1@gmail.com"))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "This email is already registered");
}

#[actix_web::test]
async fn test_login_failures_are_indistinguishable() {
    let app = init_app!(Environment::Development);
    register_and_login!(app, "alice1");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "alice1", "password": "Wrong123!" }))
        .to_request();
    let (wrong_status, wrong_body) = call!(app, req);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "nobody", "password": "Wrong123!" }))
        .to_request();
    let (unknown_status, unknown_body) = call!(app, req);

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body["error"], unknown_body["error"]);
    assert_eq!(wrong_body["message"], "invalid credentials");
    assert_eq!(unknown_body["message"], "invalid credentials");
}

#[actix_web::test]
async fn test_login_requires_credentials() {
    let app = init_app!(Environment::Development);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "alice1" }))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "username and password required");
}

#[actix_web::test]
async fn test_books_require_a_valid_token() {
    let app = init_app!(Environment::Development);

    let req = test::TestRequest::get().uri("/api/books").to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "no token");

    let req = test::TestRequest::get()
        .uri("/api/books")
        .insert_header((header::AUTHORIZATION, "Basic YWxpY2U6cHc="))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "no token");

    let req = test::TestRequest::get()
        .uri("/api/books")
        .insert_header(bearer("not.a.jwt"))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "invalid token");
}

#[actix_web::test]
async fn test_expired_and_forged_tokens_are_rejected() {
    let app = init_app!(Environment::Development);

    let mut expired_config = TokenServiceConfig::new(SECRET);
    expired_config.token_lifetime_seconds = -60;
    let expired = TokenService::new(expired_config)
        .unwrap()
        .sign(1, "alice1")
        .unwrap();

    let forged = TokenService::new(TokenServiceConfig::new("some-other-secret"))
        .unwrap()
        .sign(1, "alice1")
        .unwrap();

    for token in [expired, forged] {
        let req = test::TestRequest::get()
            .uri("/api/books")
            .insert_header(bearer(&token))
            .to_request();
        let (status, body) = call!(app, req);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "invalid token");
    }
}

#[actix_web::test]
async fn test_book_lifecycle() {
    let app = init_app!(Environment::Development);
    let token = register_and_login!(app, "alice1");

    let created = create_book!(app, &token, json!({ "title": "Dune", "author": "Frank Herbert" }));
    assert_eq!(created["title"], "Dune");
    assert_eq!(created["status"], "to-read");
    assert_eq!(created["favorite"], false);
    assert!(created["user_id"].as_u64().is_some());
    assert!(created["created_at"].is_string());
    let id = created["id"].as_u64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/books/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"], "Frank Herbert");

    let req = test::TestRequest::put()
        .uri(&format!("/api/books/{}", id))
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Dune Messiah",
            "author": "Frank Herbert",
            "status": "reading",
            "review": "Darker",
            "favorite": true
        }))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Dune Messiah");
    assert_eq!(body["status"], "reading");
    assert_eq!(body["review"], "Darker");
    assert_eq!(body["favorite"], true);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/books/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book deleted");

    let req = test::TestRequest::get()
        .uri(&format!("/api/books/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_create_requires_title_and_author() {
    let app = init_app!(Environment::Development);
    let token = register_and_login!(app, "alice1");

    let req = test::TestRequest::post()
        .uri("/api/books")
        .insert_header(bearer(&token))
        .set_json(json!({ "title": "Dune" }))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Title and author required");
}

#[actix_web::test]
async fn test_list_filters_and_summary() {
    let app = init_app!(Environment::Development);
    let token = register_and_login!(app, "alice1");

    create_book!(app, &token, json!({ "title": "Dune", "author": "Frank Herbert" }));
    create_book!(app, &token, json!({ "title": "Emma", "author": "Jane Austen", "status": "read" }));
    create_book!(app, &token, json!({ "title": "Persuasion", "author": "Jane Austen", "status": "reading" }));

    let req = test::TestRequest::get()
        .uri("/api/books")
        .insert_header(bearer(&token))
        .to_request();
    let (_, body) = call!(app, req);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Persuasion", "Emma", "Dune"]);

    let req = test::TestRequest::get()
        .uri("/api/books?q=AUSTEN&status=read")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Emma");

    let req = test::TestRequest::get()
        .uri("/api/books?status=all")
        .insert_header(bearer(&token))
        .to_request();
    let (_, body) = call!(app, req);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/api/books?status=finished")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status: finished");

    let req = test::TestRequest::get()
        .uri("/api/books/summary")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "all": 3, "toRead": 1, "reading": 1, "read": 1 })
    );
}

#[actix_web::test]
async fn test_other_users_books_are_not_found() {
    let app = init_app!(Environment::Development);
    let alice = register_and_login!(app, "alice1");
    let bob = register_and_login!(app, "bob01");

    let book = create_book!(app, &alice, json!({ "title": "Dune", "author": "Frank Herbert" }));
    let path = format!("/api/books/{}", book["id"].as_u64().unwrap());

    let req = test::TestRequest::get()
        .uri(&path)
        .insert_header(bearer(&bob))
        .to_request();
    let (status, _) = call!(app, req);
    assert_eq!(status, StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri(&path)
        .insert_header(bearer(&bob))
        .set_json(json!({ "title": "Hijacked", "author": "Bob" }))
        .to_request();
    let (status, _) = call!(app, req);
    assert_eq!(status, StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&path)
        .insert_header(bearer(&bob))
        .to_request();
    let (status, _) = call!(app, req);
    assert_eq!(status, StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/books")
        .insert_header(bearer(&bob))
        .to_request();
    let (_, body) = call!(app, req);
    assert_eq!(body, json!([]));

    let req = test::TestRequest::get()
        .uri(&path)
        .insert_header(bearer(&alice))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Dune");
}

#[actix_web::test]
async fn test_non_numeric_id_is_not_found() {
    let app = init_app!(Environment::Development);
    let token = register_and_login!(app, "alice1");

    let req = test::TestRequest::get()
        .uri("/api/books/abc")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = init_app!(Environment::Development);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"username\": ")
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_health_and_banner() {
    let app = init_app!(Environment::Development);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, bt_api::routes::health::BANNER.as_bytes());
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let app = init_app!(Environment::Development);

    let req = test::TestRequest::get().uri("/api/nope").to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_production_keeps_client_error_messages() {
    let app = init_app!(Environment::Production);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "nobody", "password": PASSWORD }))
        .to_request();
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "invalid credentials");
}
