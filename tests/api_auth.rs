mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::{json, Value};
use pokedex_backend::services::mail::LogMailer;
use common::{ash, init_app, misty, post_json, test_context, test_context_with_mailer, trainer};

fn reset_token_from(html: &str) -> String {
    let start = html.find("token=").map(|i| i + "token=".len()).unwrap();
    let end = html[start..].find('\'').map(|i| start + i).unwrap();
    urlencoding::decode(&html[start..end]).unwrap().into_owned()
}

#[actix_web::test]
async fn test_register_returns_token_pair() {
    let ctx = test_context();
    let app = init_app!(ctx.context);

    let resp = test::call_service(&app, post_json("/api/v1/auth/register", &ash()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let access = body["accessToken"].as_str().unwrap();
    assert!(body["refreshToken"].as_str().is_some());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[common::ISSUER]);
    let claims = decode::<Value>(
        access,
        &DecodingKey::from_secret(common::ACCESS_SECRET.as_bytes()),
        &validation,
    )
    .unwrap()
    .claims;

    let mut keys: Vec<&str> = claims["user"].as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["_id", "email", "firstName", "lastName", "roles"]);
    assert_eq!(claims["user"]["roles"], json!(["Pokemon Trainer"]));
    assert_eq!(claims["exp"].as_i64().unwrap() - claims["iat"].as_i64().unwrap(), 30 * 60);
}

#[actix_web::test]
async fn test_register_without_username() {
    let ctx = test_context();
    let app = init_app!(ctx.context);

    let body = json!({
        "email": "brock@pewter.city",
        "password": "onix1234",
        "firstName": "Brock",
        "lastName": "Harrison"
    });
    let resp = test::call_service(&app, post_json("/api/v1/auth/register", &body).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_register_duplicate_lists_fields() {
    let ctx = test_context();
    let app = init_app!(ctx.context);

    test::call_service(&app, post_json("/api/v1/auth/register", &ash()).to_request()).await;

    let again = trainer("ash_ketchum", "ash@pallet.town", "Ash", "Ketchum");
    let resp = test::call_service(&app, post_json("/api/v1/auth/register", &again).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "Duplicate fields in database");
    assert_eq!(
        body["error"]["duplicateFields"],
        json!([
            {"field": "username", "value": "ash_ketchum"},
            {"field": "email", "value": "ash@pallet.town"},
            {"field": "firstName and lastName", "value": "Ash Ketchum"}
        ])
    );
}

#[actix_web::test]
async fn test_register_rejects_invalid_body() {
    let ctx = test_context();
    let app = init_app!(ctx.context);

    let invalid = json!({
        "email": "testtest.com",
        "password": "123",
        "firstName": "test",
        "lastName": "test"
    });
    let resp = test::call_service(&app, post_json("/api/v1/auth/register", &invalid).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"].as_str().unwrap().starts_with("body/email"));

    let missing = json!({"email": "test@test.com", "password": "12345678", "firstName": "test"});
    let resp = test::call_service(&app, post_json("/api/v1/auth/register", &missing).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"].as_str().unwrap().contains("lastName"));
}

#[actix_web::test]
async fn test_login_with_username_or_email() {
    let ctx = test_context();
    let app = init_app!(ctx.context);
    test::call_service(&app, post_json("/api/v1/auth/register", &ash()).to_request()).await;

    for username in ["ash_ketchum", "ash@pallet.town"] {
        let login = json!({"username": username, "password": "pikachu1"});
        let resp = test::call_service(&app, post_json("/api/v1/auth/login", &login).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let wrong = json!({"username": "ash_ketchum", "password": "raichu11"});
    let resp = test::call_service(&app, post_json("/api/v1/auth/login", &wrong).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "Invalid credentials");

    let unknown = json!({"username": "gary_oak", "password": "pikachu1"});
    let resp = test::call_service(&app, post_json("/api/v1/auth/login", &unknown).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_refresh_token_keeps_refresh_token() {
    let ctx = test_context();
    let app = init_app!(ctx.context);

    let tokens: Value = test::call_and_read_body_json(
        &app,
        post_json("/api/v1/auth/register", &ash()).to_request(),
    )
    .await;
    let refresh = tokens["refreshToken"].as_str().unwrap();

    let resp = test::call_service(
        &app,
        post_json("/api/v1/auth/refresh-token", &json!({"refreshToken": refresh})).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["refreshToken"], refresh);
    assert!(body["accessToken"].as_str().is_some());

    // 액세스 토큰은 다른 키로 서명되어 있다
    let resp = test::call_service(
        &app,
        post_json("/api/v1/auth/refresh-token", &json!({"refreshToken": tokens["accessToken"]}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "invalid signature");

    let resp = test::call_service(
        &app,
        post_json("/api/v1/auth/refresh-token", &json!({"refreshToken": "garbage"})).to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "jwt malformed");
}

#[actix_web::test]
async fn test_email_reset_password_unknown_email() {
    let ctx = test_context();
    let app = init_app!(ctx.context);

    let resp = test::call_service(
        &app,
        post_json("/api/v1/auth/email-reset-password", &json!({"email": "nobody@kanto.region"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "Email not found");
    assert!(ctx.mailer.sent().is_empty());
}

#[actix_web::test]
async fn test_email_reset_password_provider_failure() {
    let ctx = test_context_with_mailer(LogMailer::with_status(500));
    let app = init_app!(ctx.context);
    test::call_service(&app, post_json("/api/v1/auth/register", &misty()).to_request()).await;

    let resp = test::call_service(
        &app,
        post_json("/api/v1/auth/email-reset-password", &json!({"email": "misty@cerulean.city"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"]["message"],
        "Unable to send the email to misty@cerulean.city"
    );
}

#[actix_web::test]
async fn test_reset_password_link_works_once() {
    let ctx = test_context();
    let app = init_app!(ctx.context);
    test::call_service(&app, post_json("/api/v1/auth/register", &misty()).to_request()).await;

    let resp = test::call_service(
        &app,
        post_json("/api/v1/auth/email-reset-password", &json!({"email": "misty@cerulean.city"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "We have sent the reset password link to misty@cerulean.city"
    );

    let sent = ctx.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Request to reset password");
    let token = reset_token_from(&sent[0].html);

    let uri = format!("/api/v1/auth/reset-password?token={}", token);
    let new_password = json!({"password": "starmie99"});

    let resp = test::call_service(&app, post_json(&uri, &new_password).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Successfully reset password");

    let resp = test::call_service(&app, post_json(&uri, &new_password).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "Invalid link");

    let login = json!({"username": "misty_water", "password": "starmie99"});
    let resp = test::call_service(&app, post_json("/api/v1/auth/login", &login).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_reset_password_requires_token() {
    let ctx = test_context();
    let app = init_app!(ctx.context);

    let resp = test::call_service(
        &app,
        post_json("/api/v1/auth/reset-password", &json!({"password": "starmie99"})).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"].as_str().unwrap().starts_with("querystring"));

    let resp = test::call_service(
        &app,
        post_json("/api/v1/auth/reset-password?token=abc", &json!({"password": "starmie99"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
