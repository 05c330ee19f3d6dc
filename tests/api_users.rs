mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use mongodb::bson::oid::ObjectId;
use serde_json::{json, Value};
use pokedex_backend::repositories::users::UserStore;
use common::{admin_token, ash, bearer, init_app, misty, post_json, test_context};

/// 가입 후 (사용자 ID, 액세스 토큰)
macro_rules! signup {
    ($app:expr, $ctx:expr, $body:expr) => {{
        let body = $body;
        let tokens: Value = test::call_and_read_body_json(
            &$app,
            post_json("/api/v1/auth/register", &body).to_request(),
        )
        .await;
        let email = body["email"].as_str().unwrap();
        let user = $ctx.store.find_by_email(email).await.unwrap().unwrap();
        (
            user.id.unwrap().to_hex(),
            tokens["accessToken"].as_str().unwrap().to_string(),
        )
    }};
}

fn update_body(email: &str, first: &str, last: &str) -> Value {
    json!({"email": email, "firstName": first, "lastName": last})
}

#[actix_web::test]
async fn test_missing_or_malformed_authorization() {
    let ctx = test_context();
    let app = init_app!(ctx.context);

    let resp = test::call_service(&app, TestRequest::get().uri("/api/v1/users").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"]["message"],
        "No Authorization was found in request.headers"
    );

    let req = TestRequest::get()
        .uri("/api/v1/users")
        .insert_header(("Authorization", "Token abc"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["error"]["message"], "Format is Authorization: Bearer [token]");

    let req = bearer(TestRequest::get().uri("/api/v1/users"), "not.a.jwt").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "jwt malformed");
}

#[actix_web::test]
async fn test_list_users_is_admin_only() {
    let ctx = test_context();
    let app = init_app!(ctx.context);
    let (_, trainer_token) = signup!(app, ctx, ash());

    let req = bearer(TestRequest::get().uri("/api/v1/users"), &trainer_token).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"]["message"],
        "You are not allowed to access this resource"
    );

    let admin = admin_token(&ctx.context).await;
    let req = bearer(TestRequest::get().uri("/api/v1/users"), &admin).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Value = test::read_body_json(resp).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|user| user.get("password").is_none()));
}

#[actix_web::test]
async fn test_bearer_scheme_is_case_insensitive() {
    let ctx = test_context();
    let app = init_app!(ctx.context);
    let admin = admin_token(&ctx.context).await;

    let req = TestRequest::get()
        .uri("/api/v1/users")
        .insert_header(("Authorization", format!("bearer {admin}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_get_user_self_other_and_admin() {
    let ctx = test_context();
    let app = init_app!(ctx.context);
    let (ash_id, ash_token) = signup!(app, ctx, ash());
    let (misty_id, _) = signup!(app, ctx, misty());

    let req = bearer(TestRequest::get().uri(&format!("/api/v1/users/{ash_id}")), &ash_token).to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["_id"], ash_id);
    assert_eq!(me["username"], "ash_ketchum");
    assert_eq!(me["roles"], json!(["Pokemon Trainer"]));

    let req = bearer(TestRequest::get().uri(&format!("/api/v1/users/{misty_id}")), &ash_token).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"]["message"],
        "You are not allowed to access other user's resource"
    );

    let admin = admin_token(&ctx.context).await;
    let req = bearer(TestRequest::get().uri(&format!("/api/v1/users/{misty_id}")), &admin).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_invalid_id_and_missing_user() {
    let ctx = test_context();
    let app = init_app!(ctx.context);
    let admin = admin_token(&ctx.context).await;

    let req = bearer(TestRequest::get().uri("/api/v1/users/1234"), &admin).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let missing = ObjectId::new().to_hex();
    let req = bearer(TestRequest::get().uri(&format!("/api/v1/users/{missing}")), &admin).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "User not found");

    let req = bearer(TestRequest::delete().uri(&format!("/api/v1/users/{missing}")), &admin).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_self() {
    let ctx = test_context();
    let app = init_app!(ctx.context);
    let (ash_id, ash_token) = signup!(app, ctx, ash());

    let req = bearer(
        TestRequest::put()
            .uri(&format!("/api/v1/users/{ash_id}"))
            .set_json(update_body("ash@kanto.region", "Ash", "Ketchum")),
        &ash_token,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let stored = ctx
        .store
        .find_by_id(&ObjectId::parse_str(&ash_id).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.email, "ash@kanto.region");
    assert_eq!(stored.username.as_deref(), Some("ash_ketchum"));
}

#[actix_web::test]
async fn test_update_conflict_and_validation() {
    let ctx = test_context();
    let app = init_app!(ctx.context);
    let (ash_id, ash_token) = signup!(app, ctx, ash());
    signup!(app, ctx, misty());

    let req = bearer(
        TestRequest::put()
            .uri(&format!("/api/v1/users/{ash_id}"))
            .set_json(update_body("misty@cerulean.city", "Ash", "Ketchum")),
        &ash_token,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"]["duplicateFields"],
        json!([{"field": "email", "value": "misty@cerulean.city"}])
    );

    let req = bearer(
        TestRequest::put()
            .uri(&format!("/api/v1/users/{ash_id}"))
            .set_json(json!({"username": "ash", "email": "ash@pallet.town", "firstName": "Ash", "lastName": "Ketchum"})),
        &ash_token,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"].as_str().unwrap().contains("body/username"));
}

#[actix_web::test]
async fn test_delete_self_and_other() {
    let ctx = test_context();
    let app = init_app!(ctx.context);
    let (ash_id, ash_token) = signup!(app, ctx, ash());
    let (misty_id, _) = signup!(app, ctx, misty());

    let req = bearer(TestRequest::delete().uri(&format!("/api/v1/users/{misty_id}")), &ash_token).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = bearer(TestRequest::delete().uri(&format!("/api/v1/users/{ash_id}")), &ash_token).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let gone = ctx
        .store
        .find_by_id(&ObjectId::parse_str(&ash_id).unwrap())
        .await
        .unwrap();
    assert!(gone.is_none());

    // 삭제된 사용자는 로그인할 수 없다
    let login = json!({"username": "ash_ketchum", "password": "pikachu1"});
    let resp = test::call_service(&app, post_json("/api/v1/auth/login", &login).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
