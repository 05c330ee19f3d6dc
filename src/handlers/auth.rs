//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 토큰 갱신, 비밀번호 재설정 엔드포인트를 처리합니다.
//! 모든 엔드포인트는 인증 없이 접근할 수 있습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/auth/register` | 회원가입 | 201 Created |
//! | `POST` | `/auth/login` | 로그인 | 200 OK |
//! | `POST` | `/auth/refresh-token` | 액세스 토큰 갱신 | 200 OK |
//! | `POST` | `/auth/email-reset-password` | 재설정 링크 메일 발송 | 200 OK |
//! | `POST` | `/auth/reset-password?token=` | 비밀번호 재설정 | 200 OK |

use actix_web::{post, web, HttpResponse};
use crate::core::AppContext;
use crate::domain::dto::{
    AuthTokenResponse, EmailResetPasswordRequest, MessageResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
    ResetPasswordQuery, ResetPasswordRequest, ValidateRequest,
};
use crate::errors::{AppError, ErrorResponse};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /auth/register`
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/register \
///   -H "Content-Type: application/json" \
///   -d '{"email":"ash@pallet.town","password":"pikachu1","firstName":"Ash","lastName":"Ketchum"}'
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "가입 완료, 토큰 발급", body = AuthTokenResponse),
        (status = 400, description = "요청 형식 오류", body = ErrorResponse),
        (status = 409, description = "중복된 사용자명/이메일/이름", body = ErrorResponse)
    )
)]
#[post("/register")]
pub async fn register(
    context: web::Data<AppContext>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate_request("body")?;

    let tokens = context.auth_service.register(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(tokens))
}

/// 로그인 핸들러
///
/// `username`에는 사용자명 또는 이메일을 넣을 수 있습니다.
///
/// # Endpoint
/// `POST /auth/login`
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "로그인 성공", body = AuthTokenResponse),
        (status = 400, description = "요청 형식 오류", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
#[post("/login")]
pub async fn login(
    context: web::Data<AppContext>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate_request("body")?;

    log::info!("로그인 시도 - 사용자: {}", payload.username);
    let tokens = context.auth_service.login(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(tokens))
}

/// 토큰 갱신 핸들러
///
/// # Endpoint
/// `POST /auth/refresh-token`
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh-token",
    tag = "auth",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "새 액세스 토큰", body = AuthTokenResponse),
        (status = 401, description = "리프레시 토큰 검증 실패", body = ErrorResponse)
    )
)]
#[post("/refresh-token")]
pub async fn refresh_token(
    context: web::Data<AppContext>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate_request("body")?;

    let tokens = context.auth_service.refresh_token(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(tokens))
}

/// 비밀번호 재설정 링크 발송 핸들러
///
/// # Endpoint
/// `POST /auth/email-reset-password`
#[utoipa::path(
    post,
    path = "/api/v1/auth/email-reset-password",
    tag = "auth",
    request_body = EmailResetPasswordRequest,
    responses(
        (status = 200, description = "재설정 링크 발송", body = MessageResponse),
        (status = 404, description = "가입되지 않은 이메일", body = ErrorResponse),
        (status = 502, description = "메일 발송 실패", body = ErrorResponse)
    )
)]
#[post("/email-reset-password")]
pub async fn email_reset_password(
    context: web::Data<AppContext>,
    payload: web::Json<EmailResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate_request("body")?;

    let message = context
        .auth_service
        .email_reset_password(payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(message))
}

/// 비밀번호 재설정 핸들러
///
/// 메일로 받은 링크의 `token` 쿼리와 새 비밀번호를 받습니다.
///
/// # Endpoint
/// `POST /auth/reset-password?token={token}`
#[utoipa::path(
    post,
    path = "/api/v1/auth/reset-password",
    tag = "auth",
    params(ResetPasswordQuery),
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "비밀번호 변경 완료", body = MessageResponse),
        (status = 401, description = "재설정 토큰 검증 실패", body = ErrorResponse),
        (status = 404, description = "Invalid link", body = ErrorResponse)
    )
)]
#[post("/reset-password")]
pub async fn reset_password(
    context: web::Data<AppContext>,
    query: web::Query<ResetPasswordQuery>,
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    query.validate_request("querystring")?;
    payload.validate_request("body")?;

    let message = context
        .auth_service
        .reset_password(&query.token, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(message))
}
