//! 인증 요청 DTO
//!
//! 회원가입, 로그인, 토큰 갱신, 비밀번호 재설정 요청 바디와 쿼리를 정의합니다.
//! 필수 필드 누락은 역직렬화 단계에서, 길이/형식 위반은 `validator` 단계에서 걸러집니다.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;
use crate::utils::string_utils::{deserialize_email, deserialize_optional_string};

/// 회원가입 요청
///
/// ```json
/// {
///   "username": "ash_ketchum",
///   "email": "ash@pallet.town",
///   "password": "pikachu1",
///   "firstName": "Ash",
///   "lastName": "Ketchum"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 6, max = 32, message = "must be between 6 and 32 characters"))]
    pub username: Option<String>,

    #[serde(deserialize_with = "deserialize_email")]
    #[validate(
        email(message = "must match format \"email\""),
        length(max = 64, message = "must not be longer than 64 characters")
    )]
    pub email: String,

    #[validate(length(min = 8, max = 24, message = "must be between 8 and 24 characters"))]
    pub password: String,

    #[validate(length(max = 32, message = "must not be longer than 32 characters"))]
    pub first_name: String,

    #[validate(length(max = 32, message = "must not be longer than 32 characters"))]
    pub last_name: String,
}

/// 로그인 요청
///
/// `username`에는 사용자명 또는 이메일을 넣을 수 있습니다.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub refresh_token: String,
}

/// 비밀번호 재설정 메일 요청
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct EmailResetPasswordRequest {
    #[serde(deserialize_with = "deserialize_email")]
    #[validate(
        email(message = "must match format \"email\""),
        length(max = 64, message = "must not be longer than 64 characters")
    )]
    pub email: String,
}

/// 비밀번호 재설정 쿼리 (`?token=...`)
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResetPasswordQuery {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub token: String,
}

/// 비밀번호 재설정 요청 바디
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 8, max = 24, message = "must be between 8 and 24 characters"))]
    pub password: String,
}
