//! 사용자 정보 수정 요청 DTO

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;
use crate::utils::string_utils::{deserialize_email, deserialize_optional_string};

/// 사용자 정보 수정 요청 (`PUT /api/v1/users/{id}`)
///
/// `username`을 생략하면 기존 값을 유지합니다. 역할과 비밀번호는 이 요청으로 바꿀 수 없습니다.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 6, max = 32, message = "must be between 6 and 32 characters"))]
    pub username: Option<String>,

    #[serde(deserialize_with = "deserialize_email")]
    #[validate(
        email(message = "must match format \"email\""),
        length(max = 64, message = "must not be longer than 64 characters")
    )]
    pub email: String,

    #[validate(length(max = 32, message = "must not be longer than 32 characters"))]
    pub first_name: String,

    #[validate(length(max = 32, message = "must not be longer than 32 characters"))]
    pub last_name: String,
}
