use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use mongodb::bson::DateTime;
use crate::domain::entities::users::{RoleOption, User};

/// 사용자 조회 응답
///
/// 비밀번호 해시는 절대 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    #[schema(example = "65f0c1a2b3d4e5f601234567")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<RoleOption>,
    #[schema(example = "2026-01-01T00:00:00Z")]
    pub created_at: String,
    pub updated_at: String,
}

fn to_rfc3339(value: DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            first_name,
            last_name,
            roles,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            first_name,
            last_name,
            roles,
            created_at: to_rfc3339(created_at),
            updated_at: to_rfc3339(updated_at),
        }
    }
}
