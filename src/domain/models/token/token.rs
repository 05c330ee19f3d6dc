//! JWT 클레임 구조체
//!
//! 액세스/리프레시 토큰은 `user` 클레임에 최소한의 사용자 정보를 담고,
//! 비밀번호 재설정 토큰은 이메일과 비밀번호 해시 지문만 담습니다.
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{RoleOption, User};

/// 토큰에 담기는 사용자 정보
///
/// 키 순서와 구성은 `_id`, `email`, `firstName`, `lastName`, `roles`로 고정입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<RoleOption>,
}

impl From<&User> for TokenUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            roles: user.roles.clone(),
        }
    }
}

/// 액세스/리프레시 토큰 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user: TokenUser,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// 비밀번호 재설정 토큰 클레임
///
/// `pwd`는 발급 시점 비밀번호 해시의 SHA-256 지문입니다.
/// 비밀번호가 바뀌면 지문이 달라지므로 링크는 한 번만 유효합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetClaims {
    pub sub: String,
    pub pwd: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}
