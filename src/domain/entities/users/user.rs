//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.
//! 필드명은 기존 문서와 호환되도록 camelCase로 저장합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use super::role::{is_admin, RoleOption};

/// 사용자 엔티티
///
/// 유니크 제약 조건:
/// - `email`
/// - `username` (값이 있을 때만)
/// - `firstName` + `lastName` 조합
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (선택)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// 이메일 (소문자로 정규화)
    pub email: String,
    /// bcrypt 해시
    #[serde(rename = "password")]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default = "RoleOption::default_roles")]
    pub roles: Vec<RoleOption>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 기본 역할(`Pokemon Trainer`)을 가진 새 사용자 생성
    pub fn new(
        username: Option<String>,
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            password_hash,
            first_name,
            last_name,
            roles: RoleOption::default_roles(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_roles(mut self, roles: Vec<RoleOption>) -> Self {
        self.roles = roles;
        self
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_admin(&self) -> bool {
        is_admin(&self.roles)
    }
}
