//! # 사용자 리포지토리 인터페이스
//!
//! 사용자 엔티티의 데이터 액세스 계층을 추상화합니다.
//! 서비스 계층은 [`UserStore`] 트레이트에만 의존하고, 실제 저장소는
//! 실행 시점에 MongoDB 또는 인메모리 구현 중 하나로 결정됩니다.
//!
//! ## 유니크 제약 조건
//!
//! | 필드 | 조건 |
//! |------|------|
//! | `email` | 항상 유니크 |
//! | `username` | 값이 있을 때만 유니크 |
//! | `firstName` + `lastName` | 조합이 유니크 |
//!
//! 제약 조건 위반은 [`AppError::DuplicateFields`]로 보고되며,
//! 어떤 필드가 어떤 값으로 충돌했는지 함께 전달됩니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::users::User;
use crate::errors::{AppError, DuplicateField};

/// 이름 조합 충돌을 보고할 때 사용하는 필드명
pub const FULL_NAME_FIELD: &str = "firstName and lastName";

/// 프로필 수정 내용
///
/// `username`이 `None`이면 기존 값을 유지합니다.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// 사용자 저장소
///
/// 모든 메서드는 `Result<T, AppError>`를 반환합니다.
///
/// - **DatabaseError**: 저장소 연결 오류, 쿼리 실행 오류
/// - **DuplicateFields**: 유니크 제약 조건 위반
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 인덱스 등 저장소 초기화
    async fn init(&self) -> Result<(), AppError>;

    /// 새 사용자 저장 (`_id` 할당 후 반환)
    async fn insert(&self, user: User) -> Result<User, AppError>;

    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 사용자명 또는 이메일로 조회
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, AppError>;

    /// 주어진 값 중 하나라도 유니크 제약 조건에 걸리는 사용자 목록
    async fn find_conflicts(
        &self,
        username: Option<&str>,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<User>, AppError>;

    /// 프로필 수정. 대상이 없으면 `false`
    async fn update_profile(&self, id: &ObjectId, update: ProfileUpdate) -> Result<bool, AppError>;

    /// 비밀번호 해시 교체. 대상이 없으면 `false`
    async fn update_password(&self, id: &ObjectId, password_hash: &str) -> Result<bool, AppError>;

    /// 삭제. 대상이 없으면 `false`
    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;
}

/// 기존 사용자 목록에서 충돌한 필드를 추려냅니다.
///
/// 결과 순서는 항상 `username`, `email`, `firstName and lastName`이며
/// 같은 필드는 한 번만 보고됩니다.
pub fn duplicate_fields(
    existing: &[User],
    username: Option<&str>,
    email: &str,
    first_name: &str,
    last_name: &str,
) -> Vec<DuplicateField> {
    let mut fields = Vec::new();

    if let Some(username) = username {
        if existing.iter().any(|user| user.username.as_deref() == Some(username)) {
            fields.push(DuplicateField::new("username", username));
        }
    }

    if existing.iter().any(|user| user.email == email) {
        fields.push(DuplicateField::new("email", email));
    }

    if existing
        .iter()
        .any(|user| user.first_name == first_name && user.last_name == last_name)
    {
        fields.push(DuplicateField::new(
            FULL_NAME_FIELD,
            format!("{} {}", first_name, last_name),
        ));
    }

    fields
}
