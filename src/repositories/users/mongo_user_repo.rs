//! MongoDB 기반 사용자 리포지토리
//!
//! - **컬렉션명**: `users`
//! - **인덱스**: email(unique), username(partial unique), firstName+lastName(unique)
//!
//! 유니크 인덱스 위반(E11000)은 서버 메시지의 `dup key: { ... }` 부분을 해석해
//! [`AppError::DuplicateFields`]로 변환합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::{AppError, DuplicateField};
use super::user_repo::{ProfileUpdate, UserStore, FULL_NAME_FIELD};

const COLLECTION: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(COLLECTION),
        }
    }

    async fn update_one(&self, id: &ObjectId, set: Document) -> Result<bool, AppError> {
        let result = self
            .collection
            .update_one(doc! { "_id": *id }, doc! { "$set": set })
            .await
            .map_err(map_write_error)?;

        Ok(result.matched_count > 0)
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    /// 사용자 컬렉션 인덱스 생성
    ///
    /// 이미 중복 데이터가 있으면 유니크 인덱스 생성이 실패합니다.
    async fn init(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // username은 선택 필드라 값이 있는 문서에만 유니크 적용
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .partial_filter_expression(doc! { "username": { "$exists": true } })
                .build())
            .build();

        let full_name_index = IndexModel::builder()
            .keys(doc! { "firstName": 1, "lastName": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("full_name_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, username_index, full_name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("📇 users 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }

        self.collection
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        debug!("사용자 저장: {}", user.email);
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, AppError> {
        let filter = doc! {
            "$or": [
                { "username": login },
                { "email": login.to_lowercase() },
            ]
        };

        self.collection
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_conflicts(
        &self,
        username: Option<&str>,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<User>, AppError> {
        let mut conditions = vec![
            doc! { "email": email },
            doc! { "firstName": first_name, "lastName": last_name },
        ];
        if let Some(username) = username {
            conditions.push(doc! { "username": username });
        }

        let cursor = self
            .collection
            .find(doc! { "$or": conditions })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update_profile(&self, id: &ObjectId, update: ProfileUpdate) -> Result<bool, AppError> {
        let mut set = doc! {
            "email": update.email,
            "firstName": update.first_name,
            "lastName": update.last_name,
            "updatedAt": DateTime::now(),
        };
        if let Some(username) = update.username {
            set.insert("username", username);
        }

        self.update_one(id, set).await
    }

    async fn update_password(&self, id: &ObjectId, password_hash: &str) -> Result<bool, AppError> {
        self.update_one(
            id,
            doc! { "password": password_hash, "updatedAt": DateTime::now() },
        )
        .await
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

/// 쓰기 에러 변환 (중복 키는 409, 나머지는 500)
fn map_write_error(error: mongodb::error::Error) -> AppError {
    let duplicate_message = match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(write_error.message.clone())
        }
        ErrorKind::Command(command_error) if command_error.code == DUPLICATE_KEY_CODE => {
            Some(command_error.message.clone())
        }
        _ => None,
    };

    match duplicate_message {
        Some(message) => AppError::DuplicateFields(parse_duplicate_key_message(&message)),
        None => AppError::DatabaseError(error.to_string()),
    }
}

/// `E11000 ... dup key: { email: "ash@pallet.town" }` 형태의 메시지에서 충돌 필드 추출
pub(crate) fn parse_duplicate_key_message(message: &str) -> Vec<DuplicateField> {
    const MARKER: &str = "dup key: {";

    let Some(start) = message.find(MARKER) else {
        return Vec::new();
    };
    let body = &message[start + MARKER.len()..];
    let body = body.rfind('}').map_or(body, |end| &body[..end]);

    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut rest = body.trim();

    while let Some(colon) = rest.find(':') {
        let key = rest[..colon].trim().to_string();
        let after = rest[colon + 1..].trim_start();

        let (value, remaining) = match after.strip_prefix('"') {
            Some(quoted) => match quoted.find('"') {
                Some(end) => (&quoted[..end], &quoted[end + 1..]),
                None => (quoted, ""),
            },
            None => match after.find(',') {
                Some(end) => (after[..end].trim(), &after[end..]),
                None => (after.trim(), ""),
            },
        };

        pairs.push((key, value.to_string()));
        rest = remaining.trim_start().trim_start_matches(',').trim_start();
    }

    let lookup = |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    };

    match (lookup("firstName"), lookup("lastName")) {
        (Some(first), Some(last)) => vec![DuplicateField::new(
            FULL_NAME_FIELD,
            format!("{} {}", first, last),
        )],
        _ => pairs
            .into_iter()
            .map(|(key, value)| DuplicateField::new(key, value))
            .collect(),
    }
}
