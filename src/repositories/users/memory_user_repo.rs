//! 인메모리 사용자 리포지토리
//!
//! `STORAGE_BACKEND=memory`로 실행하거나 테스트에서 사용합니다.
//! MongoDB 구현과 같은 유니크 제약 조건을 지킵니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::domain::entities::users::User;
use crate::errors::AppError;
use super::user_repo::{duplicate_fields, ProfileUpdate, UserStore};

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::DatabaseError("user store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::DatabaseError("user store lock poisoned".to_string()))
    }

    /// `skip` 사용자를 제외하고 유니크 제약 조건 검사
    fn check_unique(
        users: &[User],
        skip: Option<&ObjectId>,
        username: Option<&str>,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), AppError> {
        let others: Vec<User> = users
            .iter()
            .filter(|user| skip.is_none() || user.id.as_ref() != skip)
            .cloned()
            .collect();

        let duplicates = duplicate_fields(&others, username, email, first_name, last_name);
        if duplicates.is_empty() {
            Ok(())
        } else {
            Err(AppError::DuplicateFields(duplicates))
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn init(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.write()?;

        Self::check_unique(
            &users,
            None,
            user.username.as_deref(),
            &user.email,
            &user.first_name,
            &user.last_name,
        )?;

        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }
        users.push(user.clone());

        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.read()?.iter().find(|user| user.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.read()?.iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, AppError> {
        let email = login.to_lowercase();

        Ok(self
            .read()?
            .iter()
            .find(|user| user.username.as_deref() == Some(login) || user.email == email)
            .cloned())
    }

    async fn find_conflicts(
        &self,
        username: Option<&str>,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<User>, AppError> {
        Ok(self
            .read()?
            .iter()
            .filter(|user| {
                (username.is_some() && user.username.as_deref() == username)
                    || user.email == email
                    || (user.first_name == first_name && user.last_name == last_name)
            })
            .cloned()
            .collect())
    }

    async fn update_profile(&self, id: &ObjectId, update: ProfileUpdate) -> Result<bool, AppError> {
        let mut users = self.write()?;

        let Some(index) = users.iter().position(|user| user.id.as_ref() == Some(id)) else {
            return Ok(false);
        };

        let username = update
            .username
            .clone()
            .or_else(|| users[index].username.clone());

        Self::check_unique(
            &users,
            Some(id),
            username.as_deref(),
            &update.email,
            &update.first_name,
            &update.last_name,
        )?;

        let user = &mut users[index];
        user.username = username;
        user.email = update.email;
        user.first_name = update.first_name;
        user.last_name = update.last_name;
        user.updated_at = DateTime::now();

        Ok(true)
    }

    async fn update_password(&self, id: &ObjectId, password_hash: &str) -> Result<bool, AppError> {
        let mut users = self.write()?;

        match users.iter_mut().find(|user| user.id.as_ref() == Some(id)) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut users = self.write()?;
        let before = users.len();
        users.retain(|user| user.id.as_ref() != Some(id));
        Ok(users.len() < before)
    }
}
