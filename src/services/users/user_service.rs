//! # 사용자 관리 서비스 구현
//!
//! 인증된 사용자가 다른 사용자 리소스를 조회/수정/삭제할 때의 비즈니스 로직입니다.
//!
//! ## 접근 규칙
//!
//! | 작업 | Admin | 본인 | 그 외 |
//! |------|-------|------|-------|
//! | 목록 조회 | ✅ | ❌ | ❌ |
//! | 단건 조회/수정/삭제 | ✅ | ✅ | ❌ |
//!
//! 검사 순서는 항상 `id 형식(400)` → `권한(403)` → `존재 여부(404)`입니다.

use std::sync::Arc;
use log::info;
use mongodb::bson::oid::ObjectId;
use crate::domain::dto::{UpdateUserRequest, UserResponse};
use crate::domain::entities::users::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::repositories::users::{duplicate_fields, ProfileUpdate, UserStore};

const FORBIDDEN_RESOURCE: &str = "You are not allowed to access this resource";
const FORBIDDEN_OTHER_USER: &str = "You are not allowed to access other user's resource";
const USER_NOT_FOUND: &str = "User not found";

pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 전체 사용자 목록 (Admin 전용)
    pub async fn list_users(&self, actor: &AuthenticatedUser) -> Result<Vec<UserResponse>, AppError> {
        if !actor.is_admin() {
            return Err(AppError::AuthorizationError(FORBIDDEN_RESOURCE.to_string()));
        }

        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user(&self, actor: &AuthenticatedUser, id: &str) -> Result<UserResponse, AppError> {
        let user = self.find_accessible(actor, id).await?;
        Ok(UserResponse::from(user))
    }

    /// 프로필 수정
    ///
    /// `username`을 보내지 않으면 기존 값을 유지합니다.
    /// 다른 사용자와 겹치는 값이 있으면 충돌한 필드를 모두 담아 409로 응답합니다.
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
        request: UpdateUserRequest,
    ) -> Result<(), AppError> {
        let user = self.find_accessible(actor, id).await?;
        let user_id = user
            .id
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        let username = request.username.clone().or_else(|| user.username.clone());
        let others: Vec<User> = self
            .users
            .find_conflicts(
                username.as_deref(),
                &request.email,
                &request.first_name,
                &request.last_name,
            )
            .await?
            .into_iter()
            .filter(|other| other.id != Some(user_id))
            .collect();

        let duplicates = duplicate_fields(
            &others,
            username.as_deref(),
            &request.email,
            &request.first_name,
            &request.last_name,
        );
        if !duplicates.is_empty() {
            return Err(AppError::DuplicateFields(duplicates));
        }

        let update = ProfileUpdate {
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
        };
        if !self.users.update_profile(&user_id, update).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        info!("✏️ 사용자 정보 수정: {} (by {})", id, actor.user_id);
        Ok(())
    }

    pub async fn delete_user(&self, actor: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
        let object_id = parse_user_id(id)?;
        ensure_self_or_admin(actor, id)?;

        if !self.users.delete(&object_id).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        info!("🗑️ 사용자 삭제: {} (by {})", id, actor.user_id);
        Ok(())
    }

    async fn find_accessible(&self, actor: &AuthenticatedUser, id: &str) -> Result<User, AppError> {
        let object_id = parse_user_id(id)?;
        ensure_self_or_admin(actor, id)?;

        self.users
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }
}

/// 경로 파라미터 `id`를 ObjectId로 변환 (24자리 16진수)
pub fn parse_user_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| {
        AppError::ValidationError("params/id must be a 24 character hex string".to_string())
    })
}

fn ensure_self_or_admin(actor: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
    // ObjectId 문자열은 소문자로 비교
    if actor.can_access(&id.to_lowercase()) {
        Ok(())
    } else {
        Err(AppError::AuthorizationError(FORBIDDEN_OTHER_USER.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::RoleOption;
    use crate::errors::DuplicateField;
    use crate::repositories::users::InMemoryUserRepository;

    async fn seeded() -> (UserService, Arc<InMemoryUserRepository>, User, User) {
        let store = Arc::new(InMemoryUserRepository::new());
        let ash = store
            .insert(User::new(
                Some("ash_ketchum".to_string()),
                "ash@pallet.town".to_string(),
                "hash".to_string(),
                "Ash".to_string(),
                "Ketchum".to_string(),
            ))
            .await
            .unwrap();
        let misty = store
            .insert(User::new(
                None,
                "misty@cerulean.city".to_string(),
                "hash".to_string(),
                "Misty".to_string(),
                "Waterflower".to_string(),
            ))
            .await
            .unwrap();

        (UserService::new(store.clone()), store, ash, misty)
    }

    fn actor(user: &User, roles: Vec<RoleOption>) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: user.id_string().unwrap(),
            email: user.email.clone(),
            roles,
        }
    }

    fn update(email: &str, first: &str, last: &str) -> UpdateUserRequest {
        UpdateUserRequest {
            username: None,
            email: email.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_list_requires_admin() {
        let (service, _, ash, _) = seeded().await;

        let err = service
            .list_users(&actor(&ash, vec![RoleOption::PokemonTrainer]))
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), FORBIDDEN_RESOURCE);

        let all = service.list_users(&actor(&ash, vec![RoleOption::Admin])).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[actix_web::test]
    async fn test_trainer_cannot_read_other_user() {
        let (service, _, ash, misty) = seeded().await;
        let trainer = actor(&ash, vec![RoleOption::PokemonTrainer]);

        assert!(service.get_user(&trainer, &ash.id_string().unwrap()).await.is_ok());
        let err = service
            .get_user(&trainer, &misty.id_string().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AuthorizationError(_)));
    }

    #[actix_web::test]
    async fn test_invalid_and_missing_ids() {
        let (service, _, ash, _) = seeded().await;
        let admin = actor(&ash, vec![RoleOption::Admin]);

        let invalid = service.get_user(&admin, "1234").await.unwrap_err();
        assert!(matches!(invalid, AppError::ValidationError(_)));

        let missing = service
            .get_user(&admin, &ObjectId::new().to_hex())
            .await
            .unwrap_err();
        assert_eq!(missing.client_message(), USER_NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_conflict_lists_fields() {
        let (service, _, ash, _) = seeded().await;
        let me = actor(&ash, vec![RoleOption::PokemonTrainer]);

        let err = service
            .update_user(
                &me,
                &ash.id_string().unwrap(),
                update("misty@cerulean.city", "Misty", "Waterflower"),
            )
            .await
            .unwrap_err();

        match err {
            AppError::DuplicateFields(fields) => assert_eq!(
                fields,
                vec![
                    DuplicateField::new("email", "misty@cerulean.city"),
                    DuplicateField::new("firstName and lastName", "Misty Waterflower"),
                ]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[actix_web::test]
    async fn test_update_self_keeps_username() {
        let (service, store, ash, _) = seeded().await;
        let me = actor(&ash, vec![RoleOption::PokemonTrainer]);

        service
            .update_user(&me, &ash.id_string().unwrap(), update("ash@kanto.region", "Ash", "Ketchum"))
            .await
            .unwrap();

        let stored = store.find_by_id(&ash.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(stored.email, "ash@kanto.region");
        assert_eq!(stored.username.as_deref(), Some("ash_ketchum"));
    }

    #[actix_web::test]
    async fn test_admin_deletes_other_user() {
        let (service, store, ash, misty) = seeded().await;
        let admin = actor(&ash, vec![RoleOption::Admin]);
        let misty_id = misty.id_string().unwrap();

        service.delete_user(&admin, &misty_id).await.unwrap();
        assert!(store.find_by_id(&misty.id.unwrap()).await.unwrap().is_none());

        let again = service.delete_user(&admin, &misty_id).await.unwrap_err();
        assert!(matches!(again, AppError::NotFound(_)));
    }
}
