use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{is_admin, RoleOption};
use crate::domain::token::TokenClaims;
use crate::errors::AppError;

/// 인증된 사용자 정보
///
/// `AuthMiddleware`가 토큰 검증 후 request extensions에 저장하며,
/// 핸들러에서는 extractor로 꺼내 씁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub roles: Vec<RoleOption>,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        is_admin(&self.roles)
    }

    /// 관리자이거나 본인 리소스인 경우 접근 가능
    pub fn can_access(&self, user_id: &str) -> bool {
        self.is_admin() || self.user_id == user_id
    }
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user.id,
            email: claims.user.email,
            roles: claims.user.roles,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "No Authorization was found in request.headers".to_string(),
            ))),
        }
    }
}
