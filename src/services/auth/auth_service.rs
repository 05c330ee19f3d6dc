//! 인증 서비스 구현
//!
//! 회원가입, 로그인, 토큰 갱신, 비밀번호 재설정 흐름을 담당합니다.
//!
//! ## 비밀번호 재설정 흐름
//!
//! ```text
//! POST /auth/email-reset-password { email }
//!   └─ 재설정 토큰(3분) 발급 → 메일로 링크 전송
//! POST /auth/reset-password?token=... { password }
//!   └─ 토큰 검증 → 비밀번호 지문 확인 → 새 해시 저장
//! ```
//!
//! 재설정 토큰에는 발급 당시 비밀번호 해시의 지문이 들어 있어서,
//! 한 번 비밀번호를 바꾸고 나면 같은 링크는 더 이상 통과하지 못합니다.

use std::sync::Arc;
use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use crate::config::MailSettings;
use crate::domain::dto::{
    AuthTokenResponse, EmailResetPasswordRequest, LoginRequest, MessageResponse,
    RefreshTokenRequest, RegisterRequest, ResetPasswordRequest,
};
use crate::domain::entities::users::{RoleOption, User};
use crate::errors::AppError;
use crate::repositories::users::{duplicate_fields, UserStore};
use crate::services::mail::{MailMessage, Mailer};
use super::password_service::PasswordService;
use super::token_service::TokenService;

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const RESET_SUBJECT: &str = "Request to reset password";

pub struct AuthService {
    users: Arc<dyn UserStore>,
    passwords: PasswordService,
    tokens: Arc<TokenService>,
    mailer: Arc<dyn Mailer>,
    mail: MailSettings,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        passwords: PasswordService,
        tokens: Arc<TokenService>,
        mailer: Arc<dyn Mailer>,
        mail: MailSettings,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
            mailer,
            mail,
        }
    }

    /// 회원가입
    ///
    /// 1. **중복 확인**: username, email, firstName+lastName 조합
    /// 2. **비밀번호 해싱**: bcrypt
    /// 3. **저장**: 기본 역할 `Pokemon Trainer`
    /// 4. **토큰 발급**: 액세스 + 리프레시
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateFields` - 이미 등록된 값이 있는 경우 (동시 요청으로
    ///   저장 단계에서 충돌한 경우 포함)
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthTokenResponse, AppError> {
        let RegisterRequest {
            username,
            email,
            password,
            first_name,
            last_name,
        } = request;

        let existing = self
            .users
            .find_conflicts(username.as_deref(), &email, &first_name, &last_name)
            .await?;
        let duplicates =
            duplicate_fields(&existing, username.as_deref(), &email, &first_name, &last_name);
        if !duplicates.is_empty() {
            return Err(AppError::DuplicateFields(duplicates));
        }

        let password_hash = self.passwords.hash(&password)?;
        let user = self
            .users
            .insert(User::new(username, email, password_hash, first_name, last_name))
            .await?;

        info!("🆕 회원가입: {}", user.email);
        self.tokens.token_pair(&user)
    }

    /// 로그인 (`username`에는 사용자명 또는 이메일)
    ///
    /// 사용자가 없을 때와 비밀번호가 틀렸을 때 같은 메시지를 반환합니다.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthTokenResponse, AppError> {
        let user = self
            .users
            .find_by_login(request.username.trim())
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        if !self.passwords.verify(&request.password, &user.password_hash) {
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        self.tokens.token_pair(&user)
    }

    /// 리프레시 토큰으로 새 액세스 토큰 발급
    ///
    /// 리프레시 토큰은 그대로 돌려줍니다. 토큰 발급 이후 삭제된 사용자는 갱신할 수 없습니다.
    pub async fn refresh_token(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<AuthTokenResponse, AppError> {
        let claims = self.tokens.verify_refresh(&request.refresh_token)?;

        let user_id = ObjectId::parse_str(&claims.user.id)
            .map_err(|_| AppError::AuthenticationError("Unauthorized".to_string()))?;
        let user = self
            .users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("Unauthorized".to_string()))?;

        Ok(AuthTokenResponse {
            access_token: self.tokens.access_token(&user)?,
            refresh_token: request.refresh_token,
        })
    }

    /// 비밀번호 재설정 링크 메일 발송
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 등록되지 않은 이메일
    /// * `AppError::ExternalServiceError` - 메일 제공자가 요청을 접수하지 않음
    pub async fn email_reset_password(
        &self,
        request: EmailResetPasswordRequest,
    ) -> Result<MessageResponse, AppError> {
        let email = request.email;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("Email not found".to_string()))?;

        let token = self.tokens.reset_token(&user)?;
        let message = MailMessage {
            from: self.mail.from.clone(),
            to: email.clone(),
            subject: RESET_SUBJECT.to_string(),
            html: self.reset_mail_html(&token),
        };

        let unable = || AppError::ExternalServiceError(format!("Unable to send the email to {}", email));
        let receipt = self.mailer.send(&message).await.map_err(|e| {
            warn!("⚠️ 재설정 메일 발송 실패: {}", e);
            unable()
        })?;
        if !receipt.is_accepted() {
            warn!("⚠️ 메일 제공자가 요청을 거절했습니다 (status {})", receipt.status);
            return Err(unable());
        }

        info!("📨 비밀번호 재설정 링크 발송: {}", email);
        Ok(MessageResponse::new(format!(
            "We have sent the reset password link to {}",
            email
        )))
    }

    /// 재설정 토큰으로 비밀번호 변경
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 형식 오류, 서명 불일치, 만료
    /// * `AppError::NotFound` - 사용자가 없거나 이미 비밀번호가 바뀐 링크
    /// * `AppError::OperationFailed` - 저장 실패
    pub async fn reset_password(
        &self,
        token: &str,
        request: ResetPasswordRequest,
    ) -> Result<MessageResponse, AppError> {
        let claims = self.tokens.verify_reset(token)?;
        let invalid_link = || AppError::NotFound("Invalid link".to_string());

        let user = self
            .users
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(invalid_link)?;
        if TokenService::password_fingerprint(&user.password_hash) != claims.pwd {
            return Err(invalid_link());
        }

        let user_id = user
            .id
            .ok_or_else(|| AppError::OperationFailed("Failed to reset password".to_string()))?;
        let password_hash = self.passwords.hash(&request.password)?;

        let updated = self.users.update_password(&user_id, &password_hash).await?;
        if !updated {
            return Err(AppError::OperationFailed("Failed to reset password".to_string()));
        }

        info!("🔑 비밀번호 재설정 완료: {}", user.email);
        Ok(MessageResponse::new("Successfully reset password"))
    }

    /// 초기 관리자 계정 생성
    ///
    /// 이미 같은 이메일의 계정이 있으면 아무것도 하지 않고 `false`를 반환합니다.
    pub async fn ensure_seed_admin(&self, email: &str, password: &str) -> Result<bool, AppError> {
        let email = email.trim().to_lowercase();
        if self.users.find_by_email(&email).await?.is_some() {
            return Ok(false);
        }

        let admin = User::new(
            None,
            email,
            self.passwords.hash(password)?,
            "Pokedex".to_string(),
            "Admin".to_string(),
        )
        .with_roles(vec![RoleOption::Admin]);

        let admin = self.users.insert(admin).await?;
        info!("👑 초기 관리자 계정 생성: {}", admin.email);
        Ok(true)
    }

    fn reset_mail_html(&self, token: &str) -> String {
        let link = format!(
            "{}/api/v1/auth/reset-password?token={}",
            self.mail.public_base_url,
            urlencoding::encode(token)
        );

        format!(
            "<div>\
               <p>Please use below link to reset your password</p>\
               <a href='{}' target='blank'>Reset Password</a>\
             </div>",
            link
        )
    }
}
