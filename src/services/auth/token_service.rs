//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스/리프레시 토큰과 비밀번호 재설정 토큰의 생성, 검증을 담당합니다.
//!
//! | 토큰 | 서명 키 | 유효 기간 |
//! |------|---------|-----------|
//! | 액세스 | `SECRET_ACCESS_TOKEN` | 30분 |
//! | 리프레시 | `SECRET_REFRESH_TOKEN` | 365일 |
//! | 재설정 | `SECRET_RESET_TOKEN` | 3분 |

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{de::DeserializeOwned, Serialize};
use sha2::{Digest, Sha256};
use crate::config::JwtSettings;
use crate::domain::dto::AuthTokenResponse;
use crate::domain::entities::users::User;
use crate::domain::token::{ResetClaims, TokenClaims, TokenUser};
use crate::errors::{AppError, AppResult, ErrorContext};

/// `Authorization` 헤더 형식 오류 메시지
pub const BEARER_FORMAT_MESSAGE: &str = "Format is Authorization: Bearer [token]";

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명과 발급자(`iss`) 검증을 사용합니다.
#[derive(Debug, Clone)]
pub struct TokenService {
    settings: JwtSettings,
}

impl TokenService {
    pub fn new(settings: JwtSettings) -> Self {
        Self { settings }
    }

    /// 액세스 토큰 생성 (30분)
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    pub fn access_token(&self, user: &User) -> Result<String, AppError> {
        let ttl = ttl_minutes(self.settings.access_ttl_minutes)?;
        let claims = self.user_claims(user, ttl)?;
        self.sign(&claims, &self.settings.access_secret)
    }

    /// 리프레시 토큰 생성 (365일)
    pub fn refresh_token(&self, user: &User) -> Result<String, AppError> {
        let ttl = TimeDelta::try_days(self.settings.refresh_ttl_days).ok_or_else(|| {
            AppError::InternalError(format!(
                "리프레시 토큰 유효 기간이 범위를 벗어났습니다: {}일",
                self.settings.refresh_ttl_days
            ))
        })?;
        let claims = self.user_claims(user, ttl)?;
        self.sign(&claims, &self.settings.refresh_secret)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// ```rust,ignore
    /// let tokens = token_service.token_pair(&user)?;
    /// println!("Access token: {}", tokens.access_token);
    /// ```
    pub fn token_pair(&self, user: &User) -> Result<AuthTokenResponse, AppError> {
        Ok(AuthTokenResponse {
            access_token: self.access_token(user)?,
            refresh_token: self.refresh_token(user)?,
        })
    }

    pub fn verify_access(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify(token, &self.settings.access_secret)
    }

    pub fn verify_refresh(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify(token, &self.settings.refresh_secret)
    }

    /// 비밀번호 재설정 토큰 생성 (3분)
    ///
    /// 현재 비밀번호 해시의 지문을 담아, 비밀번호가 바뀐 뒤에는 같은 링크를 다시 쓸 수 없게 합니다.
    pub fn reset_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = ResetClaims {
            sub: user.email.clone(),
            pwd: Self::password_fingerprint(&user.password_hash),
            iss: self.settings.issuer.clone(),
            iat: now.timestamp(),
            exp: expires_at(now, ttl_minutes(self.settings.reset_ttl_minutes)?)?,
        };

        self.sign(&claims, &self.settings.reset_secret)
    }

    pub fn verify_reset(&self, token: &str) -> Result<ResetClaims, AppError> {
        self.verify(token, &self.settings.reset_secret)
    }

    /// 비밀번호 해시의 SHA-256 지문 (base64url)
    pub fn password_fingerprint(password_hash: &str) -> String {
        URL_SAFE_NO_PAD.encode(Sha256::digest(password_hash.as_bytes()))
    }

    /// `Bearer {token}` 형식의 헤더에서 토큰 부분만 추출
    ///
    /// 스킴 이름은 대소문자를 구분하지 않습니다.
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token("Bearer eyJhbGciOi...")?;
    /// let claims = token_service.verify_access(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.split_once(' ') {
            Some((scheme, token))
                if scheme.eq_ignore_ascii_case("Bearer") && !token.trim().is_empty() =>
            {
                Ok(token.trim())
            }
            _ => Err(AppError::AuthenticationError(BEARER_FORMAT_MESSAGE.to_string())),
        }
    }

    fn user_claims(&self, user: &User, ttl: TimeDelta) -> Result<TokenClaims, AppError> {
        if user.id.is_none() {
            return Err(AppError::InternalError("사용자 ID가 없습니다".to_string()));
        }

        let now = Utc::now();
        Ok(TokenClaims {
            user: TokenUser::from(user),
            iss: self.settings.issuer.clone(),
            iat: now.timestamp(),
            exp: expires_at(now, ttl)?,
        })
    }

    fn sign<T: Serialize>(&self, claims: &T, secret: &str) -> Result<String, AppError> {
        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());

        encode(&header, claims, &encoding_key).context("JWT 토큰 생성 실패")
    }

    fn verify<T: DeserializeOwned>(&self, token: &str, secret: &str) -> Result<T, AppError> {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.settings.issuer.as_str()]);

        decode::<T>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                let message = match e.kind() {
                    ErrorKind::InvalidToken
                    | ErrorKind::Base64(_)
                    | ErrorKind::Json(_)
                    | ErrorKind::Utf8(_) => "jwt malformed",
                    ErrorKind::ExpiredSignature => "jwt expired",
                    ErrorKind::InvalidSignature => "invalid signature",
                    _ => "invalid token",
                };
                log::debug!("토큰 검증 실패: {}", e);
                AppError::AuthenticationError(message.to_string())
            })
    }
}

fn ttl_minutes(minutes: i64) -> AppResult<TimeDelta> {
    TimeDelta::try_minutes(minutes).ok_or_else(|| {
        AppError::InternalError(format!("토큰 유효 기간이 범위를 벗어났습니다: {}분", minutes))
    })
}

/// 만료 시각 (유닉스 초). 표현할 수 없는 시각이면 에러
fn expires_at(now: DateTime<Utc>, ttl: TimeDelta) -> AppResult<i64> {
    now.checked_add_signed(ttl)
        .map(|exp| exp.timestamp())
        .ok_or_else(|| AppError::InternalError(format!("토큰 만료 시각 계산 실패: {}", ttl)))
}
