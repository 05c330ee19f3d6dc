//! 인증 및 보안 서비스 모듈
//!
//! # Features
//!
//! - bcrypt 비밀번호 해싱 ([`PasswordService`])
//! - JWT 액세스/리프레시/재설정 토큰 ([`TokenService`])
//! - 회원가입, 로그인, 토큰 갱신, 비밀번호 재설정 ([`AuthService`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use pokedex_backend::services::auth::TokenService;
//!
//! let tokens = TokenService::new(settings.jwt.clone());
//! let pair = tokens.token_pair(&user)?;
//! ```

pub mod auth_service;
pub mod password_service;
pub mod token_service;

pub use auth_service::AuthService;
pub use password_service::PasswordService;
pub use token_service::{TokenService, BEARER_FORMAT_MESSAGE};
