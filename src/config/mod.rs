//! 애플리케이션 설정 모듈
//!
//! 환경 변수 기반 설정을 제공합니다. 각 설정 구조체는 필요할 때 환경 변수를 읽고,
//! 값이 없으면 개발용 기본값을 사용합니다.
//!
//! 서비스는 환경 변수를 직접 읽지 않고 [`Settings`] 스냅샷으로 생성됩니다.
//! 테스트에서는 `Settings`를 직접 구성해 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use pokedex_backend::config::{Settings, ServerConfig};
//!
//! let settings = Settings::from_env();
//! let address = ServerConfig::bind_address();
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;

/// JWT 서명/검증에 필요한 값
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub access_secret: String,
    pub refresh_secret: String,
    pub reset_secret: String,
    pub issuer: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_days: i64,
    pub reset_ttl_minutes: i64,
}

impl JwtSettings {
    pub fn from_env() -> Self {
        Self {
            access_secret: JwtConfig::access_secret(),
            refresh_secret: JwtConfig::refresh_secret(),
            reset_secret: JwtConfig::reset_secret(),
            issuer: JwtConfig::issuer(),
            access_ttl_minutes: JwtConfig::access_ttl_minutes(),
            refresh_ttl_days: JwtConfig::refresh_ttl_days(),
            reset_ttl_minutes: JwtConfig::reset_ttl_minutes(),
        }
    }
}

/// 비밀번호 재설정 메일에 필요한 값
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub from: String,
    pub public_base_url: String,
}

impl MailSettings {
    pub fn from_env() -> Self {
        Self {
            from: MailConfig::from_address(),
            public_base_url: MailConfig::public_base_url(),
        }
    }
}

/// PokeAPI 호출에 필요한 값
#[derive(Debug, Clone)]
pub struct PokeApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl PokeApiSettings {
    pub fn from_env() -> Self {
        Self {
            base_url: PokeApiConfig::base_url(),
            timeout_secs: PokeApiConfig::timeout_secs(),
        }
    }
}

/// 서비스 생성에 사용하는 설정 스냅샷
#[derive(Debug, Clone)]
pub struct Settings {
    pub jwt: JwtSettings,
    pub bcrypt_cost: u32,
    pub mail: MailSettings,
    pub poke_api: PokeApiSettings,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            jwt: JwtSettings::from_env(),
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
            mail: MailSettings::from_env(),
            poke_api: PokeApiSettings::from_env(),
        }
    }
}
