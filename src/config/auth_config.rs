//! 인증/메일 관련 설정
//!
//! JWT 서명 키와 만료 시간, 비밀번호 재설정 메일 발송, 초기 관리자 계정 설정을
//! 환경 변수에서 읽어옵니다.

use std::env;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 서명 키
    pub fn access_secret() -> String {
        env::var("SECRET_ACCESS_TOKEN").unwrap_or_else(|_| {
            log::warn!("SECRET_ACCESS_TOKEN not set, using default (not secure for production!)");
            "access-secret-key".to_string()
        })
    }

    /// 리프레시 토큰 서명 키
    pub fn refresh_secret() -> String {
        env::var("SECRET_REFRESH_TOKEN").unwrap_or_else(|_| {
            log::warn!("SECRET_REFRESH_TOKEN not set, using default (not secure for production!)");
            "refresh-secret-key".to_string()
        })
    }

    /// 비밀번호 재설정 토큰 서명 키 (없으면 액세스 토큰 키 사용)
    pub fn reset_secret() -> String {
        env::var("SECRET_RESET_TOKEN").unwrap_or_else(|_| Self::access_secret())
    }

    pub fn issuer() -> String {
        env::var("JWT_ISSUER").unwrap_or_else(|_| "pokedex-backend".to_string())
    }

    /// 액세스 토큰 유효 기간 (분, 최대 1일)
    pub fn access_ttl_minutes() -> i64 {
        ttl_from_env("ACCESS_TOKEN_TTL_MINUTES", 30, 24 * 60)
    }

    /// 리프레시 토큰 유효 기간 (일, 최대 10년)
    pub fn refresh_ttl_days() -> i64 {
        ttl_from_env("REFRESH_TOKEN_TTL_DAYS", 365, 3650)
    }

    /// 재설정 토큰 유효 기간 (분, 최대 1시간)
    pub fn reset_ttl_minutes() -> i64 {
        ttl_from_env("RESET_TOKEN_TTL_MINUTES", 3, 60)
    }
}

/// 메일 발송 프로바이더
#[derive(Debug, Clone, PartialEq)]
pub enum MailProvider {
    SendGrid,
    Log,
}

/// 메일 설정
pub struct MailConfig;

impl MailConfig {
    pub fn provider() -> MailProvider {
        match env::var("MAIL_PROVIDER")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "sendgrid" => MailProvider::SendGrid,
            _ => MailProvider::Log,
        }
    }

    pub fn sendgrid_api_key() -> Option<String> {
        env::var("SENDGRID_API_KEY").ok().filter(|k| !k.trim().is_empty())
    }

    pub fn sendgrid_api_url() -> String {
        env::var("SENDGRID_API_URL")
            .unwrap_or_else(|_| "https://api.sendgrid.com/v3/mail/send".to_string())
    }

    pub fn from_address() -> String {
        env::var("MAIL_FROM").unwrap_or_else(|_| "no-reply@pokedex.local".to_string())
    }

    /// 메일 본문 링크에 사용할 공개 주소
    pub fn public_base_url() -> String {
        env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string()
    }
}

/// 초기 관리자 계정 설정
pub struct SeedConfig;

impl SeedConfig {
    /// `SEED_ADMIN_EMAIL`, `SEED_ADMIN_PASSWORD`가 모두 있을 때만 반환합니다.
    pub fn admin_credentials() -> Option<(String, String)> {
        let email = env::var("SEED_ADMIN_EMAIL").ok()?;
        let password = env::var("SEED_ADMIN_PASSWORD").ok()?;
        if email.trim().is_empty() || password.is_empty() {
            return None;
        }
        Some((email, password))
    }
}

fn ttl_from_env(key: &str, default: i64, max: i64) -> i64 {
    let Ok(raw) = env::var(key) else {
        return default;
    };

    parse_ttl(&raw, max).unwrap_or_else(|| {
        log::warn!("{}={} 값이 1..={} 범위를 벗어나 기본값 {}을 사용합니다", key, raw, max, default);
        default
    })
}

/// 1..=max 범위의 정수만 받습니다.
fn parse_ttl(raw: &str, max: i64) -> Option<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|v| (1..=max).contains(v))
}
