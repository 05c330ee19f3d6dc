//! 비밀번호 해싱 서비스
//!
//! bcrypt로 비밀번호를 해싱하고 검증합니다. cost는 환경별로 다르게 설정됩니다
//! ([`PasswordConfig`](crate::config::PasswordConfig) 참고).

use std::time::Instant;
use crate::errors::{AppResult, ErrorContext};

#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 평문 비밀번호를 bcrypt 해시로 변환
    ///
    /// 솔트는 bcrypt가 매번 새로 생성하므로 같은 비밀번호도 해시가 달라집니다.
    pub fn hash(&self, plain: &str) -> AppResult<String> {
        let started = Instant::now();

        let hashed = bcrypt::hash(plain, self.cost)
            .with_context(|| format!("비밀번호 해싱 실패 (cost {})", self.cost))?;

        log::debug!("Password hashing took: {:?}", started.elapsed());
        Ok(hashed)
    }

    /// 해시와 평문 비밀번호 비교
    ///
    /// 해시 형식이 깨져 있으면 불일치로 취급합니다.
    pub fn verify(&self, plain: &str, hashed: &str) -> bool {
        let started = Instant::now();

        let matched = bcrypt::verify(plain, hashed).unwrap_or_else(|e| {
            log::warn!("⚠️ 비밀번호 해시 검증 실패: {}", e);
            false
        });

        log::debug!("Password verification took: {:?}", started.elapsed());
        matched
    }
}
