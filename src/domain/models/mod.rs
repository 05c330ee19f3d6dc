//! 도메인 모델
//!
//! - [`auth`] - 인증 미들웨어가 요청에 심어두는 사용자 정보
//! - [`token`] - JWT 클레임
//! - [`pokemon`] - PokeAPI 응답 모델

pub mod auth;
pub mod pokemon;
pub mod token;
