//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 있으며, 각 서비스는 생성 시점에 저장소와 설정을 주입받습니다.
//!
//! # Features
//!
//! - 회원가입, 로그인, 토큰 갱신, 비밀번호 재설정 ([`auth`])
//! - 사용자 조회/수정/삭제와 역할 기반 접근 제어 ([`users`])
//! - 비밀번호 재설정 메일 발송 ([`mail`])
//! - 포켓몬 카탈로그 조회 ([`pokedex`])

pub mod auth;
pub mod mail;
pub mod pokedex;
pub mod users;
