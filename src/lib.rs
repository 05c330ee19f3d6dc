//! 포켓몬 도감 백엔드
//!
//! 포켓몬 트레이너를 위한 인증, 사용자 관리, 포켓몬 카탈로그 조회 서비스입니다.
//!
//! # Features
//!
//! - **회원가입/로그인**: bcrypt 비밀번호 해싱, 사용자명 또는 이메일 로그인
//! - **JWT 인증**: 액세스(30분)/리프레시(365일) 토큰 기반 상태 없는 인증
//! - **비밀번호 재설정**: 3분짜리 재설정 링크를 메일로 발송 (SendGrid)
//! - **사용자 관리**: 관리자 또는 본인만 조회/수정/삭제
//! - **포켓몬 카탈로그**: PokeAPI 페이지를 타입/이미지와 함께 조회
//! - **저장소**: MongoDB 또는 메모리 저장소
//! - **API 문서**: `/documentation`에서 Swagger UI 제공 (utoipa)
//!
//! # Architecture
//!
//! ```text
//! HTTP 요청
//!   │  Governor → Cors → Logger → NormalizePath
//!   ▼
//! routes ── /api/v1/auth ─────────┐
//!        ── /api/v1/users ── AuthMiddleware (Bearer 검증)
//!        ── /api/v1/pokemons ─────┤
//!                                 ▼
//! handlers (web::Data<AppContext>, 요청 검증)
//!   │
//!   ├─ AuthService ── PasswordService, TokenService, Mailer
//!   ├─ UserService
//!   │     └─ UserStore ── MongoUserRepository | InMemoryUserRepository
//!   └─ PokedexService ── PokeApi (reqwest)
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pokedex_backend::config::Settings;
//! use pokedex_backend::core::AppContext;
//! use pokedex_backend::repositories::users::InMemoryUserRepository;
//! use pokedex_backend::services::mail::LogMailer;
//! use pokedex_backend::services::pokedex::HttpPokeApi;
//!
//! let context = AppContext::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(LogMailer::new()),
//!     Arc::new(HttpPokeApi::new(10)?),
//!     Settings::from_env(),
//! );
//! let tokens = context.auth_service.register(request).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
