//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 핵심 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장되는 엔티티)
//! ├── models/       ← 토큰 클레임, 인증 사용자, 외부 API 모델
//! └── dto/          ← HTTP 요청/응답 구조체
//! ```

pub mod users;
