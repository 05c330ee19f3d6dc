//! 도메인 계층
//!
//! 엔티티, 도메인 모델, HTTP DTO를 정의합니다.

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::*;
pub use entities::users::{is_admin, RoleOption, User};
pub use models::{auth, token};
