//! 사용자 도메인 엔티티
//!
//! - [`user::User`] - `users` 컬렉션 문서
//! - [`role::RoleOption`] - 역할 태그와 관리자 판별

pub mod role;
pub mod user;

pub use role::{is_admin, RoleOption};
pub use user::User;
