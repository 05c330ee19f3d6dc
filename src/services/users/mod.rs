//! 사용자 관리 서비스 모듈
//!
//! 관리자 또는 본인만 사용자 리소스에 접근할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use pokedex_backend::services::users::UserService;
//!
//! let user_service = UserService::new(store.clone());
//! let users = user_service.list_users(&admin).await?;
//! ```

pub mod user_service;

pub use user_service::{parse_user_id, UserService};
