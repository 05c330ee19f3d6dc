//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`] 트레이트와 두 가지 구현을 제공합니다.
//!
//! - [`MongoUserRepository`]: 운영용 MongoDB 저장소
//! - [`InMemoryUserRepository`]: 개발/테스트용 인메모리 저장소
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pokedex_backend::repositories::users::{InMemoryUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let user = store.find_by_email("ash@pallet.town").await?;
//! ```

pub mod memory_user_repo;
pub mod mongo_user_repo;
pub mod user_repo;

pub use memory_user_repo::InMemoryUserRepository;
pub use mongo_user_repo::MongoUserRepository;
pub use user_repo::{duplicate_fields, ProfileUpdate, UserStore, FULL_NAME_FIELD};
