//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더에서 액세스 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장 ([`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser))
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use pokedex_backend::middlewares::AuthMiddleware;
//!
//! cfg.service(
//!     web::scope("/api/v1/users")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::users::get_users)
//! );
//! ```

mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
