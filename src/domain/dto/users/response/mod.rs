//! HTTP 응답 DTO

pub mod auth_response;
pub mod user_response;

pub use auth_response::{AuthTokenResponse, MessageResponse};
pub use user_response::UserResponse;
