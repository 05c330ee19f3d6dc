//! HTTP 요청 DTO

pub mod auth_request;
pub mod update_user_request;

pub use auth_request::{
    EmailResetPasswordRequest, LoginRequest, RefreshTokenRequest, RegisterRequest,
    ResetPasswordQuery, ResetPasswordRequest,
};
pub use update_user_request::UpdateUserRequest;
