//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 구성 요소를 제공합니다.
//!
//! - [`context`] - 서비스 조립과 공유 ([`AppContext`])

pub mod context;

pub use context::AppContext;
