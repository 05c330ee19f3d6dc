//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 입력 문자열 정리와 serde 역직렬화 헬퍼
//! - [`display_terminal`] - 서버 시작 시 터미널 출력 포맷팅
//!
//! # Examples
//!
//! ```rust,ignore
//! use pokedex_backend::utils::string_utils::normalize_email;
//! use pokedex_backend::utils::display_terminal::print_boxed_title;
//!
//! let email = normalize_email("  Ash@Pallet.Town ");
//! print_boxed_title("System Initialized");
//! ```

pub mod display_terminal;
pub mod string_utils;
