//! 에러 타입 모듈

pub mod errors;

pub use errors::{
    AppError, AppResult, DuplicateField, ErrorContext, ErrorDetail, ErrorResponse,
    DUPLICATE_FIELDS_MESSAGE, INTERNAL_ERROR_MESSAGE,
};
