//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 계층의 에러를
//! 하나의 타입으로 모으고, 일관된 JSON 에러 응답으로 변환합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": { "message": "Invalid credentials" } }
//! ```
//!
//! 중복 필드 에러는 어떤 필드가 충돌했는지 함께 내려줍니다.
//!
//! ```json
//! {
//!   "error": {
//!     "message": "Duplicate fields in database",
//!     "duplicateFields": [{ "field": "email", "value": "ash@pallet.town" }]
//!   }
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// 중복 필드 에러 메시지
pub const DUPLICATE_FIELDS_MESSAGE: &str = "Duplicate fields in database";

/// 내부 에러 대신 클라이언트에게 보여줄 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// 유니크 제약 조건을 위반한 필드와 값
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DuplicateField {
    pub field: String,
    pub value: String,
}

impl DuplicateField {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// 에러 응답 바디 (`{"error": {...}}`)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[schema(example = "Invalid credentials")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_fields: Option<Vec<DuplicateField>>,
}

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 유니크 제약 조건 위반 (409 Conflict)
    #[error("Duplicate fields: {0:?}")]
    DuplicateFields(Vec<DuplicateField>),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),

    /// 클라이언트에게 그대로 알리는 작업 실패 (500 Internal Server Error)
    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl AppError {
    /// 클라이언트에게 노출할 메시지
    ///
    /// 내부 에러(DB, 서버 내부)는 상세 내용을 숨기고 로그에만 남깁니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::ExternalServiceError(msg)
            | AppError::OperationFailed(msg) => msg.clone(),
            AppError::DuplicateFields(_) => DUPLICATE_FIELDS_MESSAGE.to_string(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateFields(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseError(_)
            | AppError::InternalError(_)
            | AppError::OperationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        } else {
            log::warn!("{}", self);
        }

        let duplicate_fields = match self {
            AppError::DuplicateFields(fields) => Some(fields.clone()),
            _ => None,
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: ErrorDetail {
                message: self.client_message(),
                duplicate_fields,
            },
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
