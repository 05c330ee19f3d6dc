//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 파싱과 검증만 담당하고, 실제 로직은 [`AppContext`]의 서비스에 위임합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입, 로그인, 토큰 갱신, 비밀번호 재설정
//! - **`users`**: 사용자 조회/수정/삭제 (Bearer 인증 필요)
//! - **`pokemons`**: 포켓몬 카탈로그 조회
//!
//! ## 입력 오류 처리
//!
//! JSON 바디나 쿼리스트링을 역직렬화하지 못하면 actix 기본 응답 대신
//! `AppError::ValidationError`로 변환해 다른 에러와 같은 형식으로 응답합니다.
//!
//! ```json
//! { "error": { "message": "body missing field `lastName` at line 1 column 70" } }
//! ```
//!
//! [`AppContext`]: crate::core::AppContext

pub mod auth;
pub mod pokemons;
pub mod users;

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest};
use crate::errors::AppError;

/// JSON 바디 파싱 에러를 400 응답으로 변환하는 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// 쿼리스트링 파싱 에러를 400 응답으로 변환하는 설정
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::Deserialize(e) => format!("body {}", e),
        JsonPayloadError::ContentType => "body must be application/json".to_string(),
        other => format!("body {}", other),
    };
    AppError::ValidationError(message).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        QueryPayloadError::Deserialize(e) => format!("querystring {}", e),
        other => format!("querystring {}", other),
    };
    AppError::ValidationError(message).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use actix_web::ResponseError;

    #[test]
    fn test_json_deserialize_error_becomes_bad_request() {
        let source = serde_json::from_str::<crate::domain::dto::LoginRequest>(r#"{"username":"ash"}"#)
            .unwrap_err();
        let req = TestRequest::default().to_http_request();

        let error = json_error_handler(JsonPayloadError::Deserialize(source), &req);
        let response = error.as_response_error();

        assert_eq!(response.status_code(), actix_web::http::StatusCode::BAD_REQUEST);
        assert!(error.to_string().contains("password"));
    }
}
