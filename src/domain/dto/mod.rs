//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 구조체를 정의합니다.
//!
//! 요청 DTO는 `validator`로 검증하며, [`ValidateRequest`]가 검증 실패를
//! 필드명이 포함된 `AppError::ValidationError`로 변환합니다.
//!
//! ```rust,ignore
//! payload.validate_request("body")?;
//! // => 400 { "error": { "message": "body/email must match format \"email\"" } }
//! ```

pub mod pokemon;
pub mod users;

pub use pokemon::*;
pub use users::*;

use validator::{Validate, ValidationErrors};
use crate::errors::AppError;
use crate::utils::string_utils::to_camel_case;

/// 검증 에러를 `"{location}/{field} {message}"` 형태의 메시지로 만듭니다.
///
/// 필드명은 JSON 필드명(camelCase)으로 바꾸고, 결과는 필드명 순으로 정렬합니다.
pub fn format_validation_errors(location: &str, errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let detail = field_errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("is invalid ({})", error.code))
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}/{} {}", location, to_camel_case(&field), detail)
        })
        .collect();

    messages.sort();
    messages.join("; ")
}

/// `validator` 검증 결과를 `AppError`로 변환하는 확장 trait
pub trait ValidateRequest: Validate {
    fn validate_request(&self, location: &str) -> Result<(), AppError> {
        self.validate()
            .map_err(|errors| AppError::ValidationError(format_validation_errors(location, &errors)))
    }
}

impl<T: Validate> ValidateRequest for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_uses_json_field_names() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"email":"testtest.com","password":"123","firstName":"test","lastName":"test"}"#,
        )
        .unwrap();

        let error = request.validate_request("body").unwrap_err();
        let AppError::ValidationError(message) = error else {
            panic!("expected ValidationError");
        };

        assert!(message.contains("body/email"));
        assert!(message.contains("body/password"));
        assert!(message.find("body/email") < message.find("body/password"));
    }

    #[test]
    fn test_pokemon_query_limit_range() {
        let query = PokemonQuery { limit: Some(0), ..Default::default() };
        let error = query.validate_request("querystring").unwrap_err();
        assert!(error.to_string().contains("querystring/limit"));
    }
}
