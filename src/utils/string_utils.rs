//! # 문자열 유틸리티
//!
//! 요청 DTO 역직렬화 시 사용하는 문자열 정리 함수들입니다.

use serde::Deserialize;

/// 앞뒤 공백을 제거하고, 빈 문자열은 `None`으로 바꿉니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 이메일 정규화: 공백 제거 후 소문자 변환
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// snake_case 필드명을 camelCase로 변환합니다.
///
/// 검증 에러 메시지를 JSON 필드명과 일치시키는 데 사용합니다.
pub fn to_camel_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut upper_next = false;

    for c in value.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

pub fn deserialize_email<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(normalize_email(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ash@Pallet.Town "), "ash@pallet.town");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_camel_case("refresh_token"), "refreshToken");
        assert_eq!(to_camel_case("email"), "email");
        assert_eq!(to_camel_case("lastName"), "lastName");
        assert_eq!(to_camel_case("_id"), "id");
    }

    #[test]
    fn test_deserialize_helpers() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            username: Option<String>,
            #[serde(deserialize_with = "deserialize_email")]
            email: String,
        }

        let payload: Payload =
            serde_json::from_str(r#"{"username": "  ", "email": " Brock@Pewter.City"}"#).unwrap();
        assert_eq!(payload.username, None);
        assert_eq!(payload.email, "brock@pewter.city");

        let payload: Payload = serde_json::from_str(r#"{"email": "a@b.co"}"#).unwrap();
        assert_eq!(payload.username, None);
    }
}
