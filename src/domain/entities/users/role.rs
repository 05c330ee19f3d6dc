//! 사용자 역할 정의

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 사용자 역할
///
/// 문자열 태그로 저장/직렬화되며, 권한 검사는 `Admin` 포함 여부로만 판단합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RoleOption {
    #[serde(rename = "Admin")]
    Admin,
    #[serde(rename = "Pokemon Master")]
    PokemonMaster,
    #[serde(rename = "Elite Four")]
    EliteFour,
    #[serde(rename = "Pokemon Trainer")]
    PokemonTrainer,
}

impl RoleOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleOption::Admin => "Admin",
            RoleOption::PokemonMaster => "Pokemon Master",
            RoleOption::EliteFour => "Elite Four",
            RoleOption::PokemonTrainer => "Pokemon Trainer",
        }
    }

    /// 신규 가입자의 기본 역할
    pub fn default_roles() -> Vec<RoleOption> {
        vec![RoleOption::PokemonTrainer]
    }
}

/// 역할 목록에 `Admin`이 포함되어 있는지 확인합니다.
pub fn is_admin(roles: &[RoleOption]) -> bool {
    roles.contains(&RoleOption::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin_with_admin_role() {
        assert!(is_admin(&[RoleOption::Admin, RoleOption::PokemonMaster]));
    }

    #[test]
    fn test_is_admin_without_admin_role() {
        assert!(!is_admin(&[RoleOption::EliteFour, RoleOption::PokemonTrainer]));
    }

    #[test]
    fn test_is_admin_with_empty_roles() {
        assert!(!is_admin(&[]));
    }

    #[test]
    fn test_role_serialization_uses_display_names() {
        let json = serde_json::to_string(&RoleOption::PokemonTrainer).unwrap();
        assert_eq!(json, "\"Pokemon Trainer\"");

        let role: RoleOption = serde_json::from_str("\"Elite Four\"").unwrap();
        assert_eq!(role, RoleOption::EliteFour);
        assert_eq!(role.as_str(), "Elite Four");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(serde_json::from_str::<RoleOption>("\"Gym Leader\"").is_err());
    }
}
