//! 포켓몬 카탈로그 DTO

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 카탈로그 조회 쿼리 (`GET /api/v1/pokemons`)
///
/// - `cursor`: 이전 응답의 `next` 값. 없으면 첫 페이지
/// - `search`: 이름 부분 일치 필터 (대소문자 무시)
/// - `limit`: 첫 페이지 크기
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PokemonQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub cursor: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub search: Option<String>,

    #[param(minimum = 1, maximum = 100)]
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<u32>,
}

/// 화면에 표시할 포켓몬 카드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PokemonCard {
    pub name: String,
    pub url: String,
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
}

/// 카탈로그 한 페이지
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub results: Vec<PokemonCard>,
    pub next: Option<String>,
    pub has_more: bool,
}
