//! PokeAPI 응답 모델
//!
//! 카탈로그 화면에 필요한 필드만 역직렬화합니다. 나머지 필드는 무시됩니다.

use serde::{Deserialize, Serialize};
use crate::domain::dto::pokemon::PokemonCard;

/// 이름 + 상세 URL 쌍
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// `GET /pokemon` 목록 페이지
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtworkSprite {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkSprite>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

impl Sprites {
    /// 공식 일러스트가 있으면 우선 사용하고, 없으면 기본 정면 스프라이트를 사용합니다.
    pub fn preferred(&self) -> Option<String> {
        self.other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|artwork| artwork.front_default.clone())
            .or_else(|| self.front_default.clone())
    }
}

/// `GET /pokemon/{id}` 상세
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonDetail {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl NamedResource {
    /// 상세 정보 없이 카드 생성 (상세 조회 실패 시)
    pub fn into_card(self) -> PokemonCard {
        PokemonCard {
            name: self.name,
            url: self.url,
            types: Vec::new(),
            sprite: None,
        }
    }

    /// 상세 정보와 합쳐 카드 생성
    pub fn into_card_with(self, detail: &PokemonDetail) -> PokemonCard {
        let mut slots: Vec<&PokemonTypeSlot> = detail.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);

        PokemonCard {
            name: self.name,
            url: self.url,
            types: slots.into_iter().map(|slot| slot.kind.name.clone()).collect(),
            sprite: detail.sprites.preferred(),
        }
    }
}
