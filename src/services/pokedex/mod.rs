//! 포켓몬 카탈로그 서비스 모듈
//!
//! PokeAPI(`https://pokeapi.co/api/v2/pokemon`)를 프록시해 카드 목록을 만듭니다.

pub mod poke_api;
pub mod pokedex_service;

pub use poke_api::{HttpPokeApi, PokeApi};
pub use pokedex_service::PokedexService;
