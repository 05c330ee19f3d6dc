//! 포켓몬 카탈로그 핸들러

use actix_web::{get, web, HttpResponse};
use crate::core::AppContext;
use crate::domain::dto::{CatalogPage, PokemonQuery, ValidateRequest};
use crate::errors::{AppError, ErrorResponse};

/// 카탈로그 한 페이지 조회
///
/// # Endpoint
/// `GET /pokemons?cursor={next}&search={name}&limit={n}`
///
/// ```json
/// {
///   "results": [{ "name": "bulbasaur", "url": "...", "types": ["grass", "poison"], "sprite": "..." }],
///   "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
///   "hasMore": true
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/pokemons",
    tag = "pokemons",
    params(PokemonQuery),
    responses(
        (status = 200, description = "카탈로그 한 페이지", body = CatalogPage),
        (status = 400, description = "잘못된 cursor 또는 limit", body = ErrorResponse),
        (status = 502, description = "PokeAPI 목록 조회 실패", body = ErrorResponse)
    )
)]
#[get("")]
pub async fn list_pokemons(
    context: web::Data<AppContext>,
    query: web::Query<PokemonQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate_request("querystring")?;

    let page = context.pokedex.browse(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}
