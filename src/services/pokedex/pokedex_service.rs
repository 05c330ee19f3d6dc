//! 포켓몬 카탈로그 서비스
//!
//! 목록 한 페이지를 가져온 뒤 각 항목의 상세 정보를 동시에 조회해 카드로 합칩니다.
//! 상세 조회가 실패한 항목도 결과에서 빠지지 않고, 타입과 이미지 없이 남습니다.

use std::sync::Arc;
use futures_util::future::join_all;
use log::{debug, warn};
use crate::domain::dto::{CatalogPage, PokemonCard, PokemonQuery};
use crate::errors::AppError;
use super::poke_api::PokeApi;

pub struct PokedexService {
    api: Arc<dyn PokeApi>,
    base_url: String,
}

impl PokedexService {
    pub fn new(api: Arc<dyn PokeApi>, base_url: impl Into<String>) -> Self {
        Self {
            api,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// 카탈로그 한 페이지 조회
    ///
    /// - `cursor`가 없으면 첫 페이지 (`limit`이 있으면 페이지 크기로 사용)
    /// - `cursor`는 이전 응답의 `next`여야 하며, PokeAPI 주소가 아니면 400
    /// - `search`가 있으면 이름에 포함된 항목만 (대소문자 무시)
    pub async fn browse(&self, query: &PokemonQuery) -> Result<CatalogPage, AppError> {
        let url = self.page_url(query)?;
        debug!("PokeAPI 목록 조회: {}", url);

        let page = self.api.fetch_page(&url).await?;
        let details = join_all(
            page.results
                .iter()
                .map(|entry| self.api.fetch_detail(&entry.url)),
        )
        .await;

        let search = query.search.as_deref().map(str::to_lowercase);
        let results: Vec<PokemonCard> = page
            .results
            .into_iter()
            .zip(details)
            .map(|(entry, detail)| match detail {
                Ok(detail) => entry.into_card_with(&detail),
                Err(e) => {
                    warn!("⚠️ 포켓몬 상세 조회 실패 ({}): {}", entry.name, e);
                    entry.into_card()
                }
            })
            .filter(|card| match &search {
                Some(search) => card.name.to_lowercase().contains(search.as_str()),
                None => true,
            })
            .collect();

        Ok(CatalogPage {
            has_more: page.next.is_some(),
            next: page.next,
            results,
        })
    }

    fn page_url(&self, query: &PokemonQuery) -> Result<String, AppError> {
        match &query.cursor {
            Some(cursor) => {
                let rest = cursor.strip_prefix(&self.base_url).ok_or_else(|| self.invalid_cursor())?;
                if rest.is_empty() || rest.starts_with('?') || rest.starts_with('/') {
                    Ok(cursor.clone())
                } else {
                    Err(self.invalid_cursor())
                }
            }
            None => Ok(match query.limit {
                Some(limit) => format!("{}?limit={}", self.base_url, limit),
                None => self.base_url.clone(),
            }),
        }
    }

    fn invalid_cursor(&self) -> AppError {
        AppError::ValidationError(format!(
            "querystring/cursor must start with {}",
            self.base_url
        ))
    }
}
