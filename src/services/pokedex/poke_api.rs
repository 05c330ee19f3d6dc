//! PokeAPI 클라이언트

use std::time::Duration;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use crate::domain::models::pokemon::{PokemonDetail, PokemonPage};
use crate::errors::{AppError, ErrorContext};

/// 포켓몬 데이터 제공자
///
/// 두 메서드 모두 전체 URL을 받습니다. 목록 응답의 `next`와 각 항목의 `url`을
/// 그대로 넘기면 됩니다.
#[async_trait]
pub trait PokeApi: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<PokemonPage, AppError>;

    async fn fetch_detail(&self, url: &str) -> Result<PokemonDetail, AppError>;
}

/// reqwest 기반 PokeAPI 클라이언트
pub struct HttpPokeApi {
    client: reqwest::Client,
}

impl HttpPokeApi {
    pub fn new(timeout_secs: u64) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        Ok(Self { client })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("PokeAPI 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "PokeAPI responded with {} for {}",
                response.status(),
                url
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("PokeAPI 응답 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl PokeApi for HttpPokeApi {
    async fn fetch_page(&self, url: &str) -> Result<PokemonPage, AppError> {
        self.get_json(url).await
    }

    async fn fetch_detail(&self, url: &str) -> Result<PokemonDetail, AppError> {
        self.get_json(url).await
    }
}
