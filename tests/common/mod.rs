//! 라우트 테스트 공통 도구
//!
//! 메모리 저장소, 로그 메일러, 고정 응답 PokeAPI로 `AppContext`를 조립합니다.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use actix_web::test::TestRequest;
use serde_json::{json, Value};
use pokedex_backend::config::{JwtSettings, MailSettings, PokeApiSettings, Settings};
use pokedex_backend::core::AppContext;
use pokedex_backend::domain::models::pokemon::{PokemonDetail, PokemonPage};
use pokedex_backend::errors::AppError;
use pokedex_backend::repositories::users::InMemoryUserRepository;
use pokedex_backend::services::mail::LogMailer;
use pokedex_backend::services::pokedex::PokeApi;

pub const POKEAPI_BASE: &str = "https://pokeapi.co/api/v2/pokemon";
pub const ACCESS_SECRET: &str = "test-access-secret";
pub const ISSUER: &str = "pokedex-backend-test";
pub const ADMIN_EMAIL: &str = "admin@pokedex.dev";
pub const ADMIN_PASSWORD: &str = "masterball";

/// 테스트 앱 구성 요소
pub struct TestContext {
    pub context: AppContext,
    pub store: Arc<InMemoryUserRepository>,
    pub mailer: Arc<LogMailer>,
}

/// `actix_web::test::init_service`로 전체 라우트를 올립니다.
macro_rules! init_app {
    ($context:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($context.clone()))
                .configure(pokedex_backend::routes::configure_all_routes),
        )
        .await
    };
}
pub(crate) use init_app;

pub fn settings() -> Settings {
    Settings {
        jwt: JwtSettings {
            access_secret: ACCESS_SECRET.to_string(),
            refresh_secret: "test-refresh-secret".to_string(),
            reset_secret: "test-reset-secret".to_string(),
            issuer: ISSUER.to_string(),
            access_ttl_minutes: 30,
            refresh_ttl_days: 365,
            reset_ttl_minutes: 3,
        },
        bcrypt_cost: 4,
        mail: MailSettings {
            from: "no-reply@pokedex.dev".to_string(),
            public_base_url: "http://localhost:8080".to_string(),
        },
        poke_api: PokeApiSettings {
            base_url: POKEAPI_BASE.to_string(),
            timeout_secs: 5,
        },
    }
}

pub fn test_context() -> TestContext {
    test_context_with_mailer(LogMailer::new())
}

pub fn test_context_with_mailer(mailer: LogMailer) -> TestContext {
    let store = Arc::new(InMemoryUserRepository::new());
    let mailer = Arc::new(mailer);
    let context = AppContext::new(
        store.clone(),
        mailer.clone(),
        Arc::new(StaticPokeApi::kanto()),
        settings(),
    );

    TestContext {
        context,
        store,
        mailer,
    }
}

/// 관리자 계정을 만들고 액세스 토큰을 돌려줍니다.
pub async fn admin_token(context: &AppContext) -> String {
    context
        .auth_service
        .ensure_seed_admin(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    let tokens = context
        .auth_service
        .login(serde_json::from_value(json!({"username": ADMIN_EMAIL, "password": ADMIN_PASSWORD})).unwrap())
        .await
        .unwrap();
    tokens.access_token
}

pub fn trainer(username: &str, email: &str, first: &str, last: &str) -> Value {
    json!({
        "username": username,
        "email": email,
        "password": "pikachu1",
        "firstName": first,
        "lastName": last
    })
}

pub fn ash() -> Value {
    trainer("ash_ketchum", "ash@pallet.town", "Ash", "Ketchum")
}

pub fn misty() -> Value {
    trainer("misty_water", "misty@cerulean.city", "Misty", "Waterflower")
}

pub fn post_json(uri: &str, body: &Value) -> TestRequest {
    TestRequest::post().uri(uri).set_json(body)
}

pub fn bearer(request: TestRequest, token: &str) -> TestRequest {
    request.insert_header(("Authorization", format!("Bearer {}", token)))
}

/// 고정 응답을 돌려주는 PokeAPI
pub struct StaticPokeApi {
    pages: HashMap<String, PokemonPage>,
    details: HashMap<String, PokemonDetail>,
}

impl StaticPokeApi {
    /// 첫 페이지 3마리, 두 번째 페이지 1마리. `pikachu` 상세는 조회 실패
    pub fn kanto() -> Self {
        let first: PokemonPage = serde_json::from_value(json!({
            "count": 4,
            "next": format!("{POKEAPI_BASE}?offset=3&limit=3"),
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": format!("{POKEAPI_BASE}/1/")},
                {"name": "charmander", "url": format!("{POKEAPI_BASE}/4/")},
                {"name": "pikachu", "url": format!("{POKEAPI_BASE}/25/")}
            ]
        }))
        .unwrap();
        let second: PokemonPage = serde_json::from_value(json!({
            "count": 4,
            "next": null,
            "previous": POKEAPI_BASE,
            "results": [
                {"name": "mewtwo", "url": format!("{POKEAPI_BASE}/150/")}
            ]
        }))
        .unwrap();

        let detail = |id: u32, name: &str, types: Value| -> (String, PokemonDetail) {
            let detail = serde_json::from_value(json!({
                "id": id,
                "name": name,
                "types": types,
                "sprites": {
                    "front_default": format!("https://img/{name}.png"),
                    "other": {"official-artwork": {"front_default": format!("https://art/{name}.png")}}
                }
            }))
            .unwrap();
            (format!("{POKEAPI_BASE}/{id}/"), detail)
        };

        let mut pages = HashMap::new();
        pages.insert(POKEAPI_BASE.to_string(), first.clone());
        pages.insert(format!("{POKEAPI_BASE}?limit=3"), first);
        pages.insert(format!("{POKEAPI_BASE}?offset=3&limit=3"), second);

        let details = HashMap::from([
            detail(
                1,
                "bulbasaur",
                json!([
                    {"slot": 2, "type": {"name": "poison", "url": ""}},
                    {"slot": 1, "type": {"name": "grass", "url": ""}}
                ]),
            ),
            detail(4, "charmander", json!([{"slot": 1, "type": {"name": "fire", "url": ""}}])),
            detail(150, "mewtwo", json!([{"slot": 1, "type": {"name": "psychic", "url": ""}}])),
        ]);

        Self { pages, details }
    }
}

#[async_trait]
impl PokeApi for StaticPokeApi {
    async fn fetch_page(&self, url: &str) -> Result<PokemonPage, AppError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::ExternalServiceError(format!("no page for {url}")))
    }

    async fn fetch_detail(&self, url: &str) -> Result<PokemonDetail, AppError> {
        self.details
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::ExternalServiceError(format!("no detail for {url}")))
    }
}
