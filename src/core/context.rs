//! 애플리케이션 컨텍스트
//!
//! 서버 시작 시 한 번 조립되어 `web::Data<AppContext>`로 모든 워커에 공유됩니다.
//! 핸들러와 미들웨어는 여기서 필요한 서비스를 꺼내 씁니다.
//!
//! ```rust,ignore
//! let context = AppContext::new(store, mailer, poke_api, Settings::from_env());
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::new(context.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

use std::sync::Arc;
use crate::config::Settings;
use crate::repositories::users::UserStore;
use crate::services::auth::{AuthService, PasswordService, TokenService};
use crate::services::mail::Mailer;
use crate::services::pokedex::{PokeApi, PokedexService};
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppContext {
    pub tokens: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub pokedex: Arc<PokedexService>,
}

impl AppContext {
    /// 저장소, 메일 발송기, PokeAPI 클라이언트와 설정으로 서비스들을 조립합니다.
    pub fn new(
        users: Arc<dyn UserStore>,
        mailer: Arc<dyn Mailer>,
        poke_api: Arc<dyn PokeApi>,
        settings: Settings,
    ) -> Self {
        let Settings {
            jwt,
            bcrypt_cost,
            mail,
            poke_api: poke_api_settings,
        } = settings;

        let tokens = Arc::new(TokenService::new(jwt));
        let auth_service = Arc::new(AuthService::new(
            users.clone(),
            PasswordService::new(bcrypt_cost),
            tokens.clone(),
            mailer,
            mail,
        ));
        let user_service = Arc::new(UserService::new(users));
        let pokedex = Arc::new(PokedexService::new(poke_api, poke_api_settings.base_url));

        Self {
            tokens,
            auth_service,
            user_service,
            pokedex,
        }
    }

    /// 시작 요약에 표시할 구성 요소 이름
    pub fn component_names() -> [&'static str; 5] {
        [
            "UserStore",
            "TokenService",
            "AuthService",
            "UserService",
            "PokedexService",
        ]
    }
}
