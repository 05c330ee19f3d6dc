//! OpenAPI 문서와 Swagger UI
//!
//! `/documentation`에서 Swagger UI를, `/documentation/openapi.json`에서 문서 원본을 제공합니다.

use actix_web::{get, http::header, HttpResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;
use crate::domain::dto::{
    AuthTokenResponse, CatalogPage, EmailResetPasswordRequest, LoginRequest, MessageResponse,
    PokemonCard, RefreshTokenRequest, RegisterRequest, ResetPasswordRequest, UpdateUserRequest,
    UserResponse,
};
use crate::domain::entities::users::RoleOption;
use crate::errors::{DuplicateField, ErrorDetail, ErrorResponse};
use crate::handlers;
use super::HealthResponse;

pub const DOCS_PATH: &str = "/documentation";
pub const OPENAPI_JSON_PATH: &str = "/documentation/openapi.json";

/// `Authorization: Bearer <token>` 보안 스킴 등록
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "Bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("POST /api/v1/auth/login 으로 받은 accessToken"))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::root,
        super::health_check,
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::refresh_token,
        handlers::auth::email_reset_password,
        handlers::auth::reset_password,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::users::update_user,
        handlers::users::delete_user,
        handlers::pokemons::list_pokemons,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            RefreshTokenRequest,
            EmailResetPasswordRequest,
            ResetPasswordRequest,
            UpdateUserRequest,
            AuthTokenResponse,
            MessageResponse,
            UserResponse,
            RoleOption,
            PokemonCard,
            CatalogPage,
            HealthResponse,
            ErrorResponse,
            ErrorDetail,
            DuplicateField,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication related end-points"),
        (name = "users", description = "사용자 조회/수정/삭제. Admin 또는 본인만 접근할 수 있습니다."),
        (name = "pokemons", description = "PokeAPI 카탈로그 조회"),
        (name = "health", description = "서버 상태 확인"),
    ),
    info(
        title = "Pokedex Backend API",
        description = "포켓몬 트레이너 인증, 사용자 관리, 포켓몬 카탈로그 API"
    )
)]
pub struct ApiDoc;

/// Swagger UI 서비스 (`/documentation/{_:.*}`)
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(format!("{}/{{_:.*}}", DOCS_PATH)).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}

/// 꼬리 슬래시 없이 들어온 요청을 Swagger UI 첫 화면으로 보냅니다.
#[get("/documentation")]
pub async fn documentation_index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, format!("{}/index.html", DOCS_PATH)))
        .finish()
}
