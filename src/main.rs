//! 포켓몬 도감 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 사용자 저장소(MongoDB 또는 메모리), 메일 발송기, PokeAPI 클라이언트를 조립해
//! JWT 인증 기반의 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use pokedex_backend::config::{
    DatabaseConfig, MailConfig, MailProvider, RateLimitConfig, SeedConfig, ServerConfig,
    Settings, StorageBackend,
};
use pokedex_backend::core::AppContext;
use pokedex_backend::db::Database;
use pokedex_backend::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserStore};
use pokedex_backend::routes::configure_all_routes;
use pokedex_backend::services::mail::{LogMailer, Mailer, SendGridMailer};
use pokedex_backend::services::pokedex::HttpPokeApi;
use pokedex_backend::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("Pokedex Backend Starting");
    info!("🚀 포켓몬 도감 백엔드 시작중...");

    print_step_start(1, "Connecting user store");
    let (users, storage) = initialize_user_store().await?;
    print_step_complete(1, "User store ready");

    print_step_start(2, "Building services");
    let settings = Settings::from_env();
    let (mailer, mailer_name) = initialize_mailer();
    let poke_api = HttpPokeApi::new(settings.poke_api.timeout_secs).map_err(io::Error::other)?;
    let poke_api_base = settings.poke_api.base_url.clone();
    let context = AppContext::new(users, mailer, Arc::new(poke_api), settings);
    print_sub_task("Mailer", mailer_name);
    print_step_complete(2, "Services ready");

    print_step_start(3, "Seeding admin account");
    seed_admin(&context).await?;
    print_step_complete(3, "Seed finished");

    print_final_summary(
        &[
            ("Storage", storage.to_string()),
            ("Mailer", mailer_name.to_string()),
            ("PokeAPI", poke_api_base),
        ],
        &AppContext::component_names(),
    );
    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(context).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(context: AppContext) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // 마지막에 등록한 미들웨어가 요청을 가장 먼저 받습니다
            // (Governor → CORS → Logger → NormalizePath)
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .wrap(configure_cors())
            .wrap(Governor::new(&governor_conf))
            .app_data(web::Data::new(context.clone()))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이라 결과는 표준 출력으로 남깁니다
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => println!("Current profile: {} ({} 파일 로드 됨)", profile, file),
        Err(e) => println!("Current profile: {} (설정 파일 로드 실패: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 사용자 저장소를 초기화합니다
///
/// `STORAGE_BACKEND=memory`이면 메모리 저장소를, 그 외에는 MongoDB를 사용합니다.
/// 어느 쪽이든 `init()`으로 인덱스(또는 빈 저장소)를 준비한 뒤 반환합니다.
async fn initialize_user_store() -> io::Result<(Arc<dyn UserStore>, &'static str)> {
    let backend = DatabaseConfig::backend();
    let store: Arc<dyn UserStore> = match backend {
        StorageBackend::Memory => {
            warn!("⚠️ 메모리 저장소를 사용합니다. 서버를 재시작하면 데이터가 사라집니다");
            Arc::new(InMemoryUserRepository::new())
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::new().await.map_err(|e| {
                error!("❌ MongoDB 연결 실패: {}", e);
                io::Error::other(e.to_string())
            })?;
            Arc::new(MongoUserRepository::new(&database))
        }
    };

    store.init().await.map_err(|e| {
        error!("❌ 사용자 저장소 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let name = match backend {
        StorageBackend::Memory => "memory",
        StorageBackend::MongoDb => "mongodb",
    };
    print_sub_task("UserStore", name);

    Ok((store, name))
}

/// 메일 발송기를 선택합니다
///
/// `MAIL_PROVIDER=sendgrid`이고 API 키가 있을 때만 SendGrid를 사용하고,
/// 그 외에는 메일 내용을 로그로만 남깁니다.
fn initialize_mailer() -> (Arc<dyn Mailer>, &'static str) {
    match (MailConfig::provider(), MailConfig::sendgrid_api_key()) {
        (MailProvider::SendGrid, Some(api_key)) => {
            let mailer: Arc<dyn Mailer> =
                Arc::new(SendGridMailer::new(MailConfig::sendgrid_api_url(), api_key));
            (mailer, "sendgrid")
        }
        (MailProvider::SendGrid, None) => {
            warn!("⚠️ SENDGRID_API_KEY가 없어 로그 메일러를 사용합니다");
            (Arc::new(LogMailer::new()) as Arc<dyn Mailer>, "log")
        }
        (MailProvider::Log, _) => (Arc::new(LogMailer::new()) as Arc<dyn Mailer>, "log"),
    }
}

/// 설정된 경우 초기 관리자 계정을 생성합니다
async fn seed_admin(context: &AppContext) -> io::Result<()> {
    let Some((email, password)) = SeedConfig::admin_credentials() else {
        print_sub_task("Admin", "skipped");
        return Ok(());
    };

    let created = context
        .auth_service
        .ensure_seed_admin(&email, &password)
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;

    print_sub_task("Admin", if created { "created" } else { "exists" });
    Ok(())
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드 개발 서버(로컬호스트)와의 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
