pub mod modules;
pub use modules::auth;
pub use modules::destination;
pub use modules::recommendor;
pub use modules::region;
pub use modules::upload;
pub use modules::wechat;
pub mod health;
mod seed;
pub mod shared;

use crate::auth::adapter::outgoing::admin_repository_postgres::AdminRepositoryPostgres;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::bcrypt_hasher::BcryptHasher;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::{
    change_password_service::ChangePasswordService, current_admin_service::CurrentAdminService,
    login_service::LoginService, refresh_token_service::RefreshTokenService,
};

use crate::region::adapter::outgoing::region_repository_postgres::RegionRepositoryPostgres;
use crate::region::application::region_use_cases::RegionUseCases;
use crate::region::application::services::region_service::RegionService;

use crate::recommendor::adapter::outgoing::recommendor_repository_postgres::RecommendorRepositoryPostgres;
use crate::recommendor::application::recommendor_use_cases::RecommendorUseCases;
use crate::recommendor::application::services::recommendor_service::RecommendorService;

use crate::destination::adapter::outgoing::destination_repository_postgres::DestinationRepositoryPostgres;
use crate::destination::application::destination_use_cases::DestinationUseCases;
use crate::destination::application::services::destination_service::DestinationService;

use crate::upload::adapter::outgoing::local_file_storage::LocalFileStorage;
use crate::upload::application::ports::incoming::use_cases::UploadFileUseCase;
use crate::upload::application::services::upload_service::UploadService;

use crate::wechat::adapter::outgoing::wechat_http_client::WechatHttpClient;
use crate::wechat::application::ports::outgoing::clock::SystemClock;
use crate::wechat::application::ports::outgoing::wechat_api::WechatApi;
use crate::wechat::application::services::{QrCodeService, WechatTokenCache};
use crate::wechat::config::WechatConfig;

use actix_cors::Cors;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub regions: RegionUseCases,
    pub recommendors: RecommendorUseCases,
    pub destinations: DestinationUseCases,
    pub uploads: Arc<dyn UploadFileUseCase>,
}

fn database_url() -> String {
    if let Ok(url) = env::var("DATABASE_URL") {
        return url;
    }

    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
    let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
    let password = env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string());
    let name = env::var("DB_NAME").unwrap_or_else(|_| "tourism".to_string());

    format!("postgres://{user}:{password}@{host}:{port}/{name}")
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    info!("Starting application...");

    // Database connection
    let mut opt = ConnectOptions::new(database_url());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&conn, None)
        .await
        .expect("Failed to run database migrations");

    seed::seed_default_admin(&conn)
        .await
        .expect("Failed to seed default admin account");

    let db_arc = Arc::new(conn);

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let tokens: Arc<dyn TokenProvider> = Arc::new(jwt_service.clone());
    let hasher = Arc::new(BcryptHasher);
    let admin_repo = Arc::new(AdminRepositoryPostgres::new(Arc::clone(&db_arc)));

    let auth = AuthUseCases {
        login: Arc::new(LoginService::new(
            admin_repo.clone(),
            hasher.clone(),
            tokens.clone(),
        )),
        refresh_token: Arc::new(RefreshTokenService::new(admin_repo.clone(), tokens.clone())),
        current_admin: Arc::new(CurrentAdminService::new(admin_repo.clone())),
        change_password: Arc::new(ChangePasswordService::new(admin_repo, hasher)),
    };

    // Regions
    let region_repo = Arc::new(RegionRepositoryPostgres::new(Arc::clone(&db_arc)));
    let region_service = Arc::new(RegionService::new(region_repo));
    let regions = RegionUseCases {
        create: region_service.clone(),
        list: region_service.clone(),
        get: region_service.clone(),
        update: region_service.clone(),
        delete: region_service,
    };

    // QR codes via the WeChat platform, with a local fallback
    let wechat_config = WechatConfig::from_env();
    let wechat_api: Arc<dyn WechatApi> = Arc::new(WechatHttpClient::new());
    let token_cache = wechat_config.app_secret.clone().map(|secret| {
        Arc::new(WechatTokenCache::new(
            wechat_api.clone(),
            Arc::new(SystemClock),
            wechat_config.app_id.clone(),
            secret,
        ))
    });
    let qr_service = Arc::new(QrCodeService::new(
        wechat_config,
        wechat_api,
        token_cache,
    ));

    // Recommendors
    let recommendor_repo = Arc::new(RecommendorRepositoryPostgres::new(Arc::clone(&db_arc)));
    let recommendor_service = Arc::new(RecommendorService::new(recommendor_repo, qr_service));
    let recommendors = RecommendorUseCases {
        create: recommendor_service.clone(),
        list: recommendor_service.clone(),
        get: recommendor_service.clone(),
        update: recommendor_service.clone(),
        delete: recommendor_service.clone(),
        regenerate_qr: recommendor_service,
    };

    // Destinations
    let destination_repo = Arc::new(DestinationRepositoryPostgres::new(Arc::clone(&db_arc)));
    let destination_service = Arc::new(DestinationService::new(destination_repo));
    let destinations = DestinationUseCases {
        create: destination_service.clone(),
        list: destination_service.clone(),
        get: destination_service.clone(),
        update: destination_service.clone(),
        delete: destination_service.clone(),
        list_by_recommendor: destination_service,
    };

    // Uploads
    let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());
    std::fs::create_dir_all(&upload_dir)?;
    let uploads: Arc<dyn UploadFileUseCase> = Arc::new(UploadService::new(Arc::new(
        LocalFileStorage::new(upload_dir.clone()),
    )));

    let state = AppState {
        auth,
        regions,
        recommendors,
        destinations,
        uploads,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    let port = env::var("SERVER_PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("0.0.0.0:{port}");
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::json_config::custom_json_config())
            .wrap(Cors::permissive())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-XSS-Protection", "1; mode=block")),
            )
            .wrap(Logger::default())
            .configure(init_routes)
            .service(actix_files::Files::new("/uploads", upload_dir.clone()))
            .service(actix_files::Files::new("/static", "./static"))
            .default_service(web::to(spa_fallback))
    })
    .bind(server_url)?
    .run()
    .await
}

// Unmatched non-API paths get the single-page frontend.
async fn spa_fallback(req: HttpRequest) -> actix_web::Result<HttpResponse> {
    if req.path().starts_with("/api") {
        return Ok(crate::shared::api::ApiResponse::not_found(
            "NOT_FOUND",
            "Route not found",
        ));
    }
    let index = actix_files::NamedFile::open("./static/index.html")?;
    Ok(index.into_response(&req))
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Older clients still call the unversioned prefix.
    cfg.service(web::scope("/api/v1").configure(api_routes));
    cfg.service(web::scope("/api").configure(api_routes));
}

fn api_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_password_handler);
    // Uploads
    cfg.service(crate::upload::adapter::incoming::web::routes::upload_avatar_handler);
    cfg.service(crate::upload::adapter::incoming::web::routes::upload_image_handler);
    cfg.service(crate::upload::adapter::incoming::web::routes::upload_document_handler);
    // Regions
    cfg.service(crate::region::adapter::incoming::web::routes::create_region_handler);
    cfg.service(crate::region::adapter::incoming::web::routes::list_regions_handler);
    cfg.service(crate::region::adapter::incoming::web::routes::get_region_handler);
    cfg.service(crate::region::adapter::incoming::web::routes::update_region_handler);
    cfg.service(crate::region::adapter::incoming::web::routes::delete_region_handler);
    // Recommendors
    cfg.service(crate::recommendor::adapter::incoming::web::routes::create_recommendor_handler);
    cfg.service(
        crate::recommendor::adapter::incoming::web::routes::admin_list_recommendors_handler,
    );
    cfg.service(crate::recommendor::adapter::incoming::web::routes::admin_get_recommendor_handler);
    cfg.service(crate::recommendor::adapter::incoming::web::routes::update_recommendor_handler);
    cfg.service(crate::recommendor::adapter::incoming::web::routes::delete_recommendor_handler);
    cfg.service(crate::recommendor::adapter::incoming::web::routes::regenerate_qrcodes_handler);
    cfg.service(crate::recommendor::adapter::incoming::web::routes::list_recommendors_handler);
    cfg.service(crate::recommendor::adapter::incoming::web::routes::get_recommendor_handler);
    // Destinations
    cfg.service(crate::destination::adapter::incoming::web::routes::create_destination_handler);
    cfg.service(
        crate::destination::adapter::incoming::web::routes::admin_list_destinations_handler,
    );
    cfg.service(crate::destination::adapter::incoming::web::routes::admin_get_destination_handler);
    cfg.service(crate::destination::adapter::incoming::web::routes::update_destination_handler);
    cfg.service(crate::destination::adapter::incoming::web::routes::delete_destination_handler);
    cfg.service(
        crate::destination::adapter::incoming::web::routes::admin_list_recommendor_destinations_handler,
    );
    cfg.service(crate::destination::adapter::incoming::web::routes::list_destinations_handler);
    cfg.service(crate::destination::adapter::incoming::web::routes::get_destination_handler);
    cfg.service(
        crate::destination::adapter::incoming::web::routes::list_recommendor_destinations_handler,
    );
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
