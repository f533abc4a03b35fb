pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::matching;
pub use modules::profile;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::use_cases::{
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    login_client::{ILoginClientUseCase, LoginClientUseCase},
};
use crate::matching::application::use_cases::{
    count_matches::{CountMatchesUseCase, ICountMatchesUseCase, MATCH_COUNT_TTL},
    find_matches::{FindMatchesUseCase, IFindMatchesUseCase},
};
use crate::profile::adapter::outgoing::{
    FailoverProfileRepo, GcsPhotoHost, InMemoryProfileRepo, ProfileRepoPostgres,
};
use crate::profile::application::use_cases::{
    create_profile::{CreateProfileUseCase, ICreateProfileUseCase},
    delete_profile::{DeleteProfileUseCase, IDeleteProfileUseCase},
    fetch_profile_by_id::{FetchProfileByIdUseCase, IFetchProfileByIdUseCase},
    fetch_profiles::{FetchProfilesUseCase, IFetchProfilesUseCase},
    share_profile::{IShareProfileUseCase, ShareProfileUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};

use actix_web::{web, App, HttpServer};

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
    pub create_profile_use_case: Arc<dyn ICreateProfileUseCase + Send + Sync>,
    pub fetch_profiles_use_case: Arc<dyn IFetchProfilesUseCase + Send + Sync>,
    pub fetch_profile_by_id_use_case: Arc<dyn IFetchProfileByIdUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub delete_profile_use_case: Arc<dyn IDeleteProfileUseCase + Send + Sync>,
    pub share_profile_use_case: Arc<dyn IShareProfileUseCase + Send + Sync>,
    pub find_matches_use_case: Arc<dyn IFindMatchesUseCase + Send + Sync>,
    pub count_matches_use_case: Arc<dyn ICountMatchesUseCase + Send + Sync>,
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub login_client_use_case: Arc<dyn ILoginClientUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::auth::adapter::outgoing::account_repo_postgres::AccountRepoPostgres;
    use crate::auth::adapter::outgoing::security::Argon2Hasher;
    use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
    use crate::auth::application::use_cases::bootstrap_admin::BootstrapAdminUseCase;
    use crate::matching::application::match_count_cache::TtlCache;
    use crate::profile::application::ports::outgoing::PhotoHost;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
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

    let db_arc = Arc::new(conn);

    // Profile store: Postgres primary mirrored into an in-memory fallback
    let profile_store = FailoverProfileRepo::new(
        ProfileRepoPostgres::new(Arc::clone(&db_arc)),
        InMemoryProfileRepo::new(),
    );

    let photo_host: Arc<dyn PhotoHost> = Arc::new(GcsPhotoHost::new());

    let create_profile_use_case =
        CreateProfileUseCase::new(profile_store.clone(), Arc::clone(&photo_host));
    let fetch_profiles_use_case = FetchProfilesUseCase::new(profile_store.clone());
    let fetch_profile_by_id_use_case = FetchProfileByIdUseCase::new(profile_store.clone());
    let update_profile_use_case = UpdateProfileUseCase::new(profile_store.clone());
    let delete_profile_use_case =
        DeleteProfileUseCase::new(profile_store.clone(), Arc::clone(&photo_host));
    let share_profile_use_case = ShareProfileUseCase::new(profile_store.clone());

    let find_matches_use_case = FindMatchesUseCase::new(profile_store.clone());
    let count_matches_use_case = CountMatchesUseCase::new(
        profile_store.clone(),
        Arc::new(TtlCache::new(MATCH_COUNT_TTL)),
    );

    // Auth components
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider> = Arc::new(jwt_service);
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());
    let account_repo = AccountRepoPostgres::new(Arc::clone(&db_arc));

    // Seed the default admin on first boot
    let bootstrap = BootstrapAdminUseCase::new(account_repo.clone(), Arc::clone(&hasher));
    match bootstrap.execute().await {
        Ok(true) => info!("Default admin account created"),
        Ok(false) => {}
        Err(e) => tracing::error!(error = %e, "Admin bootstrap failed"),
    }

    let login_admin_use_case = LoginAdminUseCase::new(
        account_repo.clone(),
        Arc::clone(&hasher),
        Arc::clone(&token_provider_arc),
    );
    let login_client_use_case = LoginClientUseCase::new(
        account_repo,
        Arc::clone(&hasher),
        Arc::clone(&token_provider_arc),
    );

    let state = AppState {
        create_profile_use_case: Arc::new(create_profile_use_case),
        fetch_profiles_use_case: Arc::new(fetch_profiles_use_case),
        fetch_profile_by_id_use_case: Arc::new(fetch_profile_by_id_use_case),
        update_profile_use_case: Arc::new(update_profile_use_case),
        delete_profile_use_case: Arc::new(delete_profile_use_case),
        share_profile_use_case: Arc::new(share_profile_use_case),
        find_matches_use_case: Arc::new(find_matches_use_case),
        count_matches_use_case: Arc::new(count_matches_use_case),
        login_admin_use_case: Arc::new(login_admin_use_case),
        login_client_use_case: Arc::new(login_client_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::json_config::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profiles
    cfg.service(crate::profile::adapter::incoming::web::routes::create_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profiles_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_single_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::delete_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::share_profile_handler);
    // Matching
    cfg.service(crate::matching::adapter::incoming::web::routes::get_matches_handler);
    cfg.service(crate::matching::adapter::incoming::web::routes::get_match_counts_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::client_login_handler);
    // API docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
