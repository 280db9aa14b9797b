pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::oauth;
pub use modules::topic;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::config::AppConfig;
use crate::oauth::adapter::outgoing::{FacebookGraphClient, OAuthUserRepositoryPostgres};
use crate::oauth::application::orchestrator::OAuthLoginOrchestrator;
use crate::oauth::application::ports::incoming::use_cases::OAuthLoginUseCase;
use crate::shared::api::custom_query_config;
use crate::topic::adapter::outgoing::TopicQueryPostgres;
use crate::topic::application::ports::incoming::use_cases::{GetATopicUseCase, GetTopicsUseCase};
use crate::topic::application::services::{GetATopicService, GetTopicsService};

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_topics_use_case: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub get_a_topic_use_case: Arc<dyn GetATopicUseCase + Send + Sync>,
    pub facebook_login_use_case: Arc<dyn OAuthLoginUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
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

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server.bind_address();
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let db_arc = Arc::new(conn);
    let query_timeout = config.database.query_timeout;

    // Topics
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc), query_timeout);
    let get_topics_use_case = GetTopicsService::new(topic_query.clone());
    let get_a_topic_use_case = GetATopicService::new(topic_query);

    // Facebook login
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let facebook_client = FacebookGraphClient::new(config.facebook.clone())
        .context("Failed to build Facebook client")?;
    let oauth_user_repo = OAuthUserRepositoryPostgres::new(Arc::clone(&db_arc), query_timeout);
    let facebook_login_use_case = OAuthLoginOrchestrator::new(
        facebook_client,
        oauth_user_repo,
        token_provider,
        config.oauth.clone(),
    );

    let state = AppState {
        get_topics_use_case: Arc::new(get_topics_use_case),
        get_a_topic_use_case: Arc::new(get_a_topic_use_case),
        facebook_login_use_case: Arc::new(facebook_login_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_query_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Docs
    cfg.service(crate::api::openapi::openapi_json);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_a_topic_handler);
    // OAuth
    cfg.service(crate::oauth::adapter::incoming::web::routes::facebook_login_handler);
    cfg.service(crate::oauth::adapter::incoming::web::routes::facebook_callback_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
