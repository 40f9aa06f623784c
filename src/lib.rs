use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub mod api;
pub mod catalog;
pub mod chat;
pub mod preferences;
pub mod startup_checks;
pub mod storage;

use catalog::{CatalogError, ContentCatalog};
use chat::ResponseGenerator;
use preferences::Preferences;
use storage::{StorageConfig, StorageError};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub name: String,
    /// Default log level; `--log-level` overrides it.
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    /// Pause before each answer so the reply reads like it is being typed.
    pub typing_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// TOML catalog file. The built-in catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            app: AppConfig {
                name: "Folio".to_string(),
                log_level: "info".to_string(),
            },
            chat: ChatConfig::default(),
            catalog: CatalogConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

/// Unknown names fall back to `INFO`.
pub fn parse_log_level(name: &str) -> tracing::Level {
    match name.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ContentCatalog>,
    pub generator: ResponseGenerator,
    pub preferences: Preferences,
    pub config: Config,
}

impl AppState {
    pub fn new(catalog: Arc<ContentCatalog>, preferences: Preferences, config: Config) -> Self {
        Self {
            generator: ResponseGenerator::new(catalog.clone()),
            catalog,
            preferences,
            config,
        }
    }

    pub async fn from_config(config: Config) -> Result<Self, AppError> {
        let catalog = load_catalog(&config.catalog).await?;
        let provider = storage::create_provider(&config.storage).await?;
        let preferences = Preferences::load(provider).await;
        Ok(Self::new(Arc::new(catalog), preferences, config))
    }
}

pub async fn load_catalog(config: &CatalogConfig) -> Result<ContentCatalog, CatalogError> {
    match &config.path {
        Some(path) => ContentCatalog::load_from_file(path).await,
        None => Ok(ContentCatalog::builtin()),
    }
}

pub async fn create_app(config: Config) -> Result<Router, AppError> {
    let app_state = AppState::from_config(config).await?;
    Ok(create_router(app_state))
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(api::chat_handler))
        .route("/api/chat/prompts", get(api::chat_prompts_handler))
        .route("/api/posts", get(api::posts_handler))
        .route("/api/posts/bookmarked", get(api::bookmarked_posts_handler))
        .route("/api/posts/{slug}/related", get(api::related_posts_handler))
        .route(
            "/api/posts/{slug}/rating",
            get(api::get_rating_handler).post(api::add_rating_handler),
        )
        .route(
            "/api/posts/{slug}/comments",
            get(api::list_comments_handler).post(api::add_comment_handler),
        )
        .route("/api/comments/{id}", delete(api::delete_comment_handler))
        .route("/api/bookmarks", get(api::list_bookmarks_handler))
        .route(
            "/api/bookmarks/{slug}",
            put(api::add_bookmark_handler).delete(api::remove_bookmark_handler),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let method = request.method();
                    let uri = request.uri();
                    let matched_path = request
                        .extensions()
                        .get::<axum::extract::MatchedPath>()
                        .map(|matched_path| matched_path.as_str());

                    tracing::info_span!(
                        "http_request",
                        method = %method,
                        uri = %uri,
                        matched_path,
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    let user_agent = request
                        .headers()
                        .get("user-agent")
                        .and_then(|h| h.to_str().ok())
                        .unwrap_or("-");

                    tracing::info!(
                        target: "access_log",
                        method = %request.method(),
                        path = %request.uri().path(),
                        user_agent = %user_agent,
                        "request"
                    );
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::info!(
                            target: "access_log",
                            status = %response.status(),
                            latency_ms = %latency.as_millis(),
                            "response"
                        );
                    },
                ),
        )
        .with_state(app_state)
}
