//! Video Console API Server
//!
//! Moderation backend for a single YouTube video: metadata, comment
//! listing with full aggregation, posting, deleting and an audit trail.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    ensure_schema, PostgresAuditLogRepository, PostgresNoteRepository, YouTubeClientImpl,
    YouTubeCredentials,
};
use app::{AuditLog, ModerationService, NoteService};
use config::Config;
use domain::ports::{AuditLogRepository, NoteRepository, YouTubeClient};

/// Application state shared across all handlers
pub struct AppState<U, A, N>
where
    U: YouTubeClient,
    A: AuditLogRepository,
    N: NoteRepository,
{
    pub moderation: Arc<ModerationService<U, A>>,
    pub notes: Arc<NoteService<N, A>>,
}

impl<U, A, N> Clone for AppState<U, A, N>
where
    U: YouTubeClient,
    A: AuditLogRepository,
    N: NoteRepository,
{
    fn clone(&self) -> Self {
        Self {
            moderation: self.moderation.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router without the rate limiter, which needs peer addresses
pub fn build_router<U, A, N>(state: AppState<U, A, N>, static_dir: Option<&str>) -> Router
where
    U: YouTubeClient + 'static,
    A: AuditLogRepository + 'static,
    N: NoteRepository + 'static,
{
    let api = Router::new()
        .route(
            "/video",
            get(handlers::get_video::<U, A, N>).put(handlers::update_video::<U, A, N>),
        )
        .route("/comments", get(handlers::list_comments::<U, A, N>))
        .route("/comment", post(handlers::post_comment::<U, A, N>))
        .route("/comment/:id", delete(handlers::delete_comment::<U, A, N>))
        .route("/note", post(handlers::add_note::<U, A, N>))
        .route("/note/search", get(handlers::search_notes::<U, A, N>));

    let mut router = Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(
        ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        ),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,video_console_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Video Console API...");

    let config = Config::from_env();

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    ensure_schema(&db)
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database connected");

    if config.video_id.is_none() {
        tracing::warn!("VIDEO_ID is not set; video and comment routes will reject requests");
    }
    if config.youtube_access_token.is_none() {
        tracing::warn!("YOUTUBE_ACCESS_TOKEN is not set; posting, deleting and updating are disabled");
    }

    // Create adapters
    let youtube = Arc::new(YouTubeClientImpl::new(
        config.youtube_api_base.clone(),
        YouTubeCredentials {
            access_token: config.youtube_access_token.clone(),
            api_key: config.youtube_api_key.clone(),
        },
    ));
    let audit = AuditLog::new(Arc::new(PostgresAuditLogRepository::new(db.clone())));
    let note_repo = Arc::new(PostgresNoteRepository::new(db.clone()));

    // Create application services
    let moderation = Arc::new(
        ModerationService::new(youtube, audit.clone(), config.video_id.clone())
            .with_safety_limit(config.comments_safety_limit),
    );
    let notes = Arc::new(NoteService::new(note_repo, audit, config.video_id.clone()));

    let state = AppState { moderation, notes };

    // Rate limiting config: 5 req/sec sustained, burst of 20, per peer IP
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(5)
            .burst_size(20)
            .finish()
            .context("Failed to build governor config")?,
    );

    let app = build_router(state, config.static_dir.as_deref()).layer(GovernorLayer {
        config: governor_config,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
