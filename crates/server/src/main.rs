//! Tradewind tool server.
//!
//! Serves the four commerce tools over HTTP. State lives in `PostgreSQL`;
//! outbound notifications go through SMTP.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use tradewind_server::config::ServerConfig;
use tradewind_server::services::SmtpMailer;
use tradewind_server::state::AppState;
use tradewind_server::{db, routes};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter; defaults to info level for our
    // crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tradewind_server=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Initialize database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // The schema is owned elsewhere; no migrations run here.

    let mailer = SmtpMailer::new(&config.mail).expect("Failed to create SMTP mailer");
    let state = AppState::new(config.clone(), pool, Arc::new(mailer));

    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.socket_addr();
    tracing::info!(%addr, "tool server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
