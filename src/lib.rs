//! # Intern Portal
//!
//! Demonstration intern portal: a login/signup flow, a donation/referral
//! dashboard, and a leaderboard, backed by one static data endpoint.
//!
//!
//!
//! # General Infrastructure
//! - Backend is a single axum server exposing `GET /api/data`
//! - The record it serves is fixed demo data, built once at startup
//! - No persistence, no authentication, no per-request state
//! - Frontend logic lives in [`client`]: view-state structs with pure
//!   transition functions, one shared fetch abstraction, and a
//!   message-driven controller
//!
//!
//!
//! # Notes
//!
//! ## Why a static record
//! The portal is a UI demo. Serving one immutable record keeps every request
//! handler lock-free and makes the endpoint trivially idempotent, which the
//! smoke tests assert byte-for-byte.
//!
//! ## Client architecture
//! The original UI kept its state in ad hoc component flags and passed the
//! signup result through an ephemeral navigation side channel. Here the
//! controller owns an explicit [`client::session::Session`], each view is a
//! serializable struct, and loading/error/loaded is one reusable tri-state
//! shared by every fetch site.
//!
//!
//!
//! # Setup
//!
//! Run the server.
//! ```sh
//! cargo run --bin intern-portal
//! ```
//!
//! Run the scripted client demo against it.
//! ```sh
//! cargo run --bin client
//! ```
use std::{sync::Arc, time::Duration};

use axum::{http::Method, routing::get, Router};

use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod client;
pub mod config;
pub mod error;
pub mod record;
pub mod routes;
pub mod state;

use error::AppError;
use routes::data_handler;
use state::State;

/// Builds the application router. Split out so tests can serve the same
/// routes on an ephemeral port.
pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/data", get(data_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new()?;

    info!("Starting server...");
    let router = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::InternalError(Box::new(e)))?;
    info!("Server running on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(Box::new(e)))?;

    println!("Server shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
