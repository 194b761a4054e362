//! Router assembly and server startup.

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use ticklist_store::ItemStore;
use tower_http::trace::TraceLayer;

use crate::auth::{self, AccessGate, SharedCredential};
use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::handler::{self, AppState};

/// Builds the application router over the given store and gate.
///
/// Every route sits behind the gate: the page, the client script, the
/// three mutation endpoints, and any unknown path a client probes.
pub fn router(store: Arc<dyn ItemStore>, gate: Arc<dyn AccessGate>) -> Router {
    let state = AppState::new(store, gate);
    Router::new()
        .route("/", get(handler::index))
        .route("/browser.js", get(handler::browser_js))
        .route("/create-item", post(handler::create_item))
        .route("/update-item", post(handler::update_item))
        .route("/delete-item", post(handler::delete_item))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_credential,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves requests until the process is
/// stopped.
///
/// The store handle is shared by every request for the lifetime of the
/// process; there is no per-request connection management and no retry
/// on store failure.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server loop
/// fails.
pub async fn serve(config: ServerConfig, store: Arc<dyn ItemStore>) -> ServerResult<()> {
    let gate = Arc::new(SharedCredential::new(
        &config.username,
        &config.password,
        config.realm.clone(),
    ));
    let app = router(store, gate);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, realm = %config.realm, "ticklist listening");
    axum::serve(listener, app).await?;
    Ok(())
}
