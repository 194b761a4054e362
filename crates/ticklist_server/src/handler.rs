//! Request handlers for the page and the CRUD endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};
use ticklist_store::{Item, ItemId, ItemStore};

use crate::auth::AccessGate;
use crate::error::ServerResult;
use crate::page;
use crate::sanitize::sanitize_text;

/// Shared state injected into every handler.
///
/// Both handles are created once at startup and live for the whole
/// process: handlers never open their own store connection, and the gate
/// policy never changes between requests.
#[derive(Clone)]
pub struct AppState {
    /// The document store holding the collection.
    pub store: Arc<dyn ItemStore>,
    /// The credential policy applied to every request.
    pub gate: Arc<dyn AccessGate>,
}

impl AppState {
    /// Creates state from a store handle and a gate policy.
    #[must_use]
    pub fn new(store: Arc<dyn ItemStore>, gate: Arc<dyn AccessGate>) -> Self {
        Self { store, gate }
    }
}

/// Body of a create request.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateItem {
    text: String,
}

/// Body of an update request.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateItem {
    id: ItemId,
    text: String,
}

/// Body of a delete request.
#[derive(Debug, Deserialize)]
pub(crate) struct DeleteItem {
    id: ItemId,
}

/// Acknowledgment for an update, echoing the text as stored.
#[derive(Debug, Serialize)]
pub(crate) struct UpdatedText {
    text: String,
}

/// `GET /` renders the page around a fresh snapshot of the collection.
pub(crate) async fn index(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let items = state.store.find_all()?;
    Ok(Html(page::render(&items)?))
}

/// `GET /browser.js` serves the client script.
pub(crate) async fn browser_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript")], page::BROWSER_JS)
}

/// `POST /create-item` sanitizes, inserts and echoes the stored record.
pub(crate) async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<CreateItem>,
) -> ServerResult<Json<Item>> {
    let text = sanitize_text(&body.text);
    let item = state.store.insert(&text)?;
    tracing::debug!(id = %item.id, "item created");
    Ok(Json(item))
}

/// `POST /update-item` sanitizes, overwrites and echoes the stored text.
///
/// An unknown ID is not an error. The store reports the miss, the server
/// notes it, and the response still acknowledges with the text the item
/// would have held.
pub(crate) async fn update_item(
    State(state): State<AppState>,
    Json(body): Json<UpdateItem>,
) -> ServerResult<Json<UpdatedText>> {
    let text = sanitize_text(&body.text);
    let matched = state.store.update(body.id, &text)?;
    if !matched {
        tracing::debug!(id = %body.id, "update matched no item");
    }
    Ok(Json(UpdatedText { text }))
}

/// `POST /delete-item` removes by ID, acknowledging whether or not a
/// document matched.
pub(crate) async fn delete_item(
    State(state): State<AppState>,
    Json(body): Json<DeleteItem>,
) -> ServerResult<&'static str> {
    let matched = state.store.delete(body.id)?;
    if !matched {
        tracing::debug!(id = %body.id, "delete matched no item");
    }
    Ok("deleted")
}
