//! # Ticklist Server
//!
//! HTTP surface for Ticklist, a credential-gated to-do list.
//!
//! This crate provides:
//! - The access gate: one shared basic-auth credential over every route
//! - The page render with an embedded snapshot of the collection
//! - CRUD endpoints (`/create-item`, `/update-item`, `/delete-item`)
//! - Markup stripping for all user-supplied text
//!
//! # Architecture
//!
//! A request clears the gate middleware before anything else happens,
//! static assets included. Handlers then talk to the injected
//! [`ItemStore`](ticklist_store::ItemStore) handle and nothing else: the
//! store is opened once at startup and shared for the lifetime of the
//! process, and every read goes back to the store rather than a cache.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ticklist_server::{serve, ServerConfig};
//! use ticklist_store::MemoryStore;
//!
//! # async fn run() -> Result<(), ticklist_server::ServerError> {
//! let config = ServerConfig::default().with_credential("alice", "hunter2");
//! serve(config, Arc::new(MemoryStore::new())).await
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod auth;
mod config;
mod error;
mod handler;
mod page;
mod sanitize;
mod server;

pub use auth::{AccessGate, SharedCredential};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use sanitize::sanitize_text;
pub use server::{router, serve};
