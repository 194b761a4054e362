//! # Ticklist Store
//!
//! Item data model and document-store clients for Ticklist.
//!
//! This crate provides:
//! - [`Item`] and [`ItemId`], the record shape shared by store and wire
//! - [`ItemStore`], the contract handlers program against
//! - [`FileStore`], a single-document JSON client for persistent use
//! - [`MemoryStore`], an ephemeral client for tests and throwaway runs
//!
//! # Contract
//!
//! The store owns the collection outright. Callers never cache reads, so
//! [`ItemStore::find_all`] reflects the store at the moment of the call.
//! Callers sanitize item text before it crosses this boundary; the store
//! persists exactly what it is given.
//!
//! # Example
//!
//! ```
//! use ticklist_store::{ItemStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let item = store.insert("buy milk")?;
//! assert_eq!(store.find_all()?, vec![item]);
//! # Ok::<(), ticklist_store::StoreError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod file;
mod item;
mod memory;
mod store;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use item::{Item, ItemId};
pub use memory::MemoryStore;
pub use store::ItemStore;
