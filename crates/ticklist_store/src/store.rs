//! The document-store contract.

use crate::error::StoreResult;
use crate::item::{Item, ItemId};

/// Contract for a document store holding [`Item`] records.
///
/// This is the whole surface the server needs: list everything, insert one,
/// overwrite one by ID, delete one by ID. Implementations own their
/// concurrency control internally, so a single handle can be shared across
/// threads and used from concurrent requests.
///
/// `update` and `delete` report whether a document actually matched. A miss
/// is not an error; the caller decides what a no-op means.
pub trait ItemStore: Send + Sync {
    /// Returns every stored item, oldest first.
    ///
    /// The result reflects the store at the moment of the call.
    /// Implementations must not serve cached snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_all(&self) -> StoreResult<Vec<Item>>;

    /// Inserts a new item with the given text and returns the stored
    /// record, including its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn insert(&self, text: &str) -> StoreResult<Item>;

    /// Overwrites the text of the item with the given ID.
    ///
    /// Returns `true` if a document matched, `false` if the ID is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    fn update(&self, id: ItemId, text: &str) -> StoreResult<bool>;

    /// Deletes the item with the given ID.
    ///
    /// Returns `true` if a document was removed, `false` if the ID is
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    fn delete(&self, id: ItemId) -> StoreResult<bool>;
}
