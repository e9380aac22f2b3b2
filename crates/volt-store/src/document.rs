//! The document trait implemented by every stored type.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A type that can be stored in a named collection.
///
/// Documents round-trip through JSON, so every persisted field must survive
/// serde. The id is the collection key; two documents with the same id are
/// the same document.
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the collection this document lives in.
    const COLLECTION: &'static str;

    /// The unique document id.
    fn id(&self) -> &str;
}
