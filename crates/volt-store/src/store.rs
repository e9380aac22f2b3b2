//! Store handle and typed collection accessors.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::{Document, StoreError};

/// Collection name -> document id -> raw JSON document.
type Collections = BTreeMap<String, BTreeMap<String, Value>>;

/// Outcome of a conditional update.
#[derive(Debug)]
pub enum Updated<T> {
    /// No document with the given id exists.
    Missing,
    /// The closure declined the update; the pre-state document is returned
    /// and nothing was persisted.
    Rejected(T),
    /// The closure applied; the post-state document is returned and has been
    /// persisted.
    Applied(T),
}

struct Inner {
    collections: RwLock<Collections>,
    path: Option<PathBuf>,
}

/// Handle to the document store.
///
/// Cloning is cheap; all clones share the same state and lock.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

impl Store {
    /// Open a file-backed store, loading the snapshot if it exists.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let collections = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Open(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "store snapshot not found, starting empty");
                Collections::new()
            }
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), collections = collections.len(), "store opened");

        Ok(Self {
            inner: Arc::new(Inner {
                collections: RwLock::new(collections),
                path: Some(path),
            }),
        })
    }

    /// Open a purely in-memory store. Nothing is ever written to disk.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Inner {
                collections: RwLock::new(Collections::new()),
                path: None,
            }),
        }
    }

    /// Get a typed accessor for a document type's collection.
    pub fn collection<T: Document>(&self) -> Collection<T> {
        Collection {
            store: self.clone(),
            _marker: PhantomData,
        }
    }

    /// Remove every document in the named collection.
    pub async fn clear_collection(&self, name: &str) -> Result<(), StoreError> {
        let mut collections = self.inner.collections.write().await;
        collections.remove(name);
        self.flush(&collections).await
    }

    /// Write the snapshot file, if this store is file-backed.
    ///
    /// Called with the write lock held so readers never observe a snapshot
    /// ahead of memory.
    async fn flush(&self, collections: &Collections) -> Result<(), StoreError> {
        let Some(path) = &self.inner.path else {
            return Ok(());
        };

        let bytes = serde_json::to_vec_pretty(collections).map_err(StoreError::Serialize)?;

        // Write-then-rename so a crash mid-write cannot corrupt the snapshot.
        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

/// Typed accessor for one collection.
pub struct Collection<T: Document> {
    store: Store,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Document> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Document> Collection<T> {
    /// Fetch every document in the collection.
    pub async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        let collections = self.store.inner.collections.read().await;
        collections
            .get(T::COLLECTION)
            .map(|docs| {
                docs.values()
                    .map(|v| serde_json::from_value(v.clone()).map_err(StoreError::Deserialize))
                    .collect()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    /// Fetch a document by id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        let collections = self.store.inner.collections.read().await;
        collections
            .get(T::COLLECTION)
            .and_then(|docs| docs.get(id))
            .map(|v| serde_json::from_value(v.clone()).map_err(StoreError::Deserialize))
            .transpose()
    }

    /// Fetch the first document matching a predicate.
    pub async fn find_one(&self, pred: impl Fn(&T) -> bool) -> Result<Option<T>, StoreError> {
        for doc in self.find_all().await? {
            if pred(&doc) {
                return Ok(Some(doc));
            }
        }
        Ok(None)
    }

    /// Number of documents in the collection.
    pub async fn count(&self) -> usize {
        let collections = self.store.inner.collections.read().await;
        collections.get(T::COLLECTION).map_or(0, |docs| docs.len())
    }

    /// Insert or replace a document, keyed by its id.
    pub async fn save(&self, doc: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(doc).map_err(StoreError::Serialize)?;
        let mut collections = self.store.inner.collections.write().await;
        collections
            .entry(T::COLLECTION.to_string())
            .or_default()
            .insert(doc.id().to_string(), value);
        self.store.flush(&collections).await
    }

    /// Delete a document by id. Returns whether a document was removed.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut collections = self.store.inner.collections.write().await;
        let removed = collections
            .get_mut(T::COLLECTION)
            .and_then(|docs| docs.remove(id))
            .is_some();
        if removed {
            self.store.flush(&collections).await?;
        }
        Ok(removed)
    }

    /// Atomically read, conditionally modify, and persist a document.
    ///
    /// The closure runs under the store's write lock: nothing else can read
    /// or write between the read and the write-back, so a read-check-write
    /// sequence expressed here cannot lose updates to a concurrent caller.
    /// Returning `false` from the closure leaves the stored document
    /// untouched.
    pub async fn update<F>(&self, id: &str, apply: F) -> Result<Updated<T>, StoreError>
    where
        F: FnOnce(&mut T) -> bool,
    {
        let mut collections = self.store.inner.collections.write().await;

        let Some(raw) = collections
            .get(T::COLLECTION)
            .and_then(|docs| docs.get(id))
        else {
            return Ok(Updated::Missing);
        };

        let mut doc: T = serde_json::from_value(raw.clone()).map_err(StoreError::Deserialize)?;

        if !apply(&mut doc) {
            return Ok(Updated::Rejected(doc));
        }

        let value = serde_json::to_value(&doc).map_err(StoreError::Serialize)?;
        collections
            .entry(T::COLLECTION.to_string())
            .or_default()
            .insert(id.to_string(), value);
        self.store.flush(&collections).await?;

        Ok(Updated::Applied(doc))
    }
}
