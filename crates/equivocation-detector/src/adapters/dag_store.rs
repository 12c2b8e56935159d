//! In-memory DAG store adapter.
//!
//! Implements the [`DagStore`] port over process-local maps. Used by the
//! host during bootstrap (before persistent storage is warm) and by the
//! test suites to drive the subsystem end to end.

use crate::ports::outbound::DagStore;
use parking_lot::RwLock;
use shared_types::{BlockMetadata, Hash, PublicKey};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
struct DagIndex {
    blocks: HashMap<Hash, BlockMetadata>,
    latest_messages: HashMap<PublicKey, Hash>,
}

/// Append-only, content-addressed store of block metadata.
///
/// Metadata is immutable once present: re-inserting an already known hash
/// is a no-op on the block index. Each insert advances the creator's
/// latest message, the way the admission pipeline does for admitted
/// blocks.
#[derive(Debug, Default)]
pub struct InMemoryDagStore {
    inner: RwLock<DagIndex>,
}

impl InMemoryDagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit block metadata into the DAG.
    pub fn insert(&self, meta: BlockMetadata) {
        let mut index = self.inner.write();
        if index.blocks.contains_key(&meta.hash) {
            return;
        }
        debug!(hash = ?meta.hash, rank = meta.rank, "block metadata admitted");
        index
            .latest_messages
            .insert(meta.validator_public_key, meta.hash);
        index.blocks.insert(meta.hash, meta);
    }

    /// Point a validator's latest message at an arbitrary hash.
    ///
    /// Fault-injection helper for tests that simulate a store whose
    /// latest-message index disagrees with its block index.
    pub fn set_latest_message(&self, validator: PublicKey, hash: Hash) {
        self.inner.write().latest_messages.insert(validator, hash);
    }

    /// Number of blocks in the store.
    pub fn len(&self) -> usize {
        self.inner.read().blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().blocks.is_empty()
    }
}

impl DagStore for InMemoryDagStore {
    fn lookup(&self, hash: &Hash) -> Option<BlockMetadata> {
        self.inner.read().blocks.get(hash).cloned()
    }

    fn latest_message_hash(&self, validator: &PublicKey) -> Option<Hash> {
        self.inner.read().latest_messages.get(validator).copied()
    }
}
