//! Driven Ports (SPI - Outbound Dependencies)

use shared_types::{BlockMetadata, Hash, PublicKey};

/// Read-only view over the block DAG.
///
/// Owned by the storage layer; this subsystem only reads it. The store is
/// append-only and metadata is immutable once a hash is present, so
/// concurrent reads are safe without synchronization on this side.
///
/// Both operations are pure in-memory lookups (no blocking I/O), hence a
/// plain sync trait.
pub trait DagStore: Send + Sync {
    /// Resolve block metadata by content hash.
    ///
    /// `None` means the block is not (yet) known - a node may have partial
    /// knowledge of the DAG during sync.
    fn lookup(&self, hash: &Hash) -> Option<BlockMetadata>;

    /// Hash of the most recently admitted block by `validator`, if any.
    ///
    /// Advances monotonically as the admission pipeline admits blocks;
    /// never mutated by this subsystem.
    fn latest_message_hash(&self, validator: &PublicKey) -> Option<Hash>;
}
