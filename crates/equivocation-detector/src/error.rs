//! Error types for the equivocation-detection subsystem.

use shared_types::{Hash, PublicKey, Rank};
use thiserror::Error;

/// Equivocation subsystem errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquivocationError {
    /// The candidate block's creator is a known equivocator.
    ///
    /// Raised on every call for a tracked validator, not only the call
    /// that first discovered the fork. The admission pipeline must not
    /// admit the block.
    #[error(
        "block {block_hash:?} rejected: validator {validator:?} equivocated (base rank {base_rank})"
    )]
    EquivocatedBlock {
        validator: PublicKey,
        block_hash: Hash,
        base_rank: Rank,
    },

    /// The DAG store advertised a latest message for a validator but could
    /// not resolve its metadata. This contradicts the store's
    /// immutable-once-present contract and indicates an upstream bug; it
    /// is never masked as "no equivocation".
    #[error("latest message {hash:?} of validator {validator:?} missing from DAG store")]
    MissingLatestMessage { validator: PublicKey, hash: Hash },
}

/// Result type for equivocation operations.
pub type EquivocationResult<T> = Result<T, EquivocationError>;
