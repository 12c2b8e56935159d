//! # Core Domain Entities
//!
//! Defines the block-DAG entities as specified in System.md and the
//! Data Architecture diagram.
//!
//! ## Clusters
//!
//! - **Chain**: `Block`, `BlockHeader`, `Justification`
//! - **Traversal**: `BlockMetadata` (immutable projection for graph walks)

use serde::{Deserialize, Serialize};

/// A 32-byte hash (SHA-256).
pub type Hash = [u8; 32];

/// A 32-byte Ed25519 public key identifying a validator.
pub type PublicKey = [u8; 32];

/// DAG depth of a block: `max(parent ranks) + 1`, or 0 for genesis.
///
/// Parents always have strictly smaller rank than their children, so rank
/// is consistent with a topological order over the DAG.
pub type Rank = u64;

/// A block's claimed reference to the latest known message of some
/// validator at block-creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Justification {
    /// The validator whose message is being cited.
    pub validator: PublicKey,
    /// Hash of that validator's latest message as seen by the creator.
    pub latest_block_hash: Hash,
}

impl Justification {
    pub fn new(validator: PublicKey, latest_block_hash: Hash) -> Self {
        Self {
            validator,
            latest_block_hash,
        }
    }
}

/// The header of a block containing DAG linkage and the creator's view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockHeader {
    /// Protocol version for this block.
    pub version: u16,
    /// DAG rank: strictly greater than every parent's rank.
    pub rank: Rank,
    /// Hashes of the parent blocks.
    pub parent_hashes: Vec<Hash>,
    /// The creator's claimed view of the latest message from every
    /// validator it knew about, including itself. Order is as signed.
    pub justifications: Vec<Justification>,
    /// Unix timestamp when the block was proposed.
    pub timestamp: u64,
    /// The validator who created this block.
    pub validator_public_key: PublicKey,
}

impl BlockHeader {
    /// Compute the content hash of this header.
    ///
    /// Identity of a block is this hash and nothing else.
    pub fn hash(&self) -> Hash {
        use sha2::{Digest, Sha256};
        let encoded = bincode::serialize(self).expect("header serialization is infallible");
        let mut hasher = Sha256::new();
        hasher.update(&encoded);
        hasher.finalize().into()
    }
}

/// A full block (header + body).
///
/// The body is opaque to consensus bookkeeping; only the header fields
/// participate in equivocation detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    /// The block header.
    pub header: BlockHeader,
    /// Serialized deploys; not interpreted here.
    pub body: Vec<u8>,
}

impl Block {
    pub fn new(header: BlockHeader, body: Vec<u8>) -> Self {
        Self { header, body }
    }

    /// Content hash of the block (hash of the header).
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// The validator who created this block.
    pub fn creator(&self) -> PublicKey {
        self.header.validator_public_key
    }

    /// The creator's own justification entry, if the block cites itself.
    pub fn self_justification(&self) -> Option<Hash> {
        self.header
            .justifications
            .iter()
            .find(|j| j.validator == self.header.validator_public_key)
            .map(|j| j.latest_block_hash)
    }
}

/// Immutable projection of a block used for DAG traversal.
///
/// Derived once when the block is admitted; never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMetadata {
    /// Content hash of the block.
    pub hash: Hash,
    /// DAG rank of the block.
    pub rank: Rank,
    /// The validator who created the block.
    pub validator_public_key: PublicKey,
    /// The creator's claimed view at creation time.
    pub justifications: Vec<Justification>,
}

impl BlockMetadata {
    /// Project a full block down to its traversal metadata.
    pub fn of(block: &Block) -> Self {
        Self {
            hash: block.hash(),
            rank: block.header.rank,
            validator_public_key: block.header.validator_public_key,
            justifications: block.header.justifications.clone(),
        }
    }

    /// Hashes of all justified blocks, in signed order.
    pub fn justified_hashes(&self) -> impl Iterator<Item = Hash> + '_ {
        self.justifications.iter().map(|j| j.latest_block_hash)
    }
}

impl From<&Block> for BlockMetadata {
    fn from(block: &Block) -> Self {
        Self::of(block)
    }
}
