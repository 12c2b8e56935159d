//! Outgoing events for the equivocation-detection subsystem.
//!
//! Collected on the consensus state and drained by the host, which
//! decides how to broadcast evidence; nothing here affects control flow.

use serde::{Deserialize, Serialize};
use shared_types::{Hash, PublicKey, Rank};

/// Event emitted when a new equivocation is first detected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivocationDetectedEvent {
    /// The validator that forked its message history.
    pub validator: PublicKey,
    /// The candidate block that revealed the fork.
    pub block_hash: Hash,
    /// The creator's latest message the candidate fails to cite.
    pub conflicts_with: Hash,
    /// Rank recorded as the fork's base.
    pub base_rank: Rank,
}
