//! Driving Ports (API - Inbound)

use crate::error::EquivocationResult;
use async_trait::async_trait;
use shared_types::{Block, PublicKey, Rank};

/// Primary equivocation-detection API.
///
/// This is the driving port for the subsystem; it is invoked by the
/// block-admission pipeline for every block that has passed structural
/// and signature validation.
#[async_trait]
pub trait EquivocationApi: Send + Sync {
    /// Check a candidate block against the creator's known message history
    /// and commit any tracker update in a single atomic state transition.
    ///
    /// # Returns
    /// * `Ok(())` - the block shows no equivocation; admission may proceed.
    /// * `Err(EquivocationError::EquivocatedBlock { .. })` - the creator is
    ///   a known equivocator (possibly first detected by this very call);
    ///   the block must not be admitted. Raised on every call for a tracked
    ///   validator.
    /// * `Err(EquivocationError::MissingLatestMessage { .. })` - DAG store
    ///   contract violation; fatal upstream bug.
    async fn check_equivocation_with_update(&self, block: &Block) -> EquivocationResult<()>;

    /// Whether the validator is a known equivocator.
    async fn is_equivocator(&self, validator: &PublicKey) -> bool;

    /// The lowest rank at which the validator's fork point was identified,
    /// if the validator is tracked.
    async fn equivocation_base_rank(&self, validator: &PublicKey) -> Option<Rank>;

    /// All currently tracked equivocators.
    async fn known_equivocators(&self) -> Vec<PublicKey>;

    /// Number of blocks rejected because their creator was tracked.
    async fn blocks_rejected(&self) -> u64;
}
