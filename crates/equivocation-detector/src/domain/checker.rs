//! # Equivocation Checker
//!
//! Pure decision procedure: does a candidate block equivocate against
//! its creator's previously known latest message?
//!
//! A block equivocates when its causal history (the transitive
//! justification set) does not include the creator's latest known
//! message - the creator has signed two causally-incomparable messages.
//!
//! Detection is deliberately partial: only the first equivocation
//! reachable through the candidate's justification graph is found. A
//! fork branch that the candidate does not dominate can go undetected
//! here; such blocks are still rejected by the tracker once the
//! validator is known to equivocate.

use crate::domain::traversal::JustificationTraversal;
use crate::error::{EquivocationError, EquivocationResult};
use crate::ports::outbound::DagStore;
use shared_types::{Block, BlockMetadata, Rank};
use tracing::warn;

/// Check whether `block` equivocates against its creator's latest known
/// message.
///
/// Pure function of DAG contents: no mutation, deterministic given a
/// consistent DAG view.
///
/// # Errors
/// [`EquivocationError::MissingLatestMessage`] if the DAG store advertises
/// a latest message whose metadata cannot be resolved - an upstream
/// contract violation, never treated as "no equivocation".
pub fn check_equivocations<D: DagStore>(dag: &D, block: &Block) -> EquivocationResult<bool> {
    let creator = block.creator();

    // The creator has never posted before: nothing to fork from.
    let latest_hash = match dag.latest_message_hash(&creator) {
        Some(hash) => hash,
        None => return Ok(false),
    };

    // The block directly cites the creator's latest known message.
    if block.self_justification() == Some(latest_hash) {
        return Ok(false);
    }

    let latest = dag
        .lookup(&latest_hash)
        .ok_or(EquivocationError::MissingLatestMessage {
            validator: creator,
            hash: latest_hash,
        })?;

    let candidate = BlockMetadata::of(block);
    let equivocated = !cites(dag, &candidate, &latest);
    if equivocated {
        warn!(
            candidate = ?candidate.hash,
            conflicts_with = ?latest.hash,
            validator = ?creator,
            "equivocation detected: candidate does not cite creator's latest message"
        );
    }
    Ok(equivocated)
}

/// Whether `target` appears in the causal history of `start`.
///
/// Scans the rank-descending traversal for the decision point: the first
/// node that either is `target` or has rank strictly below `target`'s.
/// Parent rank is always strictly smaller than child rank, so once the
/// walk yields a node below the target rank the target cannot appear
/// later - safe to stop.
fn cites<D: DagStore>(dag: &D, start: &BlockMetadata, target: &BlockMetadata) -> bool {
    let decision = JustificationTraversal::new(dag, start)
        .find(|node| node.hash == target.hash || node.rank < target.rank);
    match decision {
        Some(node) => node.hash == target.hash,
        // Frontier exhausted above the target rank: target was never cited.
        None => false,
    }
}

/// Rank of the creator's own earlier message reachable from `block`.
///
/// After an equivocation this is a *different* message than the one the
/// block equivocates against; its rank becomes the candidate base rank
/// recorded for the validator. Returns 0 ("earliest possible", genesis
/// level) when no earlier message from the creator is reachable.
pub fn rank_of_earlier_message_from_creator<D: DagStore>(dag: &D, block: &Block) -> Rank {
    let creator = block.creator();
    let candidate = BlockMetadata::of(block);
    JustificationTraversal::new(dag, &candidate)
        .find(|node| node.validator_public_key == creator)
        .map(|node| node.rank)
        .unwrap_or(0)
}
