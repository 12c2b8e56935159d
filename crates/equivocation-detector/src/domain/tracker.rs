//! # Equivocations Tracker
//!
//! Mutable mapping of validator to the lowest DAG rank at which
//! divergent branches were first found for that validator.
//!
//! ## Invariants
//!
//! 1. Once a validator key is present, it is present forever (no removal).
//! 2. `lowest_base_rank` only ever decreases or stays equal across
//!    updates (monotonic non-increasing).
//!
//! Per-validator state machine: `Honest -> Equivocating(base_rank)`;
//! `Equivocating` is terminal.

use serde::{Deserialize, Serialize};
use shared_types::{PublicKey, Rank};
use std::collections::HashMap;

/// Validator -> lowest base rank of the detected fork.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivocationsTracker {
    base_ranks: HashMap<PublicKey, Rank>,
}

impl EquivocationsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The validator's recorded base rank, if tracked.
    pub fn base_rank(&self, validator: &PublicKey) -> Option<Rank> {
        self.base_ranks.get(validator).copied()
    }

    /// Whether the validator is a known equivocator.
    pub fn is_tracked(&self, validator: &PublicKey) -> bool {
        self.base_ranks.contains_key(validator)
    }

    /// Record evidence of a fork at `rank` for `validator`.
    ///
    /// Inserts the entry if absent; lowers it if `rank` is smaller than
    /// the recorded base rank; otherwise leaves it unchanged. Returns the
    /// committed base rank.
    pub fn observe(&mut self, validator: PublicKey, rank: Rank) -> Rank {
        let entry = self.base_ranks.entry(validator).or_insert(rank);
        if rank < *entry {
            *entry = rank;
        }
        *entry
    }

    /// All tracked validators.
    pub fn equivocators(&self) -> impl Iterator<Item = &PublicKey> {
        self.base_ranks.keys()
    }

    /// Number of tracked validators.
    pub fn len(&self) -> usize {
        self.base_ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base_ranks.is_empty()
    }
}
