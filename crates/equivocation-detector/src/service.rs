//! Equivocation Service - Core business logic
//!
//! The externally-visible entry point of the subsystem. Composes the
//! equivocation checker and the tracker under a single atomic state
//! transition and raises the rejection verdict to the caller.

use crate::domain::{check_equivocations, rank_of_earlier_message_from_creator};
use crate::error::{EquivocationError, EquivocationResult};
use crate::events::EquivocationDetectedEvent;
use crate::metrics;
use crate::ports::inbound::EquivocationApi;
use crate::ports::outbound::DagStore;
use crate::state::CasperState;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Block, PublicKey, Rank};
use std::sync::Arc;
use tracing::info;

/// Equivocation detection service for one DAG replica.
///
/// Holds the replica's [`CasperState`] behind an exclusive lock; the whole
/// read-modify-write of a block check runs under one write guard, so
/// concurrent calls for the same creator cannot race: the loser of a
/// concurrent first-detection observes the winner's entry and falls into
/// the update-minimum branch deterministically.
pub struct EquivocationService<D: DagStore> {
    state: Arc<RwLock<CasperState>>,
    dag: Arc<D>,
}

impl<D: DagStore> EquivocationService<D> {
    /// Create a new service over the given DAG view.
    pub fn new(dag: Arc<D>) -> Self {
        Self {
            state: Arc::new(RwLock::new(CasperState::new())),
            dag,
        }
    }

    /// Take and clear detection events collected since the last call.
    pub fn take_detection_events(&self) -> Vec<EquivocationDetectedEvent> {
        self.state.write().take_detection_events()
    }

    /// The atomic state transition for one candidate block.
    ///
    /// Tracker reads, the checker run, the computed earlier rank, and the
    /// final rejection decision all happen under the same write guard; the
    /// DAG store itself needs no synchronization (immutable-once-present
    /// reads).
    fn transition(&self, block: &Block) -> EquivocationResult<()> {
        let creator = block.creator();
        let block_hash = block.hash();
        let mut state = self.state.write();

        match state.equivocations_tracker.base_rank(&creator) {
            Some(base_rank) => {
                // Terminal state: every further block from this creator is
                // rejected; new evidence can only lower the base rank.
                let earlier_rank = rank_of_earlier_message_from_creator(&*self.dag, block);
                let committed = state.equivocations_tracker.observe(creator, earlier_rank);
                info!(
                    validator = ?creator,
                    block = ?block_hash,
                    base_rank = committed,
                    "block from known equivocator"
                );
                if committed < base_rank {
                    info!(
                        validator = ?creator,
                        from = base_rank,
                        to = committed,
                        "equivocation base rank lowered"
                    );
                }
            }
            None => {
                if check_equivocations(&*self.dag, block)? {
                    let earlier_rank = rank_of_earlier_message_from_creator(&*self.dag, block);
                    let committed = state.equivocations_tracker.observe(creator, earlier_rank);
                    if let Some(conflicts_with) = self.dag.latest_message_hash(&creator) {
                        state
                            .pending_detection_events
                            .push(EquivocationDetectedEvent {
                                validator: creator,
                                block_hash,
                                conflicts_with,
                                base_rank: committed,
                            });
                    }
                    metrics::record_detection(state.equivocations_tracker.len());
                    info!(
                        validator = ?creator,
                        base_rank = committed,
                        "validator entered equivocating state"
                    );
                }
            }
        }

        // Re-read after the transition: a tracked creator means rejection,
        // on this call and on every later one.
        match state.equivocations_tracker.base_rank(&creator) {
            Some(base_rank) => {
                state.blocks_rejected += 1;
                metrics::record_rejection();
                Err(EquivocationError::EquivocatedBlock {
                    validator: creator,
                    block_hash,
                    base_rank,
                })
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<D: DagStore + 'static> EquivocationApi for EquivocationService<D> {
    async fn check_equivocation_with_update(&self, block: &Block) -> EquivocationResult<()> {
        self.transition(block)
    }

    async fn is_equivocator(&self, validator: &PublicKey) -> bool {
        self.state.read().equivocations_tracker.is_tracked(validator)
    }

    async fn equivocation_base_rank(&self, validator: &PublicKey) -> Option<Rank> {
        self.state.read().equivocations_tracker.base_rank(validator)
    }

    async fn known_equivocators(&self) -> Vec<PublicKey> {
        self.state
            .read()
            .equivocations_tracker
            .equivocators()
            .copied()
            .collect()
    }

    async fn blocks_rejected(&self) -> u64 {
        self.state.read().blocks_rejected
    }
}
