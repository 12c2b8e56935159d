//! Per-replica consensus state.

use crate::domain::EquivocationsTracker;
use crate::events::EquivocationDetectedEvent;

/// Process-wide consensus state for one DAG replica.
///
/// Created once at startup, lives for the process lifetime, mutated by
/// every block-processing call. Other consensus bookkeeping (fork choice,
/// deploy buffers) lives in its own subsystems; this replica state carries
/// only what equivocation detection owns.
#[derive(Debug, Default)]
pub struct CasperState {
    /// Known equivocators and their earliest detected fork rank.
    pub equivocations_tracker: EquivocationsTracker,
    /// Blocks rejected because their creator was tracked.
    pub blocks_rejected: u64,
    /// Detection events awaiting pickup by the host.
    pub pending_detection_events: Vec<EquivocationDetectedEvent>,
}

impl CasperState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take and clear pending detection events.
    pub fn take_detection_events(&mut self) -> Vec<EquivocationDetectedEvent> {
        std::mem::take(&mut self.pending_detection_events)
    }
}
