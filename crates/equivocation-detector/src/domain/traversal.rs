//! # Justification Traversal
//!
//! Lazy, rank-descending backward walk over a block's transitive
//! justification set.
//!
//! The walk is a breadth-first topological enumeration: nodes at higher
//! rank are yielded before nodes at lower rank. Because a parent's rank is
//! always strictly smaller than its child's, once the walk has descended
//! below some rank it can never yield that rank again - callers rely on
//! this for early termination.

use crate::ports::outbound::DagStore;
use shared_types::{BlockMetadata, Hash};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// Frontier entry ordered by `(rank, hash)`.
///
/// The heap is a max-heap, so among equal-rank nodes the larger hash is
/// visited first. Tie order between equal-rank branches is not specified
/// by the protocol; this tie-break only makes the enumeration
/// deterministic.
struct FrontierEntry(BlockMetadata);

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.0.rank == other.0.rank && self.0.hash == other.0.hash
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .rank
            .cmp(&other.0.rank)
            .then_with(|| self.0.hash.cmp(&other.0.hash))
    }
}

/// Iterator over the transitive justification set of a starting block,
/// in descending rank order. The starting block itself is not yielded.
///
/// Justification hashes that do not resolve in the DAG store are dropped
/// from the frontier: a node may have partial knowledge of the DAG during
/// sync, so an unresolvable hash is a dead end, not an error. Each
/// reachable block is yielded exactly once.
///
/// The traversal is restartable (construct a new one from the same start)
/// and performs only reads against the store.
pub struct JustificationTraversal<'a, D: DagStore> {
    dag: &'a D,
    frontier: BinaryHeap<FrontierEntry>,
    enqueued: HashSet<Hash>,
}

impl<'a, D: DagStore> JustificationTraversal<'a, D> {
    /// Start a traversal from `start`, seeding the frontier with its
    /// justified blocks.
    pub fn new(dag: &'a D, start: &BlockMetadata) -> Self {
        let mut traversal = Self {
            dag,
            frontier: BinaryHeap::new(),
            enqueued: HashSet::new(),
        };
        traversal.enqueue_justifications(start);
        traversal
    }

    fn enqueue_justifications(&mut self, node: &BlockMetadata) {
        for hash in node.justified_hashes() {
            if !self.enqueued.insert(hash) {
                continue;
            }
            // Missing justifications are dead ends, not errors.
            if let Some(meta) = self.dag.lookup(&hash) {
                self.frontier.push(FrontierEntry(meta));
            }
        }
    }
}

impl<D: DagStore> Iterator for JustificationTraversal<'_, D> {
    type Item = BlockMetadata;

    fn next(&mut self) -> Option<BlockMetadata> {
        let FrontierEntry(meta) = self.frontier.pop()?;
        self.enqueue_justifications(&meta);
        Some(meta)
    }
}
