//! Domain module for the equivocation-detection subsystem.
//!
//! ## Core Modules
//! - traversal: rank-descending walk over the justification DAG
//! - checker: pure equivocation decision procedure
//! - tracker: validator -> earliest detected fork rank

pub mod checker;
pub mod tracker;
pub mod traversal;

pub use checker::{check_equivocations, rank_of_earlier_message_from_creator};
pub use tracker::EquivocationsTracker;
pub use traversal::JustificationTraversal;
