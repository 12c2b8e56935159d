//! # equivocation-detector
//!
//! Equivocation detection for a DAG-based proof-of-stake consensus engine.
//!
//! ## Overview
//!
//! Given a block-DAG built from previously validated blocks, this
//! subsystem:
//! - decides whether a newly arriving block reveals that its creator
//!   signed two causally-incomparable messages (an equivocation),
//! - tracks known equivocators and the earliest DAG rank at which each
//!   fork became visible,
//! - rejects every further block from a tracked validator.
//!
//! ## Architecture
//!
//! ```text
//! Admission Pipeline ──Block──→ EquivocationService
//!                                    │
//!                                    ├── checker ──→ JustificationTraversal ──→ DagStore
//!                                    │
//!                                    └── CasperState (EquivocationsTracker)
//! ```
//!
//! Detection is deliberately partial: only the first equivocation
//! reachable through the justification graph of each observed block is
//! found. Downstream safety logic is designed around exactly this
//! guarantee; the tracker keeps flagged validators blocked permanently
//! regardless.
//!
//! ## Example
//!
//! ```rust,ignore
//! use equivocation_detector::{EquivocationService, InMemoryDagStore};
//! use equivocation_detector::ports::inbound::EquivocationApi;
//! use std::sync::Arc;
//!
//! let dag = Arc::new(InMemoryDagStore::new());
//! let service = EquivocationService::new(Arc::clone(&dag));
//!
//! // Reject or accept a candidate block
//! service.check_equivocation_with_update(&block).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;
pub mod state;

pub use adapters::InMemoryDagStore;
pub use domain::{
    check_equivocations, rank_of_earlier_message_from_creator, EquivocationsTracker,
    JustificationTraversal,
};
pub use error::{EquivocationError, EquivocationResult};
pub use events::EquivocationDetectedEvent;
pub use ports::inbound::EquivocationApi;
pub use ports::outbound::DagStore;
pub use service::EquivocationService;
pub use state::CasperState;
