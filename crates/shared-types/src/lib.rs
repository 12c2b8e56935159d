//! # Shared Types Crate
//!
//! This crate contains the block-DAG domain entities shared across
//! subsystems of the node.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Content Addressing**: Block identity is the SHA-256 hash of the
//!   bincode-encoded header; equality of hashes is the sole identity
//!   relation.
//! - **Immutable Projections**: [`entities::BlockMetadata`] is the read-only
//!   projection of a block used by graph traversals; once derived it never
//!   changes.

pub mod entities;

pub use entities::*;
