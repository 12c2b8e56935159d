//! Ports module for the equivocation-detection subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::EquivocationApi;
pub use outbound::DagStore;
