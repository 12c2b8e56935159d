//! Events module for the equivocation-detection subsystem.

pub mod outgoing;

pub use outgoing::EquivocationDetectedEvent;
