//! # Equivocation Metrics
//!
//! Prometheus metrics for monitoring detector activity.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! equivocation-detector = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `equivocation_detections_total` - Counter of newly detected equivocations
//! - `equivocation_blocks_rejected_total` - Counter of blocks rejected from tracked validators
//! - `equivocation_tracked_validators` - Gauge of currently tracked validators

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_gauge, IntCounter, IntGauge};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total equivocations detected (first detections only)
    pub static ref EQUIVOCATIONS_DETECTED: IntCounter = register_int_counter!(
        "equivocation_detections_total",
        "Total number of newly detected equivocations"
    )
    .expect("Failed to create EQUIVOCATIONS_DETECTED metric");

    /// Total blocks rejected because the creator was tracked
    pub static ref BLOCKS_REJECTED: IntCounter = register_int_counter!(
        "equivocation_blocks_rejected_total",
        "Total number of blocks rejected from tracked validators"
    )
    .expect("Failed to create BLOCKS_REJECTED metric");

    /// Currently tracked validators
    pub static ref TRACKED_VALIDATORS: IntGauge = register_int_gauge!(
        "equivocation_tracked_validators",
        "Number of validators currently tracked as equivocators"
    )
    .expect("Failed to create TRACKED_VALIDATORS metric");
}

/// Record a first detection.
#[cfg(feature = "metrics")]
pub fn record_detection(tracked_total: usize) {
    EQUIVOCATIONS_DETECTED.inc();
    TRACKED_VALIDATORS.set(tracked_total as i64);
}

#[cfg(not(feature = "metrics"))]
pub fn record_detection(_tracked_total: usize) {}

/// Record a rejected block.
#[cfg(feature = "metrics")]
pub fn record_rejection() {
    BLOCKS_REJECTED.inc();
}

#[cfg(not(feature = "metrics"))]
pub fn record_rejection() {}
