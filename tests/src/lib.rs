//! # Casper-DAG Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-crate detector scenarios
//!     ├── scenarios.rs  # Admission-pipeline choreography (scenarios A-D)
//!     └── concurrency.rs# Concurrent checks against one replica state
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p detector-tests
//!
//! # By category
//! cargo test -p detector-tests integration::
//! ```

#![allow(dead_code)]
