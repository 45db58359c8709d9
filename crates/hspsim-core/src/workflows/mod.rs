//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] catalogs and
//! [`crate::engine`] models together into complete simulation runs.
//!
//! - **Simulation Workflow** ([`simulate`]) - Runs the full time loop for one
//!   parameter set and returns the collected time series plus a derived
//!   summary for presentation layers.

pub mod simulate;
