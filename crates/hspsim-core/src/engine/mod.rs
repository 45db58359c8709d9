//! # Engine Module
//!
//! This module holds the stateful models that evolve over one simulation run,
//! together with run configuration, error types, and progress reporting.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Validated simulation parameters with a
//!   builder that rejects out-of-range inputs before the loop starts.
//! - **Drug Model** ([`drug`]) - Dosing schedule generation, superposed
//!   one-compartment concentrations, and dependency-scaled Hill effect.
//! - **Tumor Model** ([`tumor`]) - The sole owner of the mutable tumor
//!   volume; logistic growth and delayed drug-induced apoptosis.
//! - **Protein Stability** ([`proteins`]) - Synthesis/degradation dynamics of
//!   HSP90 client proteins under a recorded drug-effect trajectory.
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//!   for interactive hosts.
//! - **Error Handling** ([`error`]) - Engine error types and propagation.
//!
//! Each simulation run constructs fresh model instances; no state is shared
//! across runs.

pub mod config;
pub mod drug;
pub mod error;
pub mod progress;
pub mod proteins;
pub mod tumor;
