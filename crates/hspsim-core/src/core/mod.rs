//! # Core Module
//!
//! This module provides the stateless foundation of the simulation: the
//! biological parameter catalog, pure PK/PD mathematics, and the static
//! tumor subtype and drug definitions.
//!
//! ## Architecture
//!
//! - **Parameter Catalog** ([`params`]) - Literature-derived biological
//!   constants and the protein half-life tables.
//! - **PK/PD Mathematics** ([`pkpd`]) - Pure functions for single-dose
//!   concentration curves, the Hill dose-response equation, and time-grid
//!   construction.
//! - **Catalogs** ([`catalog`]) - Enumerable tumor subtype and HSP90
//!   inhibitor definitions with typed identifiers and lookups.
//!
//! Nothing in this layer holds mutable state; everything is a constant, a
//! value type, or a pure function.

pub mod catalog;
pub mod params;
pub mod pkpd;
