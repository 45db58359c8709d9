//! # hspsim
//!
//! A library for simulating neuroblastoma tumor response to HSP90 inhibitor
//! therapy. It couples a one-compartment pharmacokinetic model, a Hill
//! dose-response model, a logistic tumor growth/apoptosis model, and a
//! synthesis/degradation model of HSP90 client protein stability into a
//! single deterministic time-stepped simulation.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the static biological parameter
//!   catalog (growth rates, dependency multipliers, protein half-lives, drug
//!   PK constants), pure PK/PD mathematics (`pkpd`), and the tumor subtype
//!   and drug catalogs.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer holds the models
//!   that evolve during a run: the drug model (dosing schedule, concentration
//!   superposition, dependency-scaled effect), the tumor model (the sole
//!   owner of the mutable tumor volume), the protein stability model, plus
//!   validated run configuration, error types, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   [`workflows::simulate::run`] orchestrates the full time loop and returns
//!   an immutable [`workflows::simulate::SimulationResult`] for a host
//!   presentation layer to consume.

pub mod core;
pub mod engine;
pub mod workflows;
