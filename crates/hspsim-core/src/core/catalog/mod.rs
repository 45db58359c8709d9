//! Static catalogs of tumor subtypes and HSP90 inhibitors.
//!
//! These are the enumerable options a host presents to the user; each entry
//! resolves to an owned parameter record consumed by the engine.

pub mod drug;
pub mod subtype;
