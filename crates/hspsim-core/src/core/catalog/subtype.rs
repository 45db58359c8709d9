use crate::core::params::{
    BASELINE_GROWTH_RATE, DEPENDENCY_ALK_MUTATED, DEPENDENCY_ATRX_ALTERED, DEPENDENCY_HIGH_MYCN,
    DEPENDENCY_LOW_RISK,
};
use crate::engine::error::SimError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Typed identifier for the built-in neuroblastoma subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubtypeId {
    MycnAmplified,
    AlkMutated,
    AtrxAltered,
    LowRisk,
}

impl FromStr for SubtypeId {
    type Err = SimError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SubtypeId::from_name(name).ok_or_else(|| SimError::UnknownSubtype(name.to_string()))
    }
}

impl SubtypeId {
    pub const ALL: [SubtypeId; 4] = [
        SubtypeId::MycnAmplified,
        SubtypeId::AlkMutated,
        SubtypeId::AtrxAltered,
        SubtypeId::LowRisk,
    ];

    /// Resolves a catalog key (e.g. "MYCN Amplified") to an identifier.
    pub fn from_name(name: &str) -> Option<SubtypeId> {
        match name {
            "MYCN Amplified" => Some(SubtypeId::MycnAmplified),
            "ALK Mutated" => Some(SubtypeId::AlkMutated),
            "ATRX Altered" => Some(SubtypeId::AtrxAltered),
            "Low Risk" => Some(SubtypeId::LowRisk),
            _ => None,
        }
    }

    /// Builds the full parameter record for this subtype.
    pub fn parameters(self) -> TumorSubtype {
        match self {
            SubtypeId::MycnAmplified => TumorSubtype::new(
                "MYCN Amplified (High Risk)",
                DEPENDENCY_HIGH_MYCN,
                BASELINE_GROWTH_RATE * 1.2, // more aggressive
                &[("MYCN", 0.5), ("ALK", 0.2), ("AKT", 0.2), ("HIF1A", 0.1)],
            ),
            SubtypeId::AlkMutated => TumorSubtype::new(
                "ALK Mutated",
                DEPENDENCY_ALK_MUTATED,
                BASELINE_GROWTH_RATE * 1.1,
                &[("MYCN", 0.2), ("ALK", 0.5), ("AKT", 0.2), ("HIF1A", 0.1)],
            ),
            SubtypeId::AtrxAltered => TumorSubtype::new(
                "ATRX Altered",
                DEPENDENCY_ATRX_ALTERED,
                BASELINE_GROWTH_RATE * 0.9,
                &[("MYCN", 0.2), ("ALK", 0.2), ("AKT", 0.3), ("HIF1A", 0.3)],
            ),
            SubtypeId::LowRisk => TumorSubtype::new(
                "Low Risk Subtype",
                DEPENDENCY_LOW_RISK,
                BASELINE_GROWTH_RATE * 0.7,
                &[("MYCN", 0.15), ("ALK", 0.15), ("AKT", 0.35), ("HIF1A", 0.35)],
            ),
        }
    }
}

/// A neuroblastoma tumor subtype with its biological characteristics.
///
/// `pathway_weights` records the relative importance of each client protein
/// pathway to the subtype. The weights need not sum to 1 and are not consumed
/// by the simulation itself; they are part of the subtype's identity and are
/// available to presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TumorSubtype {
    pub name: String,
    /// HSP90 dependency multiplier in [0, 1].
    pub dependency: f64,
    /// Baseline growth rate, per day.
    pub growth_rate: f64,
    pub pathway_weights: HashMap<String, f64>,
}

impl TumorSubtype {
    fn new(name: &str, dependency: f64, growth_rate: f64, weights: &[(&str, f64)]) -> Self {
        TumorSubtype {
            name: name.to_string(),
            dependency,
            growth_rate,
            pathway_weights: weights
                .iter()
                .map(|(protein, weight)| (protein.to_string(), *weight))
                .collect(),
        }
    }
}
