//! Biological parameters for the neuroblastoma HSP90 inhibitor simulation.
//!
//! All values are drawn from published literature for neuroblastoma cell
//! lines and first-generation HSP90 inhibitors.

use phf::phf_map;

// Tumor growth parameters.
pub const BASELINE_GROWTH_RATE: f64 = 0.03; // per day (literature range: 0.015-0.045)
pub const CARRYING_CAPACITY: f64 = 1e11; // cells
pub const BASE_APOPTOSIS_RATE: f64 = 0.001; // per day

/// Approximate packing density of tumor tissue, cells per mm³.
pub const CELLS_PER_MM3: f64 = 1e6;

// HSP90 dependency multipliers (tumor sensitivity to chaperone inhibition).
pub const DEPENDENCY_HIGH_MYCN: f64 = 1.0;
pub const DEPENDENCY_ALK_MUTATED: f64 = 0.8;
pub const DEPENDENCY_ATRX_ALTERED: f64 = 0.5;
pub const DEPENDENCY_LOW_RISK: f64 = 0.2;

// Dose-response parameters.
pub const HILL_COEFFICIENT: f64 = 1.2;
pub const E_MAX: f64 = 1.0; // maximum effect, scaled downstream by dependency

// Apoptosis parameters.
pub const APOPTOSIS_DELAY_HOURS: f64 = 12.0;
pub const APOPTOSIS_MULTIPLIER: f64 = 1.5;

/// Baseline half-lives (minutes) of HSP90 client oncoproteins without
/// inhibition. The tracked protein set is derived from this map's keys.
pub static PROTEIN_HALF_LIVES_BASELINE_MIN: phf::Map<&'static str, f64> = phf_map! {
    "MYCN" => 60.0,
    "ALK" => 240.0,
    "AKT" => 360.0,
    "HIF1A" => 30.0,
};

/// Half-lives (minutes) of the same clients under full HSP90 inhibition.
pub static PROTEIN_HALF_LIVES_INHIBITED_MIN: phf::Map<&'static str, f64> = phf_map! {
    "MYCN" => 15.0,
    "ALK" => 60.0,
    "AKT" => 120.0,
    "HIF1A" => 10.0,
};

// Simulation defaults.
pub const DEFAULT_DURATION_DAYS: f64 = 30.0;
pub const DEFAULT_TIME_STEP_HOURS: f64 = 2.4; // 0.1 days
pub const DEFAULT_DOSE_NM: f64 = 100.0;
pub const DEFAULT_DOSING_INTERVAL_HOURS: f64 = 24.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inhibited_catalog_covers_every_baseline_protein() {
        for &protein in PROTEIN_HALF_LIVES_BASELINE_MIN.keys() {
            assert!(
                PROTEIN_HALF_LIVES_INHIBITED_MIN.contains_key(protein),
                "Protein {} missing from inhibited catalog",
                protein
            );
        }
        assert_eq!(
            PROTEIN_HALF_LIVES_BASELINE_MIN.len(),
            PROTEIN_HALF_LIVES_INHIBITED_MIN.len()
        );
    }

    #[test]
    fn inhibition_shortens_every_half_life() {
        for (&protein, &baseline) in PROTEIN_HALF_LIVES_BASELINE_MIN.entries() {
            let inhibited = *PROTEIN_HALF_LIVES_INHIBITED_MIN.get(protein).unwrap();
            assert!(
                inhibited < baseline,
                "Inhibited half-life of {} should be below baseline: {} >= {}",
                protein,
                inhibited,
                baseline
            );
        }
    }
}
