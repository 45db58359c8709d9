use crate::core::params::{PROTEIN_HALF_LIVES_BASELINE_MIN, PROTEIN_HALF_LIVES_INHIBITED_MIN};
use crate::engine::error::SimError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::LN_2;

/// One recorded point of the drug-effect trajectory.
///
/// Time and effect travel together so the stability integration can never
/// mis-align them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectSample {
    pub time_hours: f64,
    pub effect: f64,
}

/// Stability dynamics of HSP90 client oncoproteins.
///
/// Each tracked protein carries a baseline and an inhibited half-life; the
/// instantaneous drug effect interpolates between them. The tracked set is
/// derived from the baseline catalog, so adding a protein there is enough to
/// have it simulated.
#[derive(Debug, Clone)]
pub struct ProteinStabilityModel {
    proteins: Vec<&'static str>,
}

impl ProteinStabilityModel {
    pub fn new() -> Result<Self, SimError> {
        let mut proteins: Vec<&'static str> =
            PROTEIN_HALF_LIVES_BASELINE_MIN.keys().copied().collect();
        proteins.sort_unstable();

        for (&protein, &baseline) in PROTEIN_HALF_LIVES_BASELINE_MIN.entries() {
            let inhibited = PROTEIN_HALF_LIVES_INHIBITED_MIN.get(protein).copied().ok_or_else(
                || {
                    SimError::DomainViolation(format!(
                        "protein '{}' has no inhibited half-life",
                        protein
                    ))
                },
            )?;
            if inhibited > baseline {
                return Err(SimError::DomainViolation(format!(
                    "inhibited half-life of '{}' exceeds baseline ({} > {} min)",
                    protein, inhibited, baseline
                )));
            }
        }
        Ok(ProteinStabilityModel { proteins })
    }

    /// Names of the tracked proteins, in deterministic order.
    pub fn proteins(&self) -> &[&'static str] {
        &self.proteins
    }

    /// Effective half-life (minutes) under the given drug effect: linear
    /// interpolation from baseline (effect 0) to inhibited (effect 1),
    /// floored at the inhibited value. The floor holds even if upstream
    /// dependency scaling pushes the effect slightly above 1.
    pub fn effective_half_life(&self, protein: &str, drug_effect: f64) -> Result<f64, SimError> {
        let baseline = PROTEIN_HALF_LIVES_BASELINE_MIN
            .get(protein)
            .copied()
            .ok_or_else(|| SimError::UnknownProtein(protein.to_string()))?;
        let inhibited = PROTEIN_HALF_LIVES_INHIBITED_MIN
            .get(protein)
            .copied()
            .ok_or_else(|| SimError::UnknownProtein(protein.to_string()))?;
        let effective = baseline - (baseline - inhibited) * drug_effect;
        Ok(effective.max(inhibited))
    }

    /// Integrates per-protein synthesis/degradation over the sampled effect
    /// trajectory, up to and including `until_hours`.
    ///
    /// Each protein level follows `dP/dt = synthesis − k_eff·P` (explicit
    /// Euler, minutes), where synthesis equals the baseline decay constant so
    /// the system sits exactly at the steady state P = 1 under zero effect,
    /// and `k_eff` uses the instantaneous effective half-life. The reported
    /// value per point is the composite `P · (effective / baseline)`: the
    /// accumulated synthesis/degradation imbalance blended with the
    /// instantaneous half-life ratio.
    pub fn protein_levels(
        &self,
        until_hours: f64,
        samples: &[EffectSample],
    ) -> Result<HashMap<String, Vec<f64>>, SimError> {
        let mut levels: HashMap<String, Vec<f64>> = self
            .proteins
            .iter()
            .map(|&protein| (protein.to_string(), Vec::new()))
            .collect();
        let mut current: HashMap<&'static str, f64> =
            self.proteins.iter().map(|&protein| (protein, 1.0)).collect();

        let mut previous_time: Option<f64> = None;
        for sample in samples {
            if sample.time_hours > until_hours {
                break;
            }
            let dt_minutes = previous_time
                .map(|prev| (sample.time_hours - prev) * 60.0)
                .unwrap_or(0.0);

            for &protein in &self.proteins {
                let baseline = PROTEIN_HALF_LIVES_BASELINE_MIN
                    .get(protein)
                    .copied()
                    .ok_or_else(|| SimError::UnknownProtein(protein.to_string()))?;
                let effective = self.effective_half_life(protein, sample.effect)?;

                if dt_minutes > 0.0 {
                    let decay_constant = LN_2 / effective;
                    let synthesis_rate = LN_2 / baseline;
                    let level = current[protein];
                    let delta = (synthesis_rate - decay_constant * level) * dt_minutes;
                    current.insert(protein, (level + delta).max(0.0));
                }

                let stability_ratio = effective / baseline;
                if let Some(series) = levels.get_mut(protein) {
                    series.push(current[protein] * stability_ratio);
                }
            }
            previous_time = Some(sample.time_hours);
        }

        Ok(levels)
    }
}
