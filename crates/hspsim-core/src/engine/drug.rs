use crate::core::catalog::drug::DrugPk;
use crate::core::params::{E_MAX, HILL_COEFFICIENT};
use crate::core::pkpd;
use crate::engine::error::SimError;
use tracing::debug;

/// Pharmacokinetic/pharmacodynamic model of one HSP90 inhibitor.
///
/// Holds the drug's PK constants and the derived first-order elimination
/// rate; all methods are pure given those constants.
#[derive(Debug, Clone)]
pub struct DrugModel {
    pk: DrugPk,
    elimination_rate: f64,
}

impl DrugModel {
    pub fn new(pk: &DrugPk) -> Result<Self, SimError> {
        if !(pk.peak_time_hours.is_finite() && pk.peak_time_hours > 0.0) {
            return Err(SimError::invalid(
                "drug.peak_time_hours",
                pk.peak_time_hours,
                "must be a positive finite number",
            ));
        }
        if !(pk.half_life_hours.is_finite() && pk.half_life_hours > 0.0) {
            return Err(SimError::invalid(
                "drug.half_life_hours",
                pk.half_life_hours,
                "must be a positive finite number",
            ));
        }
        if !(pk.ic50_nm.is_finite() && pk.ic50_nm > 0.0) {
            return Err(SimError::invalid(
                "drug.ic50_nm",
                pk.ic50_nm,
                "must be a positive finite number",
            ));
        }
        let elimination_rate = pkpd::elimination_rate(pk.half_life_hours);
        debug!(
            drug = %pk.name,
            elimination_rate,
            "Drug model initialized."
        );
        Ok(DrugModel {
            pk: pk.clone(),
            elimination_rate,
        })
    }

    pub fn name(&self) -> &str {
        &self.pk.name
    }

    /// Dose administration times: `start, start + interval, … ≤ end`.
    pub fn generate_dosing_schedule(
        &self,
        start_hours: f64,
        end_hours: f64,
        interval_hours: f64,
    ) -> Result<Vec<f64>, SimError> {
        if !(interval_hours.is_finite() && interval_hours > 0.0) {
            return Err(SimError::invalid(
                "dosing_interval_hours",
                interval_hours,
                "must be a positive finite number",
            ));
        }
        let mut dosing_times = Vec::new();
        let mut current = start_hours;
        while current <= end_hours {
            dosing_times.push(current);
            current += interval_hours;
        }
        Ok(dosing_times)
    }

    /// Total concentration at `time_hours`: linear superposition of the
    /// single-dose curves of every dose administered at or before that time.
    /// No inter-dose clearance interaction is modeled.
    pub fn concentration_at(&self, time_hours: f64, dose_nm: f64, dosing_times: &[f64]) -> f64 {
        dosing_times
            .iter()
            .filter(|&&dose_time| time_hours >= dose_time)
            .map(|&dose_time| {
                pkpd::single_dose_concentration(
                    time_hours - dose_time,
                    dose_nm,
                    self.pk.peak_time_hours,
                    self.elimination_rate,
                )
            })
            .sum()
    }

    /// Hill-equation effect of `concentration_nm`, scaled by the tumor's
    /// HSP90 dependency. Output lies in `[0, E_MAX · dependency]`.
    pub fn effect(&self, concentration_nm: f64, dependency: f64) -> f64 {
        pkpd::hill_effect(concentration_nm, self.pk.ic50_nm, HILL_COEFFICIENT, E_MAX) * dependency
    }
}
