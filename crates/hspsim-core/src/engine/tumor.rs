use crate::core::catalog::subtype::TumorSubtype;
use crate::core::params::{
    APOPTOSIS_DELAY_HOURS, APOPTOSIS_MULTIPLIER, BASE_APOPTOSIS_RATE, CARRYING_CAPACITY,
    CELLS_PER_MM3,
};
use crate::engine::error::SimError;

/// Tumor growth and apoptosis dynamics for one simulation run.
///
/// This model is the sole owner of the mutable tumor volume; [`Self::step`]
/// is its only mutator. A fresh instance is constructed per run, so no state
/// leaks between runs.
#[derive(Debug, Clone)]
pub struct TumorModel {
    growth_rate: f64,
    carrying_capacity: f64,
    dependency: f64,
    base_apoptosis: f64,
    volume: f64,
    initial_volume: f64,
}

impl TumorModel {
    pub fn new(subtype: &TumorSubtype, initial_volume_cells: f64) -> Result<Self, SimError> {
        if !(initial_volume_cells.is_finite() && initial_volume_cells > 0.0) {
            return Err(SimError::invalid(
                "initial_volume_cells",
                initial_volume_cells,
                "must be a positive finite number",
            ));
        }
        if !(0.0..=1.0).contains(&subtype.dependency) {
            return Err(SimError::invalid(
                "subtype.dependency",
                subtype.dependency,
                "must lie within [0, 1]",
            ));
        }
        Ok(TumorModel {
            growth_rate: subtype.growth_rate,
            carrying_capacity: CARRYING_CAPACITY,
            dependency: subtype.dependency,
            base_apoptosis: BASE_APOPTOSIS_RATE,
            volume: initial_volume_cells,
            initial_volume: initial_volume_cells,
        })
    }

    /// Current tumor volume in cells.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Current tumor volume in mm³, assuming ~10⁶ cells per mm³.
    pub fn volume_mm3(&self) -> f64 {
        self.volume / CELLS_PER_MM3
    }

    pub fn dependency(&self) -> f64 {
        self.dependency
    }

    /// Replaces the subtype's catalog dependency, e.g. with a user override.
    pub fn set_dependency(&mut self, dependency: f64) -> Result<(), SimError> {
        if !(dependency.is_finite() && (0.0..=1.0).contains(&dependency)) {
            return Err(SimError::invalid(
                "dependency",
                dependency,
                "must lie within [0, 1]",
            ));
        }
        self.dependency = dependency;
        Ok(())
    }

    /// Logistic growth under drug inhibition: `r·V·(1 − V/K)·(1 − E)`,
    /// floored at zero so a capacity overshoot never produces negative
    /// growth from this term alone. Cells per day.
    pub fn growth_rate_per_day(&self, drug_effect: f64) -> f64 {
        let volume_factor = 1.0 - self.volume / self.carrying_capacity;
        let drug_inhibition = 1.0 - drug_effect;
        let growth = self.growth_rate * self.volume * volume_factor * drug_inhibition;
        growth.max(0.0)
    }

    /// Apoptosis rate in cells per day: baseline death plus a drug-induced
    /// component that ramps in linearly over the first
    /// [`APOPTOSIS_DELAY_HOURS`] of the simulation and applies at full
    /// magnitude thereafter.
    ///
    /// The ramp is anchored at simulation t = 0, not at the first dose. This
    /// models a disease-progression ramp that is independent of when dosing
    /// starts, and matches the reference parameterization.
    pub fn apoptosis_rate_per_day(&self, drug_effect: f64, time_hours: f64) -> f64 {
        let delay_progress = if time_hours >= APOPTOSIS_DELAY_HOURS {
            1.0
        } else {
            time_hours / APOPTOSIS_DELAY_HOURS
        };
        let drug_induced = self.dependency
            * drug_effect
            * APOPTOSIS_MULTIPLIER
            * self.base_apoptosis
            * delay_progress;
        (self.base_apoptosis + drug_induced) * self.volume
    }

    /// Advances the volume by one explicit forward-Euler step:
    /// `V ← max(0, V + (growth − apoptosis)·Δt)`. Returns the new volume.
    pub fn step(&mut self, drug_effect: f64, time_hours: f64, time_step_days: f64) -> f64 {
        let growth = self.growth_rate_per_day(drug_effect);
        let apoptosis = self.apoptosis_rate_per_day(drug_effect, time_hours);
        let delta = (growth - apoptosis) * time_step_days;
        self.volume = (self.volume + delta).max(0.0);
        self.volume
    }

    /// Restores the volume recorded at construction.
    pub fn reset(&mut self) {
        self.volume = self.initial_volume;
    }
}
