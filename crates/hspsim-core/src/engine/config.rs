use crate::core::catalog::drug::{DrugId, DrugPk};
use crate::core::catalog::subtype::{SubtypeId, TumorSubtype};
use crate::core::params::{
    DEFAULT_DOSE_NM, DEFAULT_DOSING_INTERVAL_HOURS, DEFAULT_DURATION_DAYS, DEFAULT_TIME_STEP_HOURS,
};
use crate::engine::error::SimError;
use serde::{Deserialize, Serialize};

const DEFAULT_INITIAL_VOLUME_CELLS: f64 = 1e9;

/// Validated, immutable input to one simulation run.
///
/// Construct via [`SimulationParametersBuilder`], which runs
/// [`Self::validate`] before handing out a record. The fields are public so
/// a host can also deserialize a record directly; the workflow re-runs
/// [`Self::validate`] before its loop starts, so an out-of-range record
/// fails fast on either path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub subtype: TumorSubtype,
    /// Replaces the subtype's catalog dependency for this run when set.
    pub dependency_override: Option<f64>,
    pub initial_volume_cells: f64,
    pub drug: DrugPk,
    pub dose_nm: f64,
    pub dosing_interval_hours: f64,
    pub duration_days: f64,
    pub time_step_hours: f64,
}

impl SimulationParameters {
    /// Checks every numeric range constraint, reporting the first violation
    /// with the offending parameter name and value.
    pub fn validate(&self) -> Result<(), SimError> {
        require_positive("initial_volume_cells", self.initial_volume_cells)?;
        require_positive("dose_nm", self.dose_nm)?;
        require_positive("dosing_interval_hours", self.dosing_interval_hours)?;
        require_positive("duration_days", self.duration_days)?;
        require_positive("time_step_hours", self.time_step_hours)?;

        require_positive("drug.peak_time_hours", self.drug.peak_time_hours)?;
        require_positive("drug.half_life_hours", self.drug.half_life_hours)?;
        require_positive("drug.ic50_nm", self.drug.ic50_nm)?;

        require_unit_interval("subtype.dependency", self.subtype.dependency)?;
        require_positive("subtype.growth_rate", self.subtype.growth_rate)?;
        if let Some(dependency) = self.dependency_override {
            require_unit_interval("dependency_override", dependency)?;
        }

        // The time grid needs at least one point.
        if self.time_step_hours / 24.0 > self.duration_days {
            return Err(SimError::invalid(
                "time_step_hours",
                self.time_step_hours,
                "must not exceed the simulation duration",
            ));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct SimulationParametersBuilder {
    subtype: Option<TumorSubtype>,
    dependency_override: Option<f64>,
    initial_volume_cells: Option<f64>,
    drug: Option<DrugPk>,
    dose_nm: Option<f64>,
    dosing_interval_hours: Option<f64>,
    duration_days: Option<f64>,
    time_step_hours: Option<f64>,
}

impl SimulationParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subtype(mut self, subtype: TumorSubtype) -> Self {
        self.subtype = Some(subtype);
        self
    }
    pub fn subtype_id(self, id: SubtypeId) -> Self {
        self.subtype(id.parameters())
    }
    pub fn dependency_override(mut self, dependency: f64) -> Self {
        self.dependency_override = Some(dependency);
        self
    }
    pub fn initial_volume_cells(mut self, cells: f64) -> Self {
        self.initial_volume_cells = Some(cells);
        self
    }
    pub fn drug(mut self, drug: DrugPk) -> Self {
        self.drug = Some(drug);
        self
    }
    pub fn drug_id(self, id: DrugId) -> Self {
        self.drug(id.parameters())
    }
    pub fn dose_nm(mut self, dose: f64) -> Self {
        self.dose_nm = Some(dose);
        self
    }
    pub fn dosing_interval_hours(mut self, interval: f64) -> Self {
        self.dosing_interval_hours = Some(interval);
        self
    }
    pub fn duration_days(mut self, duration: f64) -> Self {
        self.duration_days = Some(duration);
        self
    }
    pub fn time_step_hours(mut self, step: f64) -> Self {
        self.time_step_hours = Some(step);
        self
    }

    pub fn build(self) -> Result<SimulationParameters, SimError> {
        let subtype = self.subtype.ok_or(SimError::MissingParameter("subtype"))?;
        let drug = self.drug.ok_or(SimError::MissingParameter("drug"))?;

        let params = SimulationParameters {
            subtype,
            dependency_override: self.dependency_override,
            initial_volume_cells: self
                .initial_volume_cells
                .unwrap_or(DEFAULT_INITIAL_VOLUME_CELLS),
            drug,
            dose_nm: self.dose_nm.unwrap_or(DEFAULT_DOSE_NM),
            dosing_interval_hours: self
                .dosing_interval_hours
                .unwrap_or(DEFAULT_DOSING_INTERVAL_HOURS),
            duration_days: self.duration_days.unwrap_or(DEFAULT_DURATION_DAYS),
            time_step_hours: self.time_step_hours.unwrap_or(DEFAULT_TIME_STEP_HOURS),
        };
        params.validate()?;
        Ok(params)
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::invalid(name, value, "must be a positive finite number"))
    }
}

fn require_unit_interval(name: &'static str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SimError::invalid(name, value, "must lie within [0, 1]"))
    }
}
