use crate::core::params::CELLS_PER_MM3;
use crate::core::pkpd::linspace;
use crate::engine::config::SimulationParameters;
use crate::engine::drug::DrugModel;
use crate::engine::error::SimError;
use crate::engine::progress::{Progress, ProgressReporter, SimulationPhase};
use crate::engine::proteins::{EffectSample, ProteinStabilityModel};
use crate::engine::tumor::TumorModel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, instrument};

/// Complete output of one simulation run.
///
/// All scalar series share the same length and time index; each per-protein
/// stability series matches that length as well. The record is immutable
/// once produced and is a pure function of the input parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub time_days: Vec<f64>,
    pub time_hours: Vec<f64>,
    /// Tumor volume, cells.
    pub volumes: Vec<f64>,
    /// Drug concentration, nM.
    pub concentrations: Vec<f64>,
    /// Dependency-scaled Hill effect, dimensionless.
    pub drug_effects: Vec<f64>,
    /// Logistic growth rate, cells per day.
    pub growth_rates: Vec<f64>,
    /// Apoptosis rate, cells per day.
    pub apoptosis_rates: Vec<f64>,
    /// Composite relative stability per tracked client protein.
    pub protein_levels: HashMap<String, Vec<f64>>,
}

/// Headline numbers a dashboard shows next to the charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub initial_volume_mm3: f64,
    pub final_volume_mm3: f64,
    pub volume_change_percent: f64,
    pub peak_drug_effect: f64,
}

impl SimulationResult {
    pub fn summary(&self) -> SimulationSummary {
        let initial_cells = self.volumes.first().copied().unwrap_or(0.0);
        let final_cells = self.volumes.last().copied().unwrap_or(0.0);
        let initial_volume_mm3 = initial_cells / CELLS_PER_MM3;
        let final_volume_mm3 = final_cells / CELLS_PER_MM3;
        let volume_change_percent = if initial_cells > 0.0 {
            (final_cells - initial_cells) / initial_cells * 100.0
        } else {
            0.0
        };
        let peak_drug_effect = self.drug_effects.iter().copied().fold(0.0, f64::max);
        SimulationSummary {
            initial_volume_mm3,
            final_volume_mm3,
            volume_change_percent,
            peak_drug_effect,
        }
    }
}

/// Runs one complete simulation.
///
/// The parameter record is re-validated before anything else, so an
/// out-of-range value fails fast even when the record was deserialized or
/// edited after building. Fresh model instances are constructed per
/// invocation, so repeated runs with identical parameters produce
/// bit-identical results. Per time step
/// the driver computes concentration, then effect, then advances the tumor;
/// the growth and apoptosis rates recorded for a step use that step's effect
/// and the post-step volume. Protein stability is computed once afterwards
/// from the full recorded effect trajectory; the recorded effects are input
/// data to the protein model, not live feedback.
#[instrument(skip_all, name = "simulation_workflow")]
pub fn run(
    params: &SimulationParameters,
    reporter: &ProgressReporter,
) -> Result<SimulationResult, SimError> {
    // === Phase 0: Validation and model construction ===
    reporter.report(Progress::PhaseStart {
        phase: SimulationPhase::Preparation,
    });
    info!(
        subtype = %params.subtype.name,
        drug = %params.drug.name,
        duration_days = params.duration_days,
        "Starting simulation run."
    );
    params.validate()?;

    let drug = DrugModel::new(&params.drug)?;
    let mut tumor = TumorModel::new(&params.subtype, params.initial_volume_cells)?;
    if let Some(dependency) = params.dependency_override {
        tumor.set_dependency(dependency)?;
    }
    let protein_model = ProteinStabilityModel::new()?;

    let time_step_days = params.time_step_hours / 24.0;
    let num_steps = (params.duration_days / time_step_days) as usize;
    let time_days = linspace(0.0, params.duration_days, num_steps);
    let time_hours: Vec<f64> = time_days.iter().map(|&day| day * 24.0).collect();
    let end_hour = time_hours.last().copied().unwrap_or(0.0);
    reporter.report(Progress::PhaseFinish);

    // === Phase 1: Dosing schedule over the full horizon ===
    reporter.report(Progress::PhaseStart {
        phase: SimulationPhase::DosingSchedule,
    });
    let dosing_times =
        drug.generate_dosing_schedule(0.0, end_hour, params.dosing_interval_hours)?;
    info!(doses = dosing_times.len(), "Dosing schedule generated.");
    reporter.report(Progress::Message(format!(
        "{} doses scheduled",
        dosing_times.len()
    )));
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Tumor dynamics loop ===
    reporter.report(Progress::PhaseStart {
        phase: SimulationPhase::TumorDynamics,
    });
    reporter.report(Progress::StepStart {
        total_steps: num_steps as u64,
    });

    let mut volumes = Vec::with_capacity(num_steps);
    let mut concentrations = Vec::with_capacity(num_steps);
    let mut drug_effects = Vec::with_capacity(num_steps);
    let mut growth_rates = Vec::with_capacity(num_steps);
    let mut apoptosis_rates = Vec::with_capacity(num_steps);

    for &t_hours in &time_hours {
        let concentration = drug.concentration_at(t_hours, params.dose_nm, &dosing_times);
        let effect = drug.effect(concentration, tumor.dependency());

        let volume = tumor.step(effect, t_hours, time_step_days);

        concentrations.push(concentration);
        drug_effects.push(effect);
        volumes.push(volume);
        growth_rates.push(tumor.growth_rate_per_day(effect));
        apoptosis_rates.push(tumor.apoptosis_rate_per_day(effect, t_hours));

        reporter.report(Progress::StepAdvance);
    }
    reporter.report(Progress::StepFinish);
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Protein stability post-pass ===
    reporter.report(Progress::PhaseStart {
        phase: SimulationPhase::ProteinStability,
    });
    let samples: Vec<EffectSample> = time_hours
        .iter()
        .zip(drug_effects.iter())
        .map(|(&time_hours, &effect)| EffectSample { time_hours, effect })
        .collect();
    let protein_levels = protein_model.protein_levels(end_hour, &samples)?;
    reporter.report(Progress::PhaseFinish);

    info!(
        steps = num_steps,
        final_volume_cells = tumor.volume(),
        "Simulation run complete."
    );

    Ok(SimulationResult {
        time_days,
        time_hours,
        volumes,
        concentrations,
        drug_effects,
        growth_rates,
        apoptosis_rates,
        protein_levels,
    })
}
