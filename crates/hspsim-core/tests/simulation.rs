//! End-to-end tests of the simulation workflow: determinism, series
//! invariants, and dose-response behavior across subtypes.

use hspsim::core::catalog::drug::DrugId;
use hspsim::core::catalog::subtype::SubtypeId;
use hspsim::engine::config::{SimulationParameters, SimulationParametersBuilder};
use hspsim::engine::error::SimError;
use hspsim::engine::progress::{Progress, ProgressReporter, SimulationPhase};
use hspsim::workflows::simulate;

use std::sync::Mutex;

fn default_params() -> SimulationParameters {
    SimulationParametersBuilder::new()
        .subtype_id(SubtypeId::MycnAmplified)
        .drug_id(DrugId::Aag17)
        .build()
        .unwrap()
}

#[test]
fn identical_parameters_yield_bit_identical_results() {
    let params = default_params();
    let first = simulate::run(&params, &ProgressReporter::new()).unwrap();
    let second = simulate::run(&params, &ProgressReporter::new()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn all_series_share_one_time_index() {
    let result = simulate::run(&default_params(), &ProgressReporter::new()).unwrap();
    let n = result.time_days.len();
    assert!(n > 0);
    assert_eq!(result.time_hours.len(), n);
    assert_eq!(result.volumes.len(), n);
    assert_eq!(result.concentrations.len(), n);
    assert_eq!(result.drug_effects.len(), n);
    assert_eq!(result.growth_rates.len(), n);
    assert_eq!(result.apoptosis_rates.len(), n);
    for (protein, series) in &result.protein_levels {
        assert_eq!(series.len(), n, "series length mismatch for {}", protein);
    }
}

#[test]
fn physical_invariants_hold_along_the_whole_trajectory() {
    let result = simulate::run(&default_params(), &ProgressReporter::new()).unwrap();
    for (i, &volume) in result.volumes.iter().enumerate() {
        assert!(volume >= 0.0, "negative volume at step {}", i);
    }
    for &concentration in &result.concentrations {
        assert!(concentration >= 0.0);
    }
    for &effect in &result.drug_effects {
        assert!((0.0..=1.0).contains(&effect));
    }
    for series in result.protein_levels.values() {
        for &level in series {
            assert!(level >= 0.0);
        }
    }
}

#[test]
fn daily_dosing_produces_a_substantial_periodic_effect() {
    let result = simulate::run(&default_params(), &ProgressReporter::new()).unwrap();
    let summary = result.summary();
    // 100 nM daily against an IC50 of 100 nM: the effect should cycle well
    // above zero without ever approaching saturation.
    assert!(
        summary.peak_drug_effect > 0.3 && summary.peak_drug_effect < 0.7,
        "peak effect out of expected band: {}",
        summary.peak_drug_effect
    );
    assert_eq!(result.drug_effects[0], 0.0, "no drug on board at t = 0");
}

#[test]
fn zero_dependency_override_silences_the_drug_entirely() {
    let params = SimulationParametersBuilder::new()
        .subtype_id(SubtypeId::MycnAmplified)
        .drug_id(DrugId::Aag17)
        .dependency_override(0.0)
        .build()
        .unwrap();
    let result = simulate::run(&params, &ProgressReporter::new()).unwrap();
    assert!(result.drug_effects.iter().all(|&effect| effect == 0.0));
}

#[test]
fn treatment_slows_tumor_growth_relative_to_no_dependency() {
    let treated = simulate::run(&default_params(), &ProgressReporter::new()).unwrap();
    let untreated_params = SimulationParametersBuilder::new()
        .subtype_id(SubtypeId::MycnAmplified)
        .drug_id(DrugId::Aag17)
        .dependency_override(0.0)
        .build()
        .unwrap();
    let untreated = simulate::run(&untreated_params, &ProgressReporter::new()).unwrap();
    let treated_final = *treated.volumes.last().unwrap();
    let untreated_final = *untreated.volumes.last().unwrap();
    assert!(
        treated_final < untreated_final,
        "treated tumor should end smaller: {} >= {}",
        treated_final,
        untreated_final
    );
}

#[test]
fn less_dependent_subtypes_respond_less() {
    let run_for = |id: SubtypeId| {
        let params = SimulationParametersBuilder::new()
            .subtype_id(id)
            .drug_id(DrugId::Aag17)
            .build()
            .unwrap();
        simulate::run(&params, &ProgressReporter::new()).unwrap()
    };
    let mycn = run_for(SubtypeId::MycnAmplified);
    let low_risk = run_for(SubtypeId::LowRisk);
    let mycn_peak = mycn.summary().peak_drug_effect;
    let low_risk_peak = low_risk.summary().peak_drug_effect;
    assert!(
        low_risk_peak < mycn_peak,
        "low-risk peak effect {} should be below MYCN-amplified {}",
        low_risk_peak,
        mycn_peak
    );
}

#[test]
fn summary_reports_volume_change_in_percent() {
    let result = simulate::run(&default_params(), &ProgressReporter::new()).unwrap();
    let summary = result.summary();
    let expected = (result.volumes.last().unwrap() - result.volumes[0]) / result.volumes[0] * 100.0;
    assert!((summary.volume_change_percent - expected).abs() < 1e-9);
    assert!(summary.initial_volume_mm3 > 0.0);
    assert!(summary.final_volume_mm3 > 0.0);
}

#[test]
fn invalid_drug_record_fails_before_the_loop_starts() {
    let mut params = default_params();
    params.drug.half_life_hours = 0.0;
    let result = simulate::run(&params, &ProgressReporter::new());
    assert!(matches!(
        result,
        Err(SimError::InvalidParameter {
            name: "drug.half_life_hours",
            ..
        })
    ));
}

#[test]
fn non_positive_dosing_interval_fails_before_the_loop_starts() {
    let mut params = default_params();
    params.dosing_interval_hours = -1.0;
    let result = simulate::run(&params, &ProgressReporter::new());
    assert!(matches!(
        result,
        Err(SimError::InvalidParameter {
            name: "dosing_interval_hours",
            ..
        })
    ));
}

#[test]
fn progress_reporter_sees_every_phase_and_step() {
    let events: Mutex<Vec<Progress>> = Mutex::new(Vec::new());
    let result = {
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        simulate::run(&default_params(), &reporter).unwrap()
    };

    let events = events.into_inner().unwrap();
    let phases: Vec<SimulationPhase> = events
        .iter()
        .filter_map(|event| match event {
            Progress::PhaseStart { phase } => Some(*phase),
            _ => None,
        })
        .collect();
    let step_advances = events
        .iter()
        .filter(|event| matches!(event, Progress::StepAdvance))
        .count();
    assert_eq!(
        phases,
        [
            SimulationPhase::Preparation,
            SimulationPhase::DosingSchedule,
            SimulationPhase::TumorDynamics,
            SimulationPhase::ProteinStability,
        ]
    );
    assert_eq!(step_advances, result.time_days.len());
}

#[test]
fn record_tampered_after_build_is_rejected_by_run() {
    let mut params = default_params();
    params.dose_nm = -50.0;
    let result = simulate::run(&params, &ProgressReporter::new());
    assert!(matches!(
        result,
        Err(SimError::InvalidParameter { name: "dose_nm", .. })
    ));
}

#[test]
fn result_round_trips_through_json() {
    let result = simulate::run(&default_params(), &ProgressReporter::new()).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let decoded: simulate::SimulationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.time_days.len(), result.time_days.len());
    assert_eq!(decoded.protein_levels.len(), result.protein_levels.len());
    assert_eq!(decoded.volumes[0], result.volumes[0]);
}
