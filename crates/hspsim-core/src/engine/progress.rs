//! Progress events for interactive hosts.
//!
//! The core never touches a UI; a host that wants a progress bar registers a
//! callback and receives phase and step events as the workflow runs.

/// The sequential phases of one simulation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationPhase {
    /// Parameter validation and model construction.
    Preparation,
    /// Dosing schedule generation over the full horizon.
    DosingSchedule,
    /// The per-step tumor dynamics loop.
    TumorDynamics,
    /// The protein stability post-pass.
    ProteinStability,
}

impl SimulationPhase {
    /// Human-readable label, e.g. for a progress bar caption.
    pub fn label(self) -> &'static str {
        match self {
            SimulationPhase::Preparation => "Preparation",
            SimulationPhase::DosingSchedule => "Dosing Schedule",
            SimulationPhase::TumorDynamics => "Tumor Dynamics",
            SimulationPhase::ProteinStability => "Protein Stability",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { phase: SimulationPhase },
    PhaseFinish,

    StepStart { total_steps: u64 },
    StepAdvance,
    StepFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
