use tracing::warn;

use crate::{PerfRunError, results::ResultSet};

#[derive(Clone, Debug, PartialEq)]
pub enum GateOutcome {
    Pass,
    Fail(Vec<String>),
}

impl GateOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, GateOutcome::Pass)
    }
}

/// Upper bounds a finished run must stay under.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThresholdGate {
    max_average_secs: Option<f64>,
    max_single_secs: Option<f64>,
}

impl ThresholdGate {
    /// Thresholds must be finite and non-negative.
    pub fn new(
        max_average_secs: Option<f64>,
        max_single_secs: Option<f64>,
    ) -> Result<Self, PerfRunError> {
        check_threshold("max average", max_average_secs)?;
        check_threshold("max single", max_single_secs)?;
        Ok(Self {
            max_average_secs,
            max_single_secs,
        })
    }

    pub fn max_average_secs(&self) -> Option<f64> {
        self.max_average_secs
    }

    pub fn max_single_secs(&self) -> Option<f64> {
        self.max_single_secs
    }

    pub fn is_empty(&self) -> bool {
        self.max_average_secs.is_none() && self.max_single_secs.is_none()
    }

    pub fn evaluate(&self, results: &ResultSet) -> GateOutcome {
        let mut failures = Vec::new();
        if let Some(max) = self.max_average_secs {
            let average = results.average_time();
            if average > max {
                failures.push(format!("average {average:.6}s exceeds threshold {max}s"));
            }
        }
        if let Some(max) = self.max_single_secs {
            for (idx, seconds) in results.iter().enumerate() {
                if seconds > max {
                    failures.push(format!(
                        "run {} took {seconds:.6}s, exceeds threshold {max}s",
                        idx + 1
                    ));
                }
            }
        }
        if failures.is_empty() {
            GateOutcome::Pass
        } else {
            for reason in &failures {
                warn!(%reason, "threshold gate failed");
            }
            GateOutcome::Fail(failures)
        }
    }
}

fn check_threshold(name: &str, value: Option<f64>) -> Result<(), PerfRunError> {
    match value {
        Some(secs) if !secs.is_finite() || secs < 0.0 => {
            Err(PerfRunError::invalid_configuration(format!(
                "{name} threshold must be finite and non-negative, got {secs}"
            )))
        }
        _ => Ok(()),
    }
}
