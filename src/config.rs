//! Run configuration.
//!
//! A [`RunConfig`] is validated once at construction and is immutable for the
//! duration of a run.

use clap::ValueEnum;

use crate::PerfRunError;

/// Default pause between iterations, in **seconds**.
///
/// The harness this tool replaces named the parameter as if it were
/// milliseconds but slept for whole seconds. The value and the unit are kept
/// as seconds; every API that takes an interval says `secs` in its name.
pub const DEFAULT_INTERVAL_SECS: u64 = 1000;

/// Whether the pause is also taken after the final iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingSleep {
    /// Sleep after every iteration, including the last one.
    #[default]
    Always,
    /// Sleep only between iterations.
    SkipLast,
}

/// Controls whether per-run durations are listed after the summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DetailMode {
    /// Ask on the input stream; only an answer of `1` shows the listing.
    #[default]
    Prompt,
    /// Always list every run.
    Always,
    /// Never list individual runs.
    Never,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    num_tests: u32,
    interval_secs: u64,
    trailing_sleep: TrailingSleep,
}

impl RunConfig {
    pub fn new(num_tests: u32, interval_secs: u64) -> Result<Self, PerfRunError> {
        if num_tests == 0 {
            return Err(PerfRunError::invalid_configuration(
                "number of tests must be at least 1",
            ));
        }
        Ok(Self {
            num_tests,
            interval_secs,
            trailing_sleep: TrailingSleep::Always,
        })
    }

    /// Uses [`DEFAULT_INTERVAL_SECS`] between runs.
    pub fn with_default_interval(num_tests: u32) -> Result<Self, PerfRunError> {
        Self::new(num_tests, DEFAULT_INTERVAL_SECS)
    }

    /// Like [`RunConfig::new`] but for signed inputs, rejecting negatives.
    pub fn from_signed(num_tests: i64, interval_secs: i64) -> Result<Self, PerfRunError> {
        let num_tests = u32::try_from(num_tests).map_err(|_| {
            PerfRunError::invalid_configuration(format!(
                "number of tests must be between 1 and {}, got {num_tests}",
                u32::MAX
            ))
        })?;
        let interval_secs = u64::try_from(interval_secs).map_err(|_| {
            PerfRunError::invalid_configuration(format!(
                "interval must not be negative, got {interval_secs}"
            ))
        })?;
        Self::new(num_tests, interval_secs)
    }

    pub fn with_trailing_sleep(mut self, trailing_sleep: TrailingSleep) -> Self {
        self.trailing_sleep = trailing_sleep;
        self
    }

    pub fn num_tests(&self) -> u32 {
        self.num_tests
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub fn trailing_sleep(&self) -> TrailingSleep {
        self.trailing_sleep
    }

    /// Total time spent sleeping across the run, in seconds.
    pub fn projected_secs(&self) -> u64 {
        let sleeps = match self.trailing_sleep {
            TrailingSleep::Always => u64::from(self.num_tests),
            TrailingSleep::SkipLast => u64::from(self.num_tests - 1),
        };
        sleeps.saturating_mul(self.interval_secs)
    }

    pub(crate) fn sleeps_after(&self, iteration: u32) -> bool {
        match self.trailing_sleep {
            TrailingSleep::Always => true,
            TrailingSleep::SkipLast => iteration < self.num_tests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_INTERVAL_SECS, RunConfig, TrailingSleep};

    #[test]
    fn test_default_interval_is_in_seconds() {
        let cfg = RunConfig::with_default_interval(2).unwrap();
        assert_eq!(cfg.interval_secs(), DEFAULT_INTERVAL_SECS);
        assert_eq!(cfg.projected_secs(), 2 * DEFAULT_INTERVAL_SECS);
        assert_eq!(cfg.trailing_sleep(), TrailingSleep::Always);
    }

    #[test]
    fn test_sleeps_after_respects_trailing_policy() {
        let always = RunConfig::new(3, 1).unwrap();
        assert!(always.sleeps_after(3));
        let skip = always.with_trailing_sleep(TrailingSleep::SkipLast);
        assert!(skip.sleeps_after(1));
        assert!(skip.sleeps_after(2));
        assert!(!skip.sleeps_after(3));
    }

    #[test]
    fn test_projected_secs_saturates() {
        let cfg = RunConfig::new(u32::MAX, u64::MAX).unwrap();
        assert_eq!(cfg.projected_secs(), u64::MAX);
    }

    #[test]
    fn test_projected_secs_drops_trailing_pause() {
        let cfg = RunConfig::new(4, 10)
            .unwrap()
            .with_trailing_sleep(TrailingSleep::SkipLast);
        assert_eq!(cfg.projected_secs(), 30);
    }
}
