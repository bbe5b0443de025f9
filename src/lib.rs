//! Sequential wall-clock timing harness.
//!
//! [`Runner`] invokes a zero-argument workload a fixed number of times,
//! pausing between runs, and returns the per-run durations as a
//! [`ResultSet`]. [`report`] turns that into console output.

pub mod builtin;
pub mod clock;
pub mod config;
pub mod errors;
pub mod gate;
pub mod logging;
pub mod report;
pub mod results;
pub mod runner;
pub mod sleeper;
pub mod workload;

use std::io::{self, BufRead, Write};

pub use crate::clock::Clock;
pub use crate::config::{DEFAULT_INTERVAL_SECS, DetailMode, RunConfig, TrailingSleep};
pub use crate::errors::PerfRunError;
pub use crate::gate::{GateOutcome, ThresholdGate};
pub use crate::report::Reporter;
pub use crate::results::{ResultSet, RunSummary};
pub use crate::runner::Runner;
pub use crate::workload::{Workload, fallible};

/// Describes, runs and reports on the console, prompting on stdin for the
/// per-run listing.
pub fn run_interactive<W>(
    num_tests: u32,
    test_code: W,
    interval_secs: u64,
) -> Result<ResultSet, PerfRunError>
where
    W: Workload,
{
    run_interactive_with(
        num_tests,
        test_code,
        interval_secs,
        io::stdin().lock(),
        io::stdout().lock(),
    )
}

/// [`run_interactive`] over arbitrary streams.
///
/// An invalid configuration is reported before anything is written.
pub fn run_interactive_with<W, R, O>(
    num_tests: u32,
    test_code: W,
    interval_secs: u64,
    input: R,
    mut out: O,
) -> Result<ResultSet, PerfRunError>
where
    W: Workload,
    R: BufRead,
    O: Write,
{
    let config = RunConfig::new(num_tests, interval_secs)?;
    Reporter::new(&mut out).write_description(&config)?;
    let results = Runner::new().run_config(&config, test_code)?;
    report::present(&results, DetailMode::Prompt, input, &mut out)?;
    Ok(results)
}
