//! Sequential timing loop.
//!
//! The runner performs no console I/O; it hands back a [`ResultSet`] and
//! leaves presentation to [`crate::report`].

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    time::Duration,
};

use tracing::{debug, info, warn};

use crate::{
    PerfRunError,
    clock::Clock,
    config::RunConfig,
    results::ResultSet,
    sleeper::{Sleeper, ThreadSleeper},
    workload::Workload,
};

pub struct Runner<S = ThreadSleeper> {
    clock: Clock,
    sleeper: S,
}

impl Runner<ThreadSleeper> {
    pub fn new() -> Self {
        Self::with_sleeper(ThreadSleeper)
    }
}

impl Default for Runner<ThreadSleeper> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Runner<S>
where
    S: Sleeper,
{
    pub fn with_sleeper(sleeper: S) -> Self {
        Self {
            clock: Clock::new(),
            sleeper,
        }
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Times `num_tests` invocations of `test_code`, pausing `interval_secs`
    /// seconds after each one.
    pub fn run<W>(
        &mut self,
        num_tests: u32,
        test_code: W,
        interval_secs: u64,
    ) -> Result<ResultSet, PerfRunError>
    where
        W: Workload,
    {
        let config = RunConfig::new(num_tests, interval_secs)?;
        self.run_config(&config, test_code)
    }

    pub fn run_config<W>(
        &mut self,
        config: &RunConfig,
        mut test_code: W,
    ) -> Result<ResultSet, PerfRunError>
    where
        W: Workload,
    {
        let interval = Duration::from_secs(config.interval_secs());
        let mut results = ResultSet::with_capacity(config.num_tests() as usize);
        info!(
            tests = config.num_tests(),
            interval_secs = config.interval_secs(),
            "starting run"
        );

        for iteration in 1..=config.num_tests() {
            self.clock.reset();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| test_code.invoke()));
            let elapsed = self.clock.elapsed();

            let failure = match outcome {
                Ok(Ok(())) => None,
                Ok(Err(err)) => Some(err.to_string()),
                Err(payload) => Some(format!("panicked: {}", panic_message(payload.as_ref()))),
            };
            if let Some(message) = failure {
                warn!(
                    iteration,
                    completed = results.len(),
                    total_time = results.total_time(),
                    partial = ?results.durations(),
                    "workload failed, aborting run"
                );
                return Err(PerfRunError::callable_failure(iteration, results, message));
            }

            debug!(iteration, seconds = elapsed, "run finished");
            results.push(elapsed);

            if config.sleeps_after(iteration) {
                self.sleeper.sleep(interval);
            }
        }

        info!(summary = %results.summary(), "run complete");
        Ok(results)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
