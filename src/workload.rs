//! The unit of work timed by the runner.

use std::error::Error;

pub type WorkloadError = Box<dyn Error + Send + Sync>;

/// A zero-argument unit of work.
///
/// Any `FnMut()` closure or function is a workload. Use [`fallible`] to time
/// code that can report failure through a `Result`.
pub trait Workload {
    fn invoke(&mut self) -> Result<(), WorkloadError>;
}

impl<F> Workload for F
where
    F: FnMut(),
{
    fn invoke(&mut self) -> Result<(), WorkloadError> {
        (self)();
        Ok(())
    }
}

/// Adapter returned by [`fallible`].
pub struct Fallible<F> {
    inner: F,
}

/// Wraps a closure returning `Result` so its errors abort the run.
pub fn fallible<F, E>(inner: F) -> Fallible<F>
where
    F: FnMut() -> Result<(), E>,
    E: Into<WorkloadError>,
{
    Fallible { inner }
}

impl<F, E> Workload for Fallible<F>
where
    F: FnMut() -> Result<(), E>,
    E: Into<WorkloadError>,
{
    fn invoke(&mut self) -> Result<(), WorkloadError> {
        (self.inner)().map_err(Into::into)
    }
}
