use std::{thread, time::Duration};

/// Blocks the calling thread between iterations.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps on the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Records requested pauses without blocking.
#[derive(Clone, Debug, Default)]
pub struct NoopSleeper {
    requested: Vec<Duration>,
}

impl NoopSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> &[Duration] {
        &self.requested
    }
}

impl Sleeper for NoopSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.requested.push(duration);
    }
}
