use std::time::{Duration, Instant};

/// Monotonic stopwatch measuring from the last reset.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Seconds since the last [`Clock::reset`], or since construction.
    pub fn elapsed(&self) -> f64 {
        self.elapsed_duration().as_secs_f64()
    }

    pub fn elapsed_duration(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Clock;
    use std::{thread, time::Duration};

    #[test]
    fn test_elapsed_is_non_decreasing() {
        let clock = Clock::new();
        let first = clock.elapsed();
        let second = clock.elapsed();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn test_reset_moves_reference_point() {
        let mut clock = Clock::new();
        thread::sleep(Duration::from_millis(20));
        let before = clock.elapsed();
        clock.reset();
        let after = clock.elapsed();
        assert!(before >= 0.02);
        assert!(after < before);
    }
}
