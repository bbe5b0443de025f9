use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer, ser::SerializeStruct};

/// Per-run durations in execution order, with their running total.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    durations: Vec<f64>,
    total_time: f64,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            durations: Vec::with_capacity(capacity),
            total_time: 0.0,
        }
    }

    /// Records one run, in seconds.
    pub fn push(&mut self, seconds: f64) {
        self.durations.push(seconds);
        self.total_time += seconds;
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.durations.iter().copied()
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Mean run time in seconds; `0.0` for an empty set.
    pub fn average_time(&self) -> f64 {
        if self.durations.is_empty() {
            return 0.0;
        }
        self.total_time / self.durations.len() as f64
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            count: self.len(),
            total_time: self.total_time,
            average_time: self.average_time(),
        }
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResultSet", 4)?;
        state.serialize_field("count", &self.len())?;
        state.serialize_field("total_time", &self.total_time)?;
        state.serialize_field("average_time", &self.average_time())?;
        state.serialize_field("durations", &self.durations)?;
        state.end()
    }
}

/// Aggregate view over a [`ResultSet`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    pub count: usize,
    pub total_time: f64,
    pub average_time: f64,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "runs={} total={:.6}s average={:.6}s",
            self.count, self.total_time, self.average_time
        )
    }
}
