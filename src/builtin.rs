//! Workloads shipped with the command-line tool.

use std::{hint::black_box, thread, time::Duration};

use clap::ValueEnum;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::workload::{Workload, WorkloadError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WorkloadKind {
    /// Integer arithmetic busy loop.
    Spin,
    /// Sleeps for `size` milliseconds.
    Sleep,
    /// Sorts `size` seeded random integers.
    Sort,
}

pub enum BuiltinWorkload {
    Spin { iterations: u64 },
    Sleep { millis: u64 },
    SortRandom { len: usize, rng: StdRng },
}

impl BuiltinWorkload {
    pub fn new(kind: WorkloadKind, size: u64, seed: u64) -> Self {
        match kind {
            WorkloadKind::Spin => BuiltinWorkload::Spin { iterations: size },
            WorkloadKind::Sleep => BuiltinWorkload::Sleep { millis: size },
            WorkloadKind::Sort => BuiltinWorkload::SortRandom {
                len: size as usize,
                rng: StdRng::seed_from_u64(seed),
            },
        }
    }
}

impl Workload for BuiltinWorkload {
    fn invoke(&mut self) -> Result<(), WorkloadError> {
        match self {
            BuiltinWorkload::Spin { iterations } => {
                black_box(spin(*iterations));
            }
            BuiltinWorkload::Sleep { millis } => {
                thread::sleep(Duration::from_millis(*millis));
            }
            BuiltinWorkload::SortRandom { len, rng } => {
                let mut values: Vec<u64> = (0..*len).map(|_| rng.r#gen()).collect();
                values.sort_unstable();
                black_box(values);
            }
        }
        Ok(())
    }
}

fn spin(iterations: u64) -> u64 {
    let mut acc = 0u64;
    for i in 0..black_box(iterations) {
        acc = acc.wrapping_mul(31).wrapping_add(i ^ 0x9E37);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::{BuiltinWorkload, WorkloadKind, spin};
    use crate::workload::Workload;

    #[test]
    fn test_spin_is_deterministic() {
        assert_eq!(spin(1_000), spin(1_000));
        assert_eq!(spin(0), 0);
    }

    #[test]
    fn test_builtin_workloads_succeed() {
        for kind in [WorkloadKind::Spin, WorkloadKind::Sleep, WorkloadKind::Sort] {
            let mut workload = BuiltinWorkload::new(kind, 10, 7);
            assert!(workload.invoke().is_ok());
        }
    }
}
