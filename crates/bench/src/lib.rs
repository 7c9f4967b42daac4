use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the runtime preset for an input of `len` elements.
pub fn apply_runtime_config_for<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len <= 4096 {
        apply_small_runtime_config(group);
    } else if len <= 65536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    FewDistinct,
    Reversed,
    NearlySorted1pctSwaps,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::FewDistinct,
    Distribution::Reversed,
    Distribution::NearlySorted1pctSwaps,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::FewDistinct => "few_distinct",
            Self::Reversed => "reversed",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }
}

pub fn generate_i64<R: Rng + ?Sized>(rng: &mut R, dist: Distribution, len: usize) -> Vec<i64> {
    match dist {
        Distribution::RandomUniform => (0..len).map(|_| rng.random::<i64>()).collect(),
        Distribution::FewDistinct => (0..len).map(|_| rng.random_range(0..16)).collect(),
        Distribution::Reversed => (0..len as i64).rev().collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<i64> = (0..len as i64).collect();
            if len > 0 {
                for _ in 0..(len / 100).max(1) {
                    let a = rng.random_range(0..len);
                    let b = rng.random_range(0..len);
                    data.swap(a, b);
                }
            }
            data
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasets_have_requested_length() {
        let mut rng = default_rng();
        for dist in ALL_DISTRIBUTIONS {
            for len in [0, 1, 100, 1000] {
                assert_eq!(generate_i64(&mut rng, dist, len).len(), len, "{}", dist.label());
            }
        }
    }

    #[test]
    fn nearly_sorted_is_a_permutation() {
        let mut rng = default_rng();
        let mut data = generate_i64(&mut rng, Distribution::NearlySorted1pctSwaps, 1000);
        data.sort_unstable();
        assert!(data.iter().copied().eq(0..1000));
    }
}
