#![allow(dead_code)]

use std::env;

use rand::Rng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter for bench runs.
const LOG_ENV: &str = "DOUBLE_BITS_LOG";

/// Installs a stderr `tracing` subscriber when `DOUBLE_BITS_LOG` is set.
///
/// Encoding emits trace events on every call, so leave this unset when timing.
pub fn init_tracing() {
    let Ok(filter) = env::var(LOG_ENV) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Returns true when bench runs should print extra diagnostics.
pub fn verbose() -> bool {
    env::var_os("DOUBLE_BITS_VERBOSE").is_some()
}

/// Doubles drawn uniformly from the bit-pattern space, NaNs excluded.
///
/// This weights every binade equally, so huge and tiny exponents dominate
/// compared to a uniform draw over a value range.
pub fn random_doubles(rng: &mut StdRng, count: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(count);
    while values.len() < count {
        let value = f64::from_bits(rng.gen_range(0..u64::MAX));
        if !value.is_nan() {
            values.push(value);
        }
    }
    values
}

/// Doubles drawn uniformly from `-range..range`.
pub fn random_in_range(rng: &mut StdRng, count: usize, range: f64) -> Vec<f64> {
    (0..count).map(|_| rng.gen_range(-range..range)).collect()
}

/// Integer lists of `len` elements drawn uniformly from `-bound..bound`.
pub fn random_lists(rng: &mut StdRng, count: usize, len: usize, bound: i32) -> Vec<Vec<i32>> {
    (0..count)
        .map(|_| (0..len).map(|_| rng.gen_range(-bound..bound)).collect())
        .collect()
}
