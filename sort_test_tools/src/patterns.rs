//! Input pattern generators for tests and benchmarks.
//!
//! Every generator draws from a process-wide base seed, printed on first
//! use and overridable via the `SORT_SEED` env var, so a failing run can
//! be replayed exactly.

use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zipf::ZipfDistribution;

static BASE_SEED: Lazy<u64> = Lazy::new(|| {
    let seed = match std::env::var("SORT_SEED") {
        Ok(raw) => raw.parse().expect("SORT_SEED must be a valid u64"),
        Err(_) => rand::thread_rng().gen(),
    };
    eprintln!("pattern base seed: {seed}");
    seed
});

static CALL_COUNT: AtomicU64 = AtomicU64::new(0);

// Each call gets its own generator, derived from the base seed and a call
// counter, so repeated calls produce different yet reproducible inputs.
fn call_rng() -> StdRng {
    let call = CALL_COUNT.fetch_add(1, Ordering::Relaxed);
    StdRng::seed_from_u64(BASE_SEED.wrapping_add(call.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
}

/// Uniformly random values over the full `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = call_rng();

    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly random values drawn from `range`. Narrow ranges produce
/// duplicate-heavy inputs.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = call_rng();

    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipfian-distributed values, a skewed pattern where a few values
/// dominate.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = call_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("invalid zipf parameters");

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Already sorted, strictly increasing.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// Reverse sorted, strictly decreasing.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Every element equal.
pub fn constant(len: usize) -> Vec<i32> {
    vec![11; len]
}
