//! Wall-clock comparison of the sorting baselines.
//!
//! For each algorithm: three trials of ten runs each, every run sorting a
//! fresh copy of the same random array, reporting the fastest trial.

use std::time::Instant;

use rand::Rng;
use sort_baselines_rs::stable::{bubble, insertion, merge, std_sort, timsort};
use sort_baselines_rs::unstable::quicksort;
use sort_test_tools::Sort;

const ARRAY_LENGTH: usize = 10_000;
const TRIALS: usize = 3;
const RUNS_PER_TRIAL: usize = 10;

fn min_execution_time<S: Sort>(input: &[i32]) -> f64 {
    let mut minimum = f64::INFINITY;

    for _ in 0..TRIALS {
        let mut trial = 0.0;

        for _ in 0..RUNS_PER_TRIAL {
            let mut data = input.to_vec();

            let start = Instant::now();
            S::sort(&mut data);
            trial += start.elapsed().as_secs_f64();

            assert!(data.windows(2).all(|w| w[0] <= w[1]));
        }

        minimum = minimum.min(trial);
    }

    minimum
}

fn report<S: Sort>(input: &[i32]) {
    let seconds = min_execution_time::<S>(input);

    println!(
        "Algorithm: {} - Minimum execution time: {seconds:.6} seconds",
        S::name()
    );
}

fn main() {
    let mut rng = rand::thread_rng();
    let array: Vec<i32> = (0..ARRAY_LENGTH).map(|_| rng.gen_range(0..=1000)).collect();

    println!("Benchmarking on an array of size {ARRAY_LENGTH}");

    report::<bubble::SortImpl>(&array);
    report::<insertion::SortImpl>(&array);
    report::<merge::SortImpl>(&array);
    report::<quicksort::SortImpl>(&array);
    report::<timsort::SortImpl>(&array);
    report::<std_sort::SortImpl>(&array);
}
