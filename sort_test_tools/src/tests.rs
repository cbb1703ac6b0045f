//! Helpers and the `instantiate_sort_tests!` macro, which stamps out the
//! standard test battery for a [`Sort`](crate::Sort) implementation.

use crate::patterns;
use crate::Sort;

/// Sizes every pattern test sweeps. Chosen to straddle the power-of-two
/// merge boundaries and the hybrid sort's run width.
pub fn test_sizes() -> Vec<usize> {
    let mut sizes = vec![
        0, 1, 2, 3, 7, 16, 17, 31, 32, 33, 63, 64, 70, 127, 128, 500, 1024,
    ];

    if cfg!(feature = "large_test_sizes") {
        sizes.push(8192);
    }

    sizes
}

/// Sorts `input` with `S` and compares against the standard-library sort
/// of the same input. Equality with the oracle covers both the ordering
/// and the permutation invariants in one assertion.
pub fn check_sort<S: Sort>(input: &[i32]) {
    let mut actual = input.to_vec();
    S::sort(&mut actual);

    let mut expected = input.to_vec();
    expected.sort();

    assert_eq!(
        actual,
        expected,
        "{} disagrees with the oracle on {} elements",
        S::name(),
        input.len()
    );
}

/// Runs [`check_sort`] over the full size sweep of one input pattern.
pub fn check_pattern<S: Sort>(pattern: fn(usize) -> Vec<i32>) {
    for len in test_sizes() {
        check_sort::<S>(&pattern(len));
    }
}

/// Duplicate-heavy uniform pattern used by the generated battery.
pub fn random_dup_heavy(len: usize) -> Vec<i32> {
    patterns::random_uniform(len, 0..16)
}

/// Skewed zipfian pattern used by the generated battery.
pub fn random_zipf_skewed(len: usize) -> Vec<i32> {
    patterns::random_zipf(len, 1.1)
}

/// Generates the standard test battery for one `Sort` implementation.
///
/// Takes an identifier prefix so several implementations can be
/// instantiated side by side in a single integration test file.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty, $prefix:ident) => {
        $crate::paste::paste! {
            #[test]
            fn [<$prefix _empty>]() {
                $crate::tests::check_sort::<$sort_impl>(&[]);
            }

            #[test]
            fn [<$prefix _single>]() {
                $crate::tests::check_sort::<$sort_impl>(&[42]);
            }

            #[test]
            fn [<$prefix _swapped_pair>]() {
                $crate::tests::check_sort::<$sort_impl>(&[2, 1]);
            }

            #[test]
            fn [<$prefix _known_input>]() {
                let mut data = vec![5, 2, 9, 1, 5, 6];
                <$sort_impl as $crate::Sort>::sort(&mut data);
                assert_eq!(data, [1, 2, 5, 5, 6, 9]);
            }

            #[test]
            fn [<$prefix _all_duplicates>]() {
                let mut data = vec![3, 3, 3];
                <$sort_impl as $crate::Sort>::sort(&mut data);
                assert_eq!(data, [3, 3, 3]);
            }

            #[test]
            fn [<$prefix _idempotent_on_sorted>]() {
                let mut data = $crate::patterns::ascending(128);
                let expected = data.clone();
                <$sort_impl as $crate::Sort>::sort(&mut data);
                assert_eq!(data, expected);
            }

            #[test]
            fn [<$prefix _ascending>]() {
                $crate::tests::check_pattern::<$sort_impl>($crate::patterns::ascending);
            }

            #[test]
            fn [<$prefix _descending>]() {
                $crate::tests::check_pattern::<$sort_impl>($crate::patterns::descending);
            }

            #[test]
            fn [<$prefix _random>]() {
                $crate::tests::check_pattern::<$sort_impl>($crate::patterns::random);
            }

            #[test]
            fn [<$prefix _random_dup_heavy>]() {
                $crate::tests::check_pattern::<$sort_impl>($crate::tests::random_dup_heavy);
            }

            #[test]
            fn [<$prefix _random_zipf>]() {
                $crate::tests::check_pattern::<$sort_impl>($crate::tests::random_zipf_skewed);
            }

            #[test]
            fn [<$prefix _constant>]() {
                $crate::tests::check_pattern::<$sort_impl>($crate::patterns::constant);
            }
        }
    };
}
