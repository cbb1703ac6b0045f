//! Shared trait, input patterns and test generation for the sorting
//! baselines.

pub mod patterns;
pub mod tests;

// Re-exported for use by the `instantiate_sort_tests!` expansion.
pub use paste;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;
}
