//! Reference implementations of classic comparison sorts, plus the
//! standard-library sort as a baseline.
//!
//! Each algorithm lives in its own module under [`stable`] or [`unstable`]
//! depending on whether it naturally preserves the relative order of equal
//! elements. In-place algorithms sort through `&mut [T]`; allocating
//! algorithms borrow their input and return a freshly-owned `Vec<T>`.

/// Wraps a module's `sort` function into a named `SortImpl` unit
/// implementing [`sort_test_tools::Sort`], so tests and benches can treat
/// every algorithm uniformly.
///
/// The `allocating` arm adapts modules whose `sort` returns a new `Vec`
/// by writing the result back through the borrowed slice.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                self::sort(arr);
            }
        }
    };
    ($name:expr, allocating) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                let sorted = self::sort(arr);
                for (slot, item) in arr.iter_mut().zip(sorted) {
                    *slot = item;
                }
            }
        }
    };
}

pub mod error;
pub mod stable;
pub mod unstable;

pub use error::SortError;
