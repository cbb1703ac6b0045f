use std::cmp::Ordering;

use rand::Rng;

sort_impl!("quicksort", allocating);

/// Sorts into a new `Vec` using the thread-local generator for pivot
/// selection. The input is left unmodified.
pub fn sort<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    sort_with(v, &mut rand::thread_rng())
}

/// Sorts into a new `Vec`, drawing pivot indices from the supplied
/// generator. Passing a seeded generator makes every pivot choice, and
/// with it the whole recursion, reproducible.
///
/// Each level picks a pivot by uniformly random index and partitions the
/// elements into three owned buckets: strictly less, equal, strictly
/// greater. The outer buckets are sorted recursively and the three are
/// concatenated. Expected *O*(*n* log *n*); a pathological pivot sequence
/// degrades to *O*(*n*^2) time and *O*(*n*) recursion depth.
pub fn sort_with<T, R>(v: &[T], rng: &mut R) -> Vec<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    sort_owned(v.to_vec(), rng)
}

fn sort_owned<T, R>(v: Vec<T>, rng: &mut R) -> Vec<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    if v.len() < 2 {
        return v;
    }

    let pivot = v[rng.gen_range(0..v.len())].clone();

    let mut low = Vec::new();
    let mut same = Vec::new();
    let mut high = Vec::new();

    for item in v {
        match item.cmp(&pivot) {
            Ordering::Less => low.push(item),
            Ordering::Equal => same.push(item),
            Ordering::Greater => high.push(item),
        }
    }

    let mut sorted = sort_owned(low, rng);
    sorted.append(&mut same);
    sorted.append(&mut sort_owned(high, rng));

    sorted
}
