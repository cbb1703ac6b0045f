sort_impl!("bubble_sort");

/// Sorts the slice in place by repeatedly swapping adjacent out-of-order
/// pairs.
///
/// Each pass bubbles the largest remaining element to the end of the
/// unsorted prefix, so the scanned region shrinks by one per pass. A pass
/// that performs no swaps proves the slice is sorted and exits early,
/// making already-sorted input *O*(*n*); the worst and average cases are
/// *O*(*n*^2) with *O*(1) scratch.
pub fn sort<T: Ord>(v: &mut [T]) {
    let n = v.len();

    for i in 0..n {
        let mut already_sorted = true;

        for j in 0..n - i - 1 {
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
                already_sorted = false;
            }
        }

        if already_sorted {
            break;
        }
    }
}
