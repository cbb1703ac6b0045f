use super::insertion;
use super::merge::merge;

sort_impl!("timsort");

// Width of the insertion-sorted chunks that form the initial runs. The
// final chunk may be shorter.
const MIN_RUN: usize = 32;

/// Simplified timsort: fixed-width insertion-sorted runs, merged bottom-up.
///
/// Phase one insertion-sorts each consecutive `MIN_RUN`-wide chunk in
/// place. Phase two sweeps the slice merging adjacent runs pairwise,
/// doubling the run width after each sweep until a single run covers the
/// whole slice. Each merge goes through a temporary buffer that is written
/// back over the merged span, so the sort is in place from the caller's
/// view with *O*(*n*) transient scratch per stride.
///
/// Run creation is *O*(*n*) for the fixed run width; the merge phase is
/// *O*(*n* log *n*).
pub fn sort<T: Ord + Clone>(v: &mut [T]) {
    let n = v.len();

    for start in (0..n).step_by(MIN_RUN) {
        let end = usize::min(start + MIN_RUN - 1, n - 1);
        insertion::sort_span(v, start, end);
    }

    let mut size = MIN_RUN;
    while size < n {
        for start in (0..n).step_by(2 * size) {
            let midpoint = start + size - 1;
            let end = usize::min(start + 2 * size - 1, n - 1);

            // On the last stride the left run may already reach `end`,
            // leaving the right side empty; `merge` handles that case.
            let split = usize::min(midpoint + 1, end + 1);

            let merged = merge(&v[start..split], &v[split..=end]);
            for (slot, item) in v[start..=end].iter_mut().zip(merged) {
                *slot = item;
            }
        }

        size *= 2;
    }
}
