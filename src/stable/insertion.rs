use crate::error::SortError;

sort_impl!("insertion_sort");

/// Sorts the whole slice in place.
///
/// Best case *O*(*n*) on nearly-sorted input, worst case *O*(*n*^2).
pub fn sort<T: Ord>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }

    let right = v.len() - 1;
    sort_span(v, 0, right);
}

/// Sorts the inclusive sub-range `v[left..=right]` in place, leaving every
/// element outside the range untouched.
///
/// Bounds are validated before anything moves: `right` must be inside the
/// slice and `left` must not exceed `right + 1`. The empty range
/// `left == right + 1` is accepted as a no-op; anything else out of bounds
/// is a programming error and is rejected with
/// [`SortError::InvalidRange`] rather than silently truncated.
pub fn sort_range<T: Ord>(v: &mut [T], left: usize, right: usize) -> Result<(), SortError> {
    let len = v.len();

    if right >= len || left > right + 1 {
        return Err(SortError::InvalidRange { left, right, len });
    }

    if left <= right {
        sort_span(v, left, right);
    }

    Ok(())
}

/// Insertion-sort kernel over the inclusive span `[left, right]`.
///
/// Bounds are the caller's responsibility; the hybrid sort invokes this
/// directly on chunk ranges it constructs itself.
pub(crate) fn sort_span<T: Ord>(v: &mut [T], left: usize, right: usize) {
    debug_assert!(left <= right && right < v.len());

    for i in left + 1..=right {
        // Scan right-to-left for the insertion point of the key at `i`,
        // stopping at the first predecessor that is not greater than it.
        let mut j = i;
        while j > left && v[j - 1] > v[i] {
            j -= 1;
        }

        // Shift `v[j..i]` one slot right and drop the key into the gap.
        v[j..=i].rotate_right(1);
    }
}
