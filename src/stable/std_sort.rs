sort_impl!("std_sort");

pub fn sort<T: Ord>(v: &mut [T]) {
    v.sort();
}
