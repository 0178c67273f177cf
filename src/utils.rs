//! Assorted small helpers.

/// Return a copy of `items` with `item` inserted before position `index`.
///
/// Out-of-range positions clamp to an append: any negative `index`, and
/// any `index >= items.len()`, place `item` at the end instead. The
/// transformation walk relies on this when it materialises an insertion
/// after the last surviving character of the working copy.
pub fn insert_at<T: Clone>(items: &[T], index: isize, item: T) -> Vec<T> {
    let mut out = items.to_vec();
    if index < 0 || index as usize >= items.len() {
        out.push(item);
    } else {
        out.insert(index as usize, item);
    }
    out
}
