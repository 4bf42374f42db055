//! Array-edit primitives
//!
//! Pure functions over slices. Each returns a freshly allocated `Vec` and
//! leaves its input untouched.

/// Insert `item` so that it lands at position `index` in the result
///
/// Out-of-range indices are clamped rather than rejected: `index <= 0`
/// prepends and `index >= array.len()` appends. An empty input always
/// yields `[item]`.
///
/// The result is always exactly one element longer than `array`, and all
/// other elements keep their relative order.
pub fn insert<T: Clone>(array: &[T], index: isize, item: T) -> Vec<T> {
    let mut result = Vec::with_capacity(array.len() + 1);

    if array.is_empty() {
        result.push(item);
    } else if index <= 0 {
        result.push(item);
        result.extend_from_slice(array);
    } else if index as usize >= array.len() {
        result.extend_from_slice(array);
        result.push(item);
    } else {
        let (head, tail) = array.split_at(index as usize);
        result.extend_from_slice(head);
        result.push(item);
        result.extend_from_slice(tail);
    }

    result
}

/// Split around `index`, dropping the element at `index` from both halves
///
/// Returns `(array[..index], array[index + 1..])`. Bounds clamp to the
/// slice length, so an index at or past the end yields `(array, [])`.
/// Only meant to back `replace` and `delete`.
pub fn split_at<T>(array: &[T], index: usize) -> (&[T], &[T]) {
    let len = array.len();
    let head = &array[..index.min(len)];
    let tail = &array[index.saturating_add(1).min(len)..];
    (head, tail)
}

/// Replace the element at `index` with `item`
///
/// Length is preserved for `index < array.len()`; callers must ensure the
/// bound. Past the end the item is appended instead.
pub fn replace<T: Clone>(array: &[T], index: usize, item: T) -> Vec<T> {
    let (head, tail) = split_at(array, index);
    let mut result = Vec::with_capacity(head.len() + 1 + tail.len());
    result.extend_from_slice(head);
    result.push(item);
    result.extend_from_slice(tail);
    result
}

/// Remove the element at `index`
///
/// The result is one element shorter for `index < array.len()`; callers
/// must ensure the bound. Past the end the input is copied unchanged.
pub fn delete<T: Clone>(array: &[T], index: usize) -> Vec<T> {
    let (head, tail) = split_at(array, index);
    let mut result = Vec::with_capacity(head.len() + tail.len());
    result.extend_from_slice(head);
    result.extend_from_slice(tail);
    result
}
