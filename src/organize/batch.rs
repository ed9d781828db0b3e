//! Bounded-size chunking over ordered sequences.
//!
//! Used for playlist appends and for splitting large page requests. The last
//! chunk holds whatever remains and may be smaller than the requested size.

/// Consecutive slices of at most `size` items, in original order.
/// A `size` of zero is treated as one.
pub fn batches<T>(items: &[T], size: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(size.max(1))
}

/// `(start, len)` spans covering `0..total` in steps of at most `size`.
pub fn spans(total: u32, size: u32) -> impl Iterator<Item = (u32, u32)> {
    let size = size.max(1);
    (0..total)
        .step_by(size as usize)
        .map(move |start| (start, size.min(total - start)))
}
