//! Fixed-size chunking of arbitrary iterables.
//!
//! [`chunkify`] adapts any `IntoIterator` into a lazy stream of `Vec` groups
//! of up to `chunk_size` elements. The final group may be shorter when the
//! source does not divide evenly. The adaptor pulls from the source
//! incrementally, so one-pass streams work as well as in-memory collections.

use std::iter::FusedIterator;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

/// Splits `iterable` into groups of up to `chunk_size` consecutive elements.
///
/// ```
/// use cronometro::chunkify;
///
/// let groups: Vec<Vec<i32>> = chunkify(vec![1, 2, 3], 2).collect();
/// assert_eq!(groups, vec![vec![1, 2], vec![3]]);
/// ```
///
/// # Panics
///
/// Panics if `chunk_size` is zero.
pub fn chunkify<I>(iterable: I, chunk_size: usize) -> Chunkify<I::IntoIter>
where
    I: IntoIterator,
{
    assert!(chunk_size != 0, "chunk size must be non-zero");
    Chunkify {
        iter: iterable.into_iter(),
        chunk_size,
    }
}

/// Like [`chunkify`] but starts at `start`, skipping the elements before it.
///
/// A `start` at or past the end of the source yields no groups.
pub fn chunkify_at<I>(
    iterable: I,
    chunk_size: usize,
    start: usize,
) -> Chunkify<std::iter::Skip<I::IntoIter>>
where
    I: IntoIterator,
{
    chunkify(iterable.into_iter().skip(start), chunk_size)
}

/// Iterator over fixed-size groups of an underlying iterator.
///
/// Created by [`chunkify`] / [`chunkify_at`].
#[derive(Debug, Clone)]
pub struct Chunkify<I> {
    iter: I,
    chunk_size: usize,
}

impl<I> Chunkify<I> {
    /// Group size this adaptor was built with.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl<I: Iterator> Iterator for Chunkify<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut group = Vec::with_capacity(self.chunk_size);
        for item in self.iter.by_ref().take(self.chunk_size) {
            group.push(item);
        }
        if group.is_empty() {
            None
        } else {
            Some(group)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.chunk_size),
            upper.map(|n| n.div_ceil(self.chunk_size)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for Chunkify<I> {}
