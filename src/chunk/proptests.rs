//! Property-based tests for the chunking adaptor.

use super::chunkify;
use proptest::prelude::*;

proptest! {
    /// PROPERTY: concatenating all chunks in order reconstructs the source.
    #[test]
    fn prop_chunks_reassemble_source(
        source in proptest::collection::vec(any::<i32>(), 0..200),
        chunk_size in 1usize..20
    ) {
        let chunks: Vec<Vec<i32>> = chunkify(source.clone(), chunk_size).collect();
        let flat: Vec<i32> = chunks.iter().flatten().copied().collect();
        prop_assert_eq!(flat, source);
    }

    /// PROPERTY: every chunk except possibly the last is full; the last holds
    /// the remainder (or a full chunk when the size divides evenly).
    #[test]
    fn prop_chunk_lengths(
        source in proptest::collection::vec(any::<u8>(), 1..200),
        chunk_size in 1usize..20
    ) {
        let chunks: Vec<Vec<u8>> = chunkify(source.clone(), chunk_size).collect();
        prop_assert!(!chunks.is_empty());

        for chunk in &chunks[..chunks.len() - 1] {
            prop_assert_eq!(chunk.len(), chunk_size);
        }

        let expected_tail = match source.len() % chunk_size {
            0 => chunk_size,
            rem => rem,
        };
        prop_assert_eq!(chunks.last().unwrap().len(), expected_tail);
    }

    /// PROPERTY: the number of chunks is ceil(len / chunk_size).
    #[test]
    fn prop_chunk_count(
        source in proptest::collection::vec(any::<u8>(), 0..200),
        chunk_size in 1usize..20
    ) {
        let count = chunkify(source.clone(), chunk_size).count();
        prop_assert_eq!(count, source.len().div_ceil(chunk_size));
    }
}
