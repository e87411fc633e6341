use super::*;

fn collect<I: IntoIterator>(iterable: I, chunk_size: usize) -> Vec<Vec<I::Item>> {
    chunkify(iterable, chunk_size).collect()
}

#[test]
fn test_chunkify_size_two() {
    assert_eq!(collect(vec![1], 2), vec![vec![1]]);
    assert_eq!(collect(vec![1, 2], 2), vec![vec![1, 2]]);
    assert_eq!(collect(vec![1, 2, 3], 2), vec![vec![1, 2], vec![3]]);
    assert_eq!(collect(vec![1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[test]
fn test_chunkify_size_three() {
    assert_eq!(collect(vec![1, 2, 3], 3), vec![vec![1, 2, 3]]);
    assert_eq!(collect(vec![1, 2, 3, 4, 5], 3), vec![vec![1, 2, 3], vec![4, 5]]);
    assert_eq!(collect(1..7, 3), vec![vec![1, 2, 3], vec![4, 5, 6]]);
}

#[test]
fn test_chunkify_empty_input() {
    assert_eq!(collect(Vec::<i32>::new(), 3), Vec::<Vec<i32>>::new());
}

#[test]
fn test_chunkify_oversized_chunk() {
    assert_eq!(collect(vec![1, 2, 3], 10), vec![vec![1, 2, 3]]);
}

#[test]
fn test_chunkify_exact_division_has_no_short_tail() {
    let groups = collect(1..=6, 2);
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|g| g.len() == 2));
}

#[test]
fn test_chunkify_is_lazy_over_one_pass_streams() {
    // A source that can only be consumed once.
    let stream = (0..5).map(|n| n * n);
    assert_eq!(collect(stream, 4), vec![vec![0, 1, 4, 9], vec![16]]);
}

#[test]
fn test_chunkify_at_offset() {
    assert_eq!(
        chunkify_at(vec![1, 2, 3, 4, 5], 2, 1).collect::<Vec<_>>(),
        vec![vec![2, 3], vec![4, 5]]
    );
}

#[test]
fn test_chunkify_at_past_end_is_empty() {
    assert_eq!(chunkify_at(vec![1, 2, 3], 2, 3).count(), 0);
    assert_eq!(chunkify_at(vec![1, 2, 3], 2, 10).count(), 0);
}

#[test]
fn test_size_hint_matches_chunk_count() {
    let it = chunkify(0..10, 3);
    assert_eq!(it.size_hint(), (4, Some(4)));
    assert_eq!(it.count(), 4);

    let empty = chunkify(std::iter::empty::<u8>(), 3);
    assert_eq!(empty.size_hint(), (0, Some(0)));
}

#[test]
#[should_panic(expected = "chunk size must be non-zero")]
fn test_zero_chunk_size_panics() {
    let _ = chunkify(vec![1, 2, 3], 0);
}
