//! Unordered pair enumeration within a group

/// All index pairs `(i, j)` with `i < j < n`, in row order
///
/// Yields exactly `n * (n - 1) / 2` pairs; never pairs an index with itself.
pub fn index_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Number of pairs formed by a group of `n` records
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
