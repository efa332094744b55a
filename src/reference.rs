//! Historical prime counts used to validate decoded results

/// π(n) for the powers of ten the drag-race limits use.
pub const PRIME_COUNTS: &[(u64, u64)] = &[
    (10, 4),
    (100, 25),
    (1_000, 168),
    (10_000, 1_229),
    (100_000, 9_592),
    (1_000_000, 78_498),
    (10_000_000, 664_579),
    (100_000_000, 5_761_455),
];

/// Reference count for `limit`, if the table knows it.
pub fn expected_count(limit: u64) -> Option<u64> {
    PRIME_COUNTS
        .iter()
        .find(|&&(n, _)| n == limit)
        .map(|&(_, count)| count)
}

/// True only when `limit` is in the table and `count` matches it exactly.
pub fn validate(limit: u64, count: u64) -> bool {
    expected_count(limit) == Some(count)
}
