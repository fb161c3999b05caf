
use super::data::President;

/// A small synthetic record table for deterministic candidate counts.
fn table(rows: usize) -> Vec<President> {
    (0..rows)
        .map(|i| President {
            name: format!("President {}", i),
            term: format!("{}-{}", 1789 + 4 * i, 1793 + 4 * i),
            party: format!("Party {}", i),
        })
        .collect()
}
