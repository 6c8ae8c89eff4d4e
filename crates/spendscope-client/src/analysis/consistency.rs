/// True when every amount sits within `tolerance` (relative) of the mean.
///
/// An empty list or a zero mean is never consistent.
pub fn amounts_are_consistent(amounts: &[i64], tolerance: f64) -> bool {
    if amounts.is_empty() {
        return false;
    }

    let total = amounts.iter().map(|amount| i128::from(*amount)).sum::<i128>();
    let mean = total as f64 / amounts.len() as f64;
    if mean == 0.0 {
        return false;
    }

    amounts
        .iter()
        .all(|amount| ((*amount as f64 - mean) / mean).abs() <= tolerance)
}
