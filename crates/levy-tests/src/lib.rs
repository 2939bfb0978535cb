//! Shared test helpers for the cross-crate property suite.

/// Absolute-or-relative closeness for fee amounts.
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1e-9 * scale
}

/// Closed-form fee written independently of the tier table: the covered
/// points of each bracket weighted by its coefficient.
pub fn reference_fee(rate: f64, people: f64) -> f64 {
    let covered = |lo: f64, hi: f64| (rate.min(hi) - lo).max(0.0);
    let weighted = 2.0 * covered(70.0, 80.0) + 3.0 * covered(80.0, 90.0) + 4.0 * covered(90.0, f64::INFINITY);
    1.5 * people * weighted / 100.0
}
