//! Text rendering of results, breakdowns and chart series.

use std::fmt::Write;

use levy_core::constants::{BASE_PRICE, TIERS};
use levy_core::types::{CalculationResult, ChartSample};

/// Widest bar drawn for a chart sample.
const BAR_WIDTH: usize = 40;

/// Summary panel followed by the per-tier breakdown.
pub fn render_calculation(result: &CalculationResult, rate: f64, people: f64) -> String {
    let mut out = String::new();
    let active = result
        .active_tier()
        .map_or_else(|| "none".to_string(), |t| format!("{} ({})", t.ordinal, t.label));

    let _ = writeln!(out, "rate:        {rate}%");
    let _ = writeln!(out, "people:      {people}");
    let _ = writeln!(out, "unit price:  {BASE_PRICE:.1}");
    let _ = writeln!(out, "active tier: {active}");
    let _ = writeln!(out, "total fee:   {:.2}", result.total_fee);

    if result.is_zero() {
        let _ = writeln!(out, "\nno fee at or below {}%", TIERS[0].lower_bound);
        return out;
    }

    let _ = writeln!(out, "\nbreakdown:");
    for t in &result.breakdown {
        let state = if t.is_full { "full" } else { "partial" };
        let _ = writeln!(
            out,
            "  {:<11} {:>12.2}  {:<8} {}",
            t.label,
            t.amount,
            state,
            t.formula()
        );
    }
    let _ = writeln!(out, "  {:<11} {:>12.2}", "total", result.total_fee);
    out
}

/// One line per sample with a bar proportional to the largest fee.
pub fn render_series(samples: &[ChartSample]) -> String {
    let max_fee = samples.iter().map(|s| s.fee).fold(0.0_f64, f64::max);
    let mut out = String::new();

    for s in samples {
        let bar_len = if max_fee > 0.0 {
            ((s.fee / max_fee) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let marker = if s.is_current { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:>5}% {:>12.2} |{}",
            s.rate,
            s.fee,
            "#".repeat(bar_len.min(BAR_WIDTH))
        );
    }
    out
}

/// The fixed tier schedule.
pub fn render_tiers() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "unit price: {BASE_PRICE:.1}");
    for t in &TIERS {
        let upper = if t.upper_bound.is_finite() {
            format!("{}%", t.upper_bound)
        } else {
            "open".to_string()
        };
        let _ = writeln!(
            out,
            "  tier {}  {:<11} from {}% to {:<5} coefficient {}",
            t.ordinal, t.label, t.lower_bound, upper, t.coefficient
        );
    }
    out
}
