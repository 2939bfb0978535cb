//! # levy-calc — Progressive tiered fee engine.
//!
//! Fees accrue marginally, like a bracketed tax schedule:
//! - **Tiers**: `[70, 80)` at coefficient 2, `[80, 90)` at 3, `[90, ∞)` at 4.
//! - **Marginal amount**: each tier entered contributes
//!   `BASE_PRICE * coefficient * people * span / 100`, where `span` is the
//!   percentage points of the tier the rate actually covers.
//! - **Chart series**: the total fee sampled at every integer rate from 65
//!   to 105, with the calculator input capped at 100.

pub mod engine;
pub mod series;

pub use engine::{FeeEngine, calculate};
pub use series::{generate_series, generate_series_with};
