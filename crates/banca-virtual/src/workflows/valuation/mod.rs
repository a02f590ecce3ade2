//! Illustrative valuation calculators: Scorecard, VC Method, simplified DCF.
//!
//! Pure numeric functions sharing no state with the scoring engine. The
//! figures are directional aids for panel discussion, not financial advice.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SCORECARD_BASE: f64 = 5_000_000.0;
pub const DEFAULT_TERMINAL_GROWTH: f64 = 0.02;

const WEIGHT_TEAM: f64 = 0.25;
const WEIGHT_PRODUCT: f64 = 0.20;
const WEIGHT_MARKET: f64 = 0.25;
const WEIGHT_TRACTION: f64 = 0.20;
const WEIGHT_MOAT: f64 = 0.10;

#[derive(Debug, thiserror::Error)]
pub enum ValuationError {
    #[error(
        "discount rate ({discount}) must exceed terminal growth ({terminal_growth}) for a finite terminal value"
    )]
    NonPositiveSpread { discount: f64, terminal_growth: f64 },
}

/// Qualitative scorecard factors, each in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorecardInputs {
    pub team: f64,
    pub product: f64,
    pub market: f64,
    pub traction: f64,
    pub moat: f64,
}

/// Weighted scorecard average (weights 0.25/0.20/0.25/0.20/0.10) applied to
/// a base maximum valuation.
pub fn scorecard_valuation(inputs: ScorecardInputs, base: f64) -> f64 {
    let blended = inputs.team * WEIGHT_TEAM
        + inputs.product * WEIGHT_PRODUCT
        + inputs.market * WEIGHT_MARKET
        + inputs.traction * WEIGHT_TRACTION
        + inputs.moat * WEIGHT_MOAT;
    base * blended
}

/// Present value of a target ownership stake at exit, discounted back over
/// the holding period. `ownership` and `discount` are decimals (0.2 = 20%).
pub fn vc_method(exit_value: f64, ownership: f64, discount: f64, years: u32) -> f64 {
    exit_value * ownership / (1.0 + discount).powi(years as i32)
}

/// Simplified DCF: revenue compounds at `growth`, `margin` proxies free cash
/// flow, each year is discounted at `discount`, and a Gordon-growth terminal
/// value on the year-after-horizon cash flow is discounted back over the
/// projection window. The spread between `discount` and `terminal_growth`
/// must be positive or the terminal value is unbounded.
pub fn dcf_simple(
    revenue_year1: f64,
    growth: f64,
    margin: f64,
    years: u32,
    discount: f64,
    terminal_growth: f64,
) -> Result<f64, ValuationError> {
    if discount <= terminal_growth {
        return Err(ValuationError::NonPositiveSpread {
            discount,
            terminal_growth,
        });
    }

    let mut present_value = 0.0;
    let mut revenue = revenue_year1;
    for year in 1..=years {
        let cash_flow = revenue * margin;
        present_value += cash_flow / (1.0 + discount).powi(year as i32);
        revenue *= 1.0 + growth;
    }

    // `revenue` has already compounded past the horizon.
    let terminal_cash_flow = revenue * margin;
    let terminal_value = terminal_cash_flow * (1.0 + terminal_growth) / (discount - terminal_growth);
    present_value += terminal_value / (1.0 + discount).powi(years as i32);

    Ok(present_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn scorecard_blends_with_fixed_weights() {
        let inputs = ScorecardInputs {
            team: 1.0,
            product: 1.0,
            market: 1.0,
            traction: 1.0,
            moat: 1.0,
        };
        assert!((scorecard_valuation(inputs, DEFAULT_SCORECARD_BASE)
            - DEFAULT_SCORECARD_BASE)
            .abs()
            < EPSILON);

        let uneven = ScorecardInputs {
            team: 0.8,
            product: 0.5,
            market: 0.9,
            traction: 0.4,
            moat: 0.2,
        };
        let expected = (0.8 * 0.25 + 0.5 * 0.20 + 0.9 * 0.25 + 0.4 * 0.20 + 0.2 * 0.10)
            * 1_000_000.0;
        assert!((scorecard_valuation(uneven, 1_000_000.0) - expected).abs() < EPSILON);
    }

    #[test]
    fn vc_method_discounts_the_exit_stake() {
        // 50M exit, 20% stake, 50% annual discount over 5 years.
        let value = vc_method(50_000_000.0, 0.2, 0.5, 5);
        let expected = 10_000_000.0 / 1.5_f64.powi(5);
        assert!((value - expected).abs() < EPSILON);
    }

    #[test]
    fn dcf_matches_a_hand_computed_projection() {
        // 1M revenue, 20% growth, 30% margin, 2 years, 25% discount.
        let value =
            dcf_simple(1_000_000.0, 0.2, 0.3, 2, 0.25, DEFAULT_TERMINAL_GROWTH).expect("dcf");

        let year1 = 300_000.0 / 1.25;
        let year2 = 360_000.0 / 1.25_f64.powi(2);
        let terminal_cash_flow = 1_000_000.0 * 1.2_f64.powi(2) * 0.3;
        let terminal = terminal_cash_flow * 1.02 / (0.25 - 0.02) / 1.25_f64.powi(2);
        assert!((value - (year1 + year2 + terminal)).abs() < 1e-6);
    }

    #[test]
    fn dcf_rejects_discount_at_or_below_terminal_growth() {
        let err = dcf_simple(1_000_000.0, 0.2, 0.3, 5, 0.02, 0.02).expect_err("equal rates fail");
        assert!(matches!(err, ValuationError::NonPositiveSpread { .. }));

        assert!(dcf_simple(1_000_000.0, 0.2, 0.3, 5, 0.01, 0.02).is_err());
    }
}
