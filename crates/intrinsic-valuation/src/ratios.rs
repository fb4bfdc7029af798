//! Valuation and health ratios.
//!
//! All ratios divide through [`safe_divide`], so a zero denominator yields
//! `0.0` rather than an error.

use crate::math::safe_divide;

/// Dividends per share over price.
pub fn dividend_yield(dividends_paid: f64, shares_outstanding: f64, current_price: f64) -> f64 {
    safe_divide(safe_divide(dividends_paid, shares_outstanding), current_price)
}

/// Shares times price.
pub fn market_cap(shares_outstanding: f64, current_price: f64) -> f64 {
    shares_outstanding * current_price
}

/// Book equity.
pub fn equity(assets: f64, liabilities: f64) -> f64 {
    assets - liabilities
}

/// Return on equity.
pub fn roe(net_income: f64, equity: f64) -> f64 {
    safe_divide(net_income, equity)
}

/// Return on assets.
pub fn roa(net_income: f64, assets: f64) -> f64 {
    safe_divide(net_income, assets)
}

/// Debt to equity.
pub fn dte(debt: f64, equity: f64) -> f64 {
    safe_divide(debt, equity)
}

/// Current ratio.
pub fn current_ratio(current_assets: f64, current_liabilities: f64) -> f64 {
    safe_divide(current_assets, current_liabilities)
}

/// Earnings per share.
pub fn eps(net_income: f64, shares_outstanding: f64) -> f64 {
    safe_divide(net_income, shares_outstanding)
}

/// Price to earnings.
pub fn pe(current_price: f64, eps: f64) -> f64 {
    safe_divide(current_price, eps)
}

/// Price to book.
pub fn pb(current_price: f64, equity: f64, shares_outstanding: f64) -> f64 {
    safe_divide(current_price, safe_divide(equity, shares_outstanding))
}

/// P/E over growth expressed in percent.
///
/// Zero growth gives `0.0`. When both P/E and growth are negative the
/// quotient is negated so two negatives do not read as a healthy PEG.
pub fn peg(pe: f64, growth_rate: f64) -> f64 {
    if growth_rate == 0.0 {
        return 0.0;
    }
    let peg = safe_divide(pe, 100.0 * growth_rate);
    if pe < 0.0 && growth_rate < 0.0 { -peg } else { peg }
}

/// Altman Z-score.
///
/// Zero when liabilities or revenue are zero, signalling "not computable".
pub fn altman_z_score(
    assets: f64,
    liabilities: f64,
    retained_earnings: f64,
    ebit: f64,
    total_revenue: f64,
) -> f64 {
    if liabilities == 0.0 || total_revenue == 0.0 {
        return 0.0;
    }
    let equity = equity(assets, liabilities);

    1.2 * safe_divide(equity, assets)
        + 1.4 * safe_divide(retained_earnings, assets)
        + 3.3 * safe_divide(ebit, assets)
        + 0.6 * safe_divide(equity, liabilities)
        + 1.0 * safe_divide(total_revenue, assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_balance_sheet_ratios() {
        let equity = equity(1000.0, 400.0);
        assert_eq!(equity, 600.0);
        assert_relative_eq!(roe(120.0, equity), 0.20);
        assert_relative_eq!(roa(120.0, 1000.0), 0.12);
        assert_relative_eq!(current_ratio(500.0, 200.0), 2.5);
        assert_relative_eq!(dte(200.0, equity), 1.0 / 3.0);
    }

    #[test]
    fn test_market_ratios() {
        let eps = eps(120.0, 100.0);
        assert_relative_eq!(eps, 1.2);
        assert_relative_eq!(pe(20.0, eps), 16.666_666, epsilon = 1e-5);
        assert_relative_eq!(pb(20.0, 600.0, 100.0), 20.0 / 6.0);
        assert_eq!(market_cap(100.0, 20.0), 2000.0);
        assert_relative_eq!(dividend_yield(50.0, 100.0, 20.0), 0.025);
    }

    #[rstest]
    #[case(10.0, 0.0)]
    #[case(-10.0, 0.0)]
    #[case(0.0, 0.0)]
    fn test_peg_zero_growth(#[case] pe: f64, #[case] growth: f64) {
        assert_eq!(peg(pe, growth), 0.0);
    }

    #[test]
    fn test_peg() {
        assert_relative_eq!(peg(10.0, 0.20), 0.5);
        assert_relative_eq!(peg(-10.0, 0.20), -0.5);
        assert_relative_eq!(peg(10.0, -0.20), -0.5);
        // Two negatives stay negative.
        assert_relative_eq!(peg(-10.0, -0.20), -0.5);
    }

    #[test]
    fn test_zero_denominators() {
        assert_eq!(roe(100.0, 0.0), 0.0);
        assert_eq!(eps(100.0, 0.0), 0.0);
        assert_eq!(pe(20.0, 0.0), 0.0);
        assert_eq!(pb(20.0, 0.0, 100.0), 0.0);
        assert_eq!(dividend_yield(10.0, 0.0, 20.0), 0.0);
        assert_eq!(dividend_yield(10.0, 10.0, 0.0), 0.0);
    }

    #[rstest]
    #[case(0.0, 500.0)]
    #[case(400.0, 0.0)]
    #[case(0.0, 0.0)]
    fn test_altman_short_circuit(#[case] liabilities: f64, #[case] revenue: f64) {
        assert_eq!(altman_z_score(1000.0, liabilities, 100.0, 50.0, revenue), 0.0);
    }

    #[test]
    fn test_altman_z_score() {
        // equity 600: 1.2*0.6 + 1.4*0.1 + 3.3*0.05 + 0.6*1.5 + 1.0*0.8
        let z = altman_z_score(1000.0, 400.0, 100.0, 50.0, 800.0);
        assert_relative_eq!(z, 0.72 + 0.14 + 0.165 + 0.9 + 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_half_cent_pb_rounds_to_even() {
        // Book value per share 8 at price 5.
        let pb = pb(5.0, 800.0, 100.0);
        assert_eq!(pb, 0.625);
        assert_eq!(crate::math::round2(pb), 0.62);
    }
}
