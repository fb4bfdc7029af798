//! Valuation engine: one stock in, one [`Valuation`] out.

use crate::aggregate;
use crate::decision;
use crate::error::{Result, ValuationError};
use crate::growth;
use crate::intrinsic::{IntrinsicInputs, IntrinsicValues};
use crate::math::round2;
use crate::model::{PeBasis, ValuationModel};
use crate::ratios;
use crate::selector::latest_valid_balance_sheet;
use crate::valuation::Valuation;
use chrono::{NaiveDate, Utc};
use intrinsic_data::{PolynomialTrend, Stock, TrendEstimator};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Evaluates stocks against a [`ValuationModel`].
///
/// The engine holds no per-stock state; one instance can value any number
/// of stocks, concurrently. Growth is measured up to `as_of`, which defaults
/// to today.
#[derive(Debug, Clone)]
pub struct ValuationEngine<T = PolynomialTrend> {
    model: ValuationModel,
    trend: T,
    as_of: NaiveDate,
}

impl ValuationEngine {
    /// Engine with a linear net-income trend.
    pub fn new(model: ValuationModel) -> Self {
        Self::with_trend(model, PolynomialTrend::linear())
    }
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::new(ValuationModel::default())
    }
}

impl<T: TrendEstimator> ValuationEngine<T> {
    /// Engine with a custom trend estimator.
    pub fn with_trend(model: ValuationModel, trend: T) -> Self {
        Self {
            model,
            trend,
            as_of: Utc::now().date_naive(),
        }
    }

    /// Measure growth up to `date` instead of today.
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = date;
        self
    }

    /// Valuation date.
    pub const fn date(&self) -> NaiveDate {
        self.as_of
    }

    /// Assumptions in use.
    pub const fn model(&self) -> &ValuationModel {
        &self.model
    }

    /// Value `stock`, failing when it has no usable balance sheet.
    pub fn try_evaluate(&self, stock: &Stock) -> Result<Valuation> {
        let (sheet_date, sheet) =
            latest_valid_balance_sheet(&stock.financial_statements.balance_sheets).ok_or_else(
                || ValuationError::NoValidBalanceSheet {
                    symbol: stock.symbol.clone(),
                },
            )?;
        debug!(symbol = %stock.symbol, %sheet_date, "selected balance sheet");

        let model = &self.model;
        let shares = stock.shares_outstanding;
        let price = stock.current_price;

        let net_income = aggregate::net_income_average(stock, model.years_for_earnings_calcs);
        let equity = ratios::equity(sheet.assets, sheet.liabilities);
        let roe = ratios::roe(net_income, equity);
        let roa = ratios::roa(net_income, sheet.assets);
        let dividend_yield = aggregate::dividend_yield_for_year(stock);
        let fcf = aggregate::fcf_for_year(stock);
        let market_cap = ratios::market_cap(shares, price);
        let eps = ratios::eps(net_income, shares);
        let pe = ratios::pe(price, eps);

        let growth_rate = growth::net_income_growth_rate(stock, model, &self.trend, self.as_of);
        let price_growth_rate = growth::price_growth_rate(stock, self.as_of);
        let peg = ratios::peg(pe, growth_rate);

        let total_revenue = aggregate::total_revenue_for_year(stock);
        let ebit = aggregate::ebit_for_year(stock);
        let pb = round2(ratios::pb(price, equity, shares));
        let blended_multiplier = pe * pb;
        let current_liabilities = round2(sheet.current_liabilities);
        let altman_z_score = ratios::altman_z_score(
            sheet.assets,
            sheet.liabilities,
            sheet.retained_earnings,
            ebit,
            total_revenue,
        );
        debug!(
            symbol = %stock.symbol,
            net_income,
            equity,
            growth_rate,
            ebit,
            altman_z_score,
            "computed ratios"
        );

        let average_pe = match model.pe_basis {
            PeBasis::AverageEarnings => pe,
            PeBasis::QuarterlyMean => aggregate::average_pe(stock, model.years_for_earnings_calcs),
        };
        let values = IntrinsicValues::compute(&IntrinsicInputs {
            eps,
            average_pe,
            growth_rate,
            discount_rate: model.discount_rate,
            decline_rate: model.decline_rate,
            fcf,
            cash: sheet.cash,
            current_liabilities,
            shares_outstanding: shares,
            equity,
            average_roe: roe,
            dividend_yield,
        });

        let valuation = Valuation {
            dividend_yield: round2(dividend_yield),
            market_cap: round2(market_cap),
            roe: round2(roe),
            roa: round2(roa),
            growth_rate: round2(growth_rate),
            price_growth_rate: round2(price_growth_rate),
            dte: round2(ratios::dte(current_liabilities, equity)),
            cr: round2(ratios::current_ratio(sheet.current_assets, current_liabilities)),
            eps: round2(eps),
            pe: round2(pe),
            peg: round2(peg),
            pb,
            blended_multiplier: round2(blended_multiplier),
            fcf: round2(fcf),
            altman_z_score: round2(altman_z_score),
            statement_years: stock.statement_years(),
            pe_multiple_iv: round2(values.pe_multiple),
            graham_iv: round2(values.graham),
            dcf_iv: round2(values.dcf),
            roe_iv: round2(values.roe),
            liquidation_iv: round2(values.liquidation),
            ..Default::default()
        };

        Ok(decision::decide(valuation, price, model))
    }

    /// Value `stock`, reporting a failed evaluation as the empty valuation.
    ///
    /// The empty valuation still goes through the decision step, so it
    /// carries `SELL`, `DYING` and an expected return of -100 when the stock
    /// has a price.
    pub fn evaluate(&self, stock: &Stock) -> Valuation {
        self.try_evaluate(stock).unwrap_or_else(|err| {
            warn!(symbol = %stock.symbol, error = %err, "valuation failed");
            decision::decide(Valuation::default(), stock.current_price, &self.model)
        })
    }

    /// Value every stock in parallel, in input order.
    pub fn evaluate_all(&self, stocks: &[Stock]) -> Vec<Valuation> {
        stocks.par_iter().map(|stock| self.evaluate(stock)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::{Health, Instruction};
    use intrinsic_data::BalanceSheet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_balance_sheet() {
        let mut stock = Stock::new("NOPE");
        stock.current_price = 20.0;
        stock
            .financial_statements
            .balance_sheets
            .insert(date(2023, 12, 31), BalanceSheet::default());

        let engine = ValuationEngine::default();
        assert!(matches!(
            engine.try_evaluate(&stock),
            Err(ValuationError::NoValidBalanceSheet { ref symbol }) if symbol == "NOPE"
        ));

        let valuation = engine.evaluate(&stock);
        assert_eq!(valuation.instruction, Instruction::Sell);
        assert_eq!(valuation.health, Health::Dying);
        assert_eq!(valuation.expected_return, -100.0);
        assert_eq!(valuation.pe_multiple_iv, 0.0);
    }

    #[test]
    fn test_as_of_is_configurable() {
        let engine = ValuationEngine::default().as_of(date(2020, 1, 31));
        assert_eq!(engine.date(), date(2020, 1, 31));
        assert_eq!(engine.model(), &ValuationModel::default());
    }
}
