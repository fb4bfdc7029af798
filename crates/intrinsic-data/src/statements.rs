//! Quarterly financial statements.
//!
//! Every field is a currency amount. Unreported fields deserialize to `0.0`,
//! so a zero means "no data" unless the caller knows better. Field names on
//! the wire are camelCase (`netIncome`, `cashFromOperations`, ...).

use serde::{Deserialize, Serialize};

/// Common behaviour of the three statement kinds.
pub trait FinancialStatement: Clone + Default {
    /// Field selector for this statement kind.
    type Field: Copy;

    /// Value of a single field.
    fn value(&self, field: Self::Field) -> f64;

    /// Combine two statements field by field, keeping `self`'s value unless it is zero.
    fn merge(&self, other: &Self) -> Self;
}

fn first_non_zero(a: f64, b: f64) -> f64 {
    if a != 0.0 { a } else { b }
}

/// Income statement for one quarter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeStatement {
    /// Total revenue
    pub total_revenue: f64,
    /// Net income
    pub net_income: f64,
    /// Income before tax
    pub income_before_tax: f64,
    /// Interest income
    pub interest_income: f64,
    /// Interest expense
    pub interest_expense: f64,
}

/// Fields of an [`IncomeStatement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncomeField {
    /// Total revenue
    TotalRevenue,
    /// Net income
    NetIncome,
    /// Income before tax
    IncomeBeforeTax,
    /// Interest income
    InterestIncome,
    /// Interest expense
    InterestExpense,
}

impl IncomeStatement {
    /// Earnings before interest and tax, approximated from pre-tax income.
    ///
    /// Interest lines are taken as magnitudes since filers disagree on their sign.
    pub fn ebit(&self) -> f64 {
        self.income_before_tax + self.interest_expense.abs() - self.interest_income.abs()
    }
}

impl FinancialStatement for IncomeStatement {
    type Field = IncomeField;

    fn value(&self, field: IncomeField) -> f64 {
        match field {
            IncomeField::TotalRevenue => self.total_revenue,
            IncomeField::NetIncome => self.net_income,
            IncomeField::IncomeBeforeTax => self.income_before_tax,
            IncomeField::InterestIncome => self.interest_income,
            IncomeField::InterestExpense => self.interest_expense,
        }
    }

    fn merge(&self, other: &Self) -> Self {
        Self {
            total_revenue: first_non_zero(self.total_revenue, other.total_revenue),
            net_income: first_non_zero(self.net_income, other.net_income),
            income_before_tax: first_non_zero(self.income_before_tax, other.income_before_tax),
            interest_income: first_non_zero(self.interest_income, other.interest_income),
            interest_expense: first_non_zero(self.interest_expense, other.interest_expense),
        }
    }
}

/// Balance sheet at a quarter end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BalanceSheet {
    /// Total assets
    pub assets: f64,
    /// Current assets
    pub current_assets: f64,
    /// Total liabilities
    pub liabilities: f64,
    /// Current liabilities
    pub current_liabilities: f64,
    /// Retained earnings
    pub retained_earnings: f64,
    /// Cash and equivalents
    pub cash: f64,
}

/// Fields of a [`BalanceSheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceField {
    /// Total assets
    Assets,
    /// Current assets
    CurrentAssets,
    /// Total liabilities
    Liabilities,
    /// Current liabilities
    CurrentLiabilities,
    /// Retained earnings
    RetainedEarnings,
    /// Cash and equivalents
    Cash,
}

impl BalanceSheet {
    /// All fields the valuation needs are reported (non-zero).
    pub fn is_complete(&self) -> bool {
        [
            self.assets,
            self.current_assets,
            self.liabilities,
            self.current_liabilities,
            self.retained_earnings,
            self.cash,
        ]
        .iter()
        .all(|v| *v != 0.0)
    }
}

impl FinancialStatement for BalanceSheet {
    type Field = BalanceField;

    fn value(&self, field: BalanceField) -> f64 {
        match field {
            BalanceField::Assets => self.assets,
            BalanceField::CurrentAssets => self.current_assets,
            BalanceField::Liabilities => self.liabilities,
            BalanceField::CurrentLiabilities => self.current_liabilities,
            BalanceField::RetainedEarnings => self.retained_earnings,
            BalanceField::Cash => self.cash,
        }
    }

    fn merge(&self, other: &Self) -> Self {
        Self {
            assets: first_non_zero(self.assets, other.assets),
            current_assets: first_non_zero(self.current_assets, other.current_assets),
            liabilities: first_non_zero(self.liabilities, other.liabilities),
            current_liabilities: first_non_zero(
                self.current_liabilities,
                other.current_liabilities,
            ),
            retained_earnings: first_non_zero(self.retained_earnings, other.retained_earnings),
            cash: first_non_zero(self.cash, other.cash),
        }
    }
}

/// Cash flow statement for one quarter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashFlowStatement {
    /// Dividends paid
    pub dividends_paid: f64,
    /// Operating cash flow
    pub cash_from_operations: f64,
    /// Capital expenditure
    pub capex: f64,
}

/// Fields of a [`CashFlowStatement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CashFlowField {
    /// Dividends paid
    DividendsPaid,
    /// Operating cash flow
    CashFromOperations,
    /// Capital expenditure
    Capex,
}

impl CashFlowStatement {
    /// Free cash flow for the quarter: operating cash flow less the magnitude of capex.
    pub fn free_cash_flow(&self) -> f64 {
        self.cash_from_operations - self.capex.abs()
    }
}

impl FinancialStatement for CashFlowStatement {
    type Field = CashFlowField;

    fn value(&self, field: CashFlowField) -> f64 {
        match field {
            CashFlowField::DividendsPaid => self.dividends_paid,
            CashFlowField::CashFromOperations => self.cash_from_operations,
            CashFlowField::Capex => self.capex,
        }
    }

    fn merge(&self, other: &Self) -> Self {
        Self {
            dividends_paid: first_non_zero(self.dividends_paid, other.dividends_paid),
            cash_from_operations: first_non_zero(
                self.cash_from_operations,
                other.cash_from_operations,
            ),
            capex: first_non_zero(self.capex, other.capex),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_sheet_completeness() {
        let complete = BalanceSheet {
            assets: 1000.0,
            current_assets: 500.0,
            liabilities: 400.0,
            current_liabilities: 200.0,
            retained_earnings: 100.0,
            cash: 50.0,
        };
        assert!(complete.is_complete());

        let missing_cash = BalanceSheet {
            cash: 0.0,
            ..complete
        };
        assert!(!missing_cash.is_complete());
        assert!(!BalanceSheet::default().is_complete());
    }

    #[test]
    fn test_ebit_uses_interest_magnitudes() {
        let income = IncomeStatement {
            income_before_tax: 100.0,
            interest_expense: -20.0,
            interest_income: 5.0,
            ..Default::default()
        };
        assert_eq!(income.ebit(), 115.0);
    }

    #[test]
    fn test_free_cash_flow_normalizes_capex_sign() {
        let negative = CashFlowStatement {
            cash_from_operations: 80.0,
            capex: -30.0,
            ..Default::default()
        };
        let positive = CashFlowStatement {
            capex: 30.0,
            ..negative
        };
        assert_eq!(negative.free_cash_flow(), 50.0);
        assert_eq!(positive.free_cash_flow(), 50.0);
    }

    #[test]
    fn test_merge_prefers_reported_values() {
        let a = IncomeStatement {
            net_income: 10.0,
            ..Default::default()
        };
        let b = IncomeStatement {
            net_income: 99.0,
            total_revenue: 50.0,
            ..Default::default()
        };
        let merged = a.merge(&b);
        assert_eq!(merged.net_income, 10.0);
        assert_eq!(merged.total_revenue, 50.0);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = r#"{"netIncome": 12.5, "totalRevenue": 100.0}"#;
        let income: IncomeStatement = serde_json::from_str(json).unwrap();
        assert_eq!(income.value(IncomeField::NetIncome), 12.5);
        assert_eq!(income.value(IncomeField::InterestExpense), 0.0);

        let json = r#"{"cashFromOperations": 3.0, "capex": -1.0}"#;
        let cash_flow: CashFlowStatement = serde_json::from_str(json).unwrap();
        assert_eq!(cash_flow.value(CashFlowField::CashFromOperations), 3.0);
    }
}
