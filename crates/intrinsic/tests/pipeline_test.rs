//! Integration tests for the evaluation pipeline.

use chrono::NaiveDate;
use intrinsic::data::{
    BalanceSheet, CashFlowStatement, HistoricalPrice, IncomeStatement, JsonSnapshotStore, Stock,
};
use intrinsic::output::{ExportFormat, StockReport};
use intrinsic::valuation::{Instruction, ValuationModel};
use intrinsic::{ExchangeUniverse, Pipeline, PipelineError, StaticUniverse};
use std::fs;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Three years of flat quarterly statements and prices through 2023.
fn company(symbol: &str) -> Stock {
    let mut stock = Stock::new(symbol);
    stock.shares_outstanding = 100.0;
    stock.current_price = 20.0;

    let statements = &mut stock.financial_statements;
    for year in 2021..2024 {
        for (m, d) in [(3, 31), (6, 30), (9, 30), (12, 31)] {
            let quarter = date(year, m, d);
            statements.income_statements.insert(
                quarter,
                IncomeStatement {
                    total_revenue: 200.0,
                    net_income: 30.0,
                    income_before_tax: 40.0,
                    ..Default::default()
                },
            );
            statements.balance_sheets.insert(
                quarter,
                BalanceSheet {
                    assets: 1000.0,
                    current_assets: 500.0,
                    liabilities: 400.0,
                    current_liabilities: 200.0,
                    retained_earnings: 100.0,
                    cash: 50.0,
                },
            );
            statements.cash_flow_statements.insert(
                quarter,
                CashFlowStatement {
                    dividends_paid: 5.0,
                    cash_from_operations: 40.0,
                    capex: -10.0,
                },
            );
        }
    }

    for day in date(2023, 1, 2).iter_days().take(365) {
        stock.historical_pricing.insert(
            day,
            HistoricalPrice {
                open: 20.0,
                close: 20.0,
                ..Default::default()
            },
        );
    }
    stock
}

fn setup() -> (TempDir, JsonSnapshotStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonSnapshotStore::new(dir.path().join("data"));
    store.save(&company("BHP"), "ASX").unwrap();
    store.save(&company("CBA"), "ASX").unwrap();
    store.save(&Stock::new("EMPTY"), "ASX").unwrap();
    fs::write(store.snapshot_path("BROKEN", "ASX"), "{ not json").unwrap();
    (dir, store)
}

#[test]
fn test_evaluate_symbol_writes_report() {
    let (dir, store) = setup();
    let out = dir.path().join("out");
    let pipeline = Pipeline::new(store, ValuationModel::default(), &out).unwrap();

    let evaluation = pipeline.evaluate_symbol("BHP", "ASX", None).unwrap();
    assert_eq!(evaluation.path, out.join("stocks").join("ASX").join("BHP.json"));

    let written = StockReport::from_path(&evaluation.path).unwrap();
    assert_eq!(written.symbol, "BHP");
    assert_eq!(written.exchange, "ASX");
    // Twelve quarters of 30 averaged over the default five years.
    assert_eq!(written.valuation.eps, 0.72);
    assert_eq!(written.valuation.liquidation_iv, 6.0);
}

#[test]
fn test_historical_snapshot_is_rewound() {
    let (dir, store) = setup();
    let out = dir.path().join("out");
    let pipeline = Pipeline::new(store, ValuationModel::default(), &out).unwrap();

    let as_of = date(2023, 6, 30);
    let evaluation = pipeline.evaluate_symbol("CBA", "ASX", Some(as_of)).unwrap();

    assert_eq!(
        evaluation.path,
        out.join("snapshots").join("2023-06-30").join("ASX").join("CBA.json")
    );
    let report = &evaluation.report;
    assert_eq!(report.as_of, Some(as_of));
    assert_eq!(report.stock.financial_statements.income_statements.len(), 10);
    assert!(
        report
            .stock
            .historical_pricing
            .keys()
            .all(|d| *d <= as_of)
    );
}

#[test]
fn test_universe_isolates_failures() {
    let (dir, store) = setup();
    let universe = ExchangeUniverse::load(&store, "ASX").unwrap();
    let pipeline = Pipeline::new(store, ValuationModel::default(), dir.path().join("out")).unwrap();

    let outcome = pipeline.evaluate_universe(&universe, "ASX");

    // BROKEN cannot be parsed; EMPTY has no balance sheet but still gets a report.
    let symbols: Vec<&str> = outcome.reports.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["BHP", "CBA", "EMPTY"]);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].symbol, "BROKEN");

    let empty = &outcome.reports[2].valuation;
    assert_eq!(empty.instruction, Instruction::Sell);
    assert_eq!(empty.fair_value, 0.0);

    let summary = outcome.summary("ASX");
    assert_eq!(summary.evaluated, 3);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(outcome.exports().len(), 3);
}

#[test]
fn test_static_universe_with_unknown_symbol() {
    let (dir, store) = setup();
    let pipeline = Pipeline::new(store, ValuationModel::default(), dir.path().join("out")).unwrap();

    let outcome = pipeline.evaluate_universe(&StaticUniverse::new(["BHP", "NOPE"]), "ASX");
    assert_eq!(outcome.reports.len(), 1);
    assert_eq!(outcome.failures[0].symbol, "NOPE");
}

#[test]
fn test_backfill_skips_months_before_first_price() {
    let (dir, store) = setup();
    let out = dir.path().join("out");
    let pipeline = Pipeline::new(store, ValuationModel::default(), &out).unwrap();

    let evaluations = pipeline
        .backfill("BHP", "ASX", date(2022, 11, 15), date(2023, 3, 10))
        .unwrap();

    let dates: Vec<NaiveDate> = evaluations
        .iter()
        .filter_map(|e| e.report.as_of)
        .collect();
    assert_eq!(dates, [date(2023, 1, 31), date(2023, 2, 28)]);
    assert!(out.join("snapshots").join("2023-02-28").join("ASX").join("BHP.json").exists());

    assert!(
        pipeline
            .backfill("BHP", "ASX", date(2023, 5, 1), date(2023, 1, 1))
            .is_err()
    );
}

#[test]
fn test_batch_export_writes_rows() {
    let (dir, store) = setup();
    let pipeline = Pipeline::new(store, ValuationModel::default(), dir.path().join("out")).unwrap();
    let outcome = pipeline.evaluate_universe(&StaticUniverse::new(["BHP", "CBA"]), "ASX");

    let path = dir.path().join("exports").join("asx.csv");
    outcome.export_to(&path, ExportFormat::Csv).unwrap();

    let csv = fs::read_to_string(&path).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.lines().nth(1).unwrap().starts_with("BHP,ASX,"));

    // A directory where the file should go cannot be written.
    let blocked = dir.path().join("exports");
    assert!(matches!(
        outcome.export_to(&blocked, ExportFormat::Json),
        Err(PipelineError::Export(_))
    ));
}

#[test]
fn test_lowercase_snapshot_is_found() {
    let (dir, store) = setup();
    store.save(&company("brk.b"), "NYSE").unwrap();
    let universe = ExchangeUniverse::load(&store, "NYSE").unwrap();
    let pipeline = Pipeline::new(store, ValuationModel::default(), dir.path().join("out")).unwrap();

    let outcome = pipeline.evaluate_universe(&universe, "NYSE");
    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.reports[0].symbol, "brk.b");

    let evaluation = pipeline.evaluate_symbol("brk.b", "NYSE", None).unwrap();
    assert!(evaluation.path.ends_with("NYSE/brk.b.json"));
}
