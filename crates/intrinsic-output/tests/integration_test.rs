//! Integration tests for reports, exports and summaries.

use chrono::NaiveDate;
use intrinsic_data::Stock;
use intrinsic_output::{
    ExportFormat, Exporter, FailedSymbol, ReportBuilder, ScreenSummary, StockReport,
    ValuationExport,
};
use intrinsic_valuation::{Health, Instruction, Valuation};

fn report(symbol: &str, price: f64, fair_value: f64) -> StockReport {
    let mut stock = Stock::new(symbol);
    stock.exchange = "ASX".to_string();
    stock.current_price = price;

    let instruction = if price < fair_value {
        Instruction::Buy
    } else {
        Instruction::Sell
    };
    ReportBuilder::new()
        .stock(stock)
        .valuation(Valuation {
            fair_value,
            pe_multiple_iv: fair_value,
            expected_return: 100.0 * (fair_value - price) / price,
            instruction,
            health: Health::Healthy,
            ..Default::default()
        })
        .build()
        .unwrap()
}

#[test]
fn test_report_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stocks").join("ASX").join("BHP.json");

    let report = report("BHP", 40.0, 50.0);
    report.write_to(&path).unwrap();

    let loaded = StockReport::from_path(&path).unwrap();
    assert_eq!(loaded, report);
    assert_eq!(loaded.valuation.instruction, Instruction::Buy);
}

#[test]
fn test_historical_report_records_date() {
    let date = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
    let report = ReportBuilder::new()
        .stock(Stock::new("CBA"))
        .valuation(Valuation::default())
        .as_of(date)
        .build()
        .unwrap();
    assert!(report.to_json().unwrap().contains("\"asOf\": \"2022-12-31\""));
}

#[test]
fn test_full_screen_workflow() {
    let reports = vec![
        report("BHP", 40.0, 50.0),
        report("CBA", 100.0, 90.0),
        report("WES", 50.0, 75.0),
    ];
    let failures = vec![FailedSymbol::new("XYZ", "snapshot missing")];

    // Export every row to CSV on disk.
    let dir = tempfile::tempdir().unwrap();
    let rows: Vec<ValuationExport> = reports.iter().map(ValuationExport::from).collect();
    let csv_path = dir.path().join("out").join("screen.csv");
    rows.export_to_file(&csv_path, ExportFormat::Csv).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains("WES,ASX,50.0"));

    // Summarise.
    let summary = ScreenSummary::from_reports("ASX", &reports, failures);
    assert_eq!(summary.buy, 2);
    assert_eq!(summary.sell, 1);
    assert_eq!(summary.healthy, 3);
    assert_eq!(summary.candidates[0].symbol, "WES");
    assert_eq!(summary.candidates[1].symbol, "BHP");

    let table = summary.to_ascii_table();
    assert!(table.contains("Screen Summary: ASX"));
    assert!(table.contains("XYZ"));
    assert!(table.contains("snapshot missing"));
}
