//! Intrinsic CLI binary.
//!
//! Values stored company snapshots and writes one report per stock.

mod settings;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use intrinsic::{ExchangeUniverse, Pipeline, Universe};
use intrinsic_data::{JsonSnapshotStore, dates};
use intrinsic_output::{ExportFormat, StockReport};
use intrinsic_valuation::{ValuationModel, ViabilityScreen};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "intrinsic")]
#[command(about = "Intrinsic: fundamental equity valuation", long_about = None)]
#[command(version)]
struct Cli {
    /// Snapshot root containing `stocks/{exchange}/{symbol}.json`
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory reports are written to
    #[arg(long, global = true, default_value = "output")]
    output_dir: PathBuf,

    /// Valuation model file (TOML)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value a single stock
    Evaluate {
        /// Stock symbol
        #[arg(long)]
        symbol: String,

        /// Exchange the snapshot is stored under
        #[arg(long)]
        exchange: String,

        /// Value the snapshot as it stood on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Value every stored stock of an exchange
    Universe {
        /// Exchange to evaluate
        #[arg(long)]
        exchange: String,

        /// Write one row per stock to this file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export format (csv or json)
        #[arg(long, default_value = "csv")]
        format: String,
    },

    /// Value a stock at every month end in a date range
    Backfill {
        /// Stock symbol
        #[arg(long)]
        symbol: String,

        /// Exchange the snapshot is stored under
        #[arg(long)]
        exchange: String,

        /// First date (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Last date (YYYY-MM-DD)
        #[arg(long)]
        to: String,
    },

    /// Print or write the effective valuation model
    Model {
        /// Write the model to this file instead of printing it
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Install the subscriber; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn,intrinsic=info",
        1 => "info,intrinsic=debug",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let model = settings::load_model(cli.model.as_deref())?;
    let data_dir = cli.data_dir.unwrap_or_else(settings::default_data_dir);
    let store = JsonSnapshotStore::new(data_dir);

    match cli.command {
        Commands::Evaluate {
            symbol,
            exchange,
            date,
        } => {
            let as_of = date.as_deref().map(dates::parse_date).transpose()?;
            let pipeline = Pipeline::new(store, model, cli.output_dir)?;
            evaluate_symbol(&pipeline, &symbol, &exchange, as_of)?;
        }
        Commands::Universe {
            exchange,
            export,
            format,
        } => {
            let format: ExportFormat = format.parse()?;
            let universe = ExchangeUniverse::load(&store, &exchange)?;
            let pipeline = Pipeline::new(store, model, cli.output_dir)?;
            run_universe(&pipeline, &universe, export.as_deref(), format)?;
        }
        Commands::Backfill {
            symbol,
            exchange,
            from,
            to,
        } => {
            let from = dates::parse_date(&from)?;
            let to = dates::parse_date(&to)?;
            let pipeline = Pipeline::new(store, model, cli.output_dir)?;
            run_backfill(&pipeline, &symbol, &exchange, from, to)?;
        }
        Commands::Model { output } => write_model(&model, output.as_deref())?,
    }

    Ok(())
}

fn evaluate_symbol(
    pipeline: &Pipeline,
    symbol: &str,
    exchange: &str,
    as_of: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let evaluation = pipeline.evaluate_symbol(symbol, exchange, as_of)?;
    print_report(&evaluation.report, pipeline.model());
    println!("Report: {}", evaluation.path.display());
    Ok(())
}

fn print_report(report: &StockReport, model: &ValuationModel) {
    let v = &report.valuation;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!(
        "║{:^62}║",
        format!("VALUATION: {} ({})", report.symbol, report.exchange)
    );
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if let Some(date) = report.as_of {
        println!("  As of:            {}", date);
    }
    println!("  Price:            {:.2}", report.stock.current_price);
    println!("  Fair value:       {:.2}", v.fair_value);
    println!("  Expected return:  {:.2}%", v.expected_return);
    println!("  Instruction:      {}", v.instruction);
    println!("  Health:           {} (Z = {:.2})", v.health, v.altman_z_score);

    println!("\n  Intrinsic values");
    println!("    P/E multiple:   {:.2}", v.pe_multiple_iv);
    println!("    Graham:         {:.2}", v.graham_iv);
    println!("    DCF:            {:.2}", v.dcf_iv);
    println!("    ROE:            {:.2}", v.roe_iv);
    println!("    Liquidation:    {:.2}", v.liquidation_iv);

    println!("\n  Ratios");
    println!(
        "    ROE {:.2}  ROA {:.2}  EPS {:.2}  P/E {:.2}  PEG {:.2}  P/B {:.2}",
        v.roe, v.roa, v.eps, v.pe, v.peg, v.pb
    );
    println!(
        "    D/E {:.2}  CR {:.2}  Growth {:.4}  Statement years {}",
        v.dte, v.cr, v.growth_rate, v.statement_years
    );

    let violations = ViabilityScreen::new(model).violations(v);
    if violations.is_empty() {
        println!("\n  Passes every screening rule");
    } else {
        println!("\n  Failed screening rules");
        for violation in violations {
            println!("    - {}", violation);
        }
    }
    println!();
}

fn run_universe(
    pipeline: &Pipeline,
    universe: &ExchangeUniverse,
    export: Option<&Path>,
    format: ExportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(universe.size() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Valuing {}...", universe.exchange()));

    let outcome = pipeline.evaluate_universe_with(universe, universe.exchange(), |symbol| {
        pb.set_message(symbol.to_string());
        pb.inc(1);
    });
    pb.finish_with_message(format!(
        "Valued {} stocks ({} failed)",
        outcome.reports.len(),
        outcome.failures.len()
    ));

    let summary = outcome.summary(universe.exchange());
    println!("\n{}", summary.to_ascii_table());

    if let Some(path) = export {
        outcome.export_to(path, format)?;
        println!("Exported {} rows to {}", outcome.reports.len(), path.display());
    }
    Ok(())
}

fn run_backfill(
    pipeline: &Pipeline,
    symbol: &str,
    exchange: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<(), Box<dyn std::error::Error>> {
    let evaluations = pipeline.backfill(symbol, exchange, from, to)?;

    println!("{} monthly valuations for {}", evaluations.len(), symbol);
    println!(
        "{:<12} {:>10} {:>10} {:>10}  {}",
        "Date", "Price", "Fair", "Return %", "Instruction"
    );
    for evaluation in &evaluations {
        let report = &evaluation.report;
        let date = report.as_of.map(|d| d.to_string()).unwrap_or_default();
        println!(
            "{:<12} {:>10.2} {:>10.2} {:>10.2}  {}",
            date,
            report.stock.current_price,
            report.valuation.fair_value,
            report.valuation.expected_return,
            report.valuation.instruction
        );
    }
    Ok(())
}

fn write_model(
    model: &ValuationModel,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let toml = model.to_toml_string()?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, toml)?;
            println!("Model written to {}", path.display());
        }
        None => print!("{}", toml),
    }
    Ok(())
}
