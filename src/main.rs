//! Investment Compare CLI
//!
//! Command-line interface for comparing the reference rate against the fund

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use investment_compare::{
    normalize::{format_monetary_amount, format_percentage},
    ComparisonRequest, ProjectionSchedule, RateConfig,
};
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "investment-compare",
    version,
    about = "Compare a reference rate against a fixed-income fund"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare a single investment
    Compare(CompareArgs),
    /// Compare every row of a CSV file (initialInvestment,monthlyInvestment,timeInvestment)
    Batch(BatchArgs),
}

#[derive(Args)]
struct RateArgs {
    /// Reference annual rate as a decimal (overrides SELIC_ANNUAL_RATE)
    #[arg(long)]
    reference_rate: Option<f64>,

    /// Fund annual rate as a decimal (overrides ARCA_ANNUAL_RATE)
    #[arg(long)]
    fund_rate: Option<f64>,
}

impl RateArgs {
    fn resolve(&self) -> Result<RateConfig> {
        let rates = RateConfig::from_env()?.with_overrides(self.reference_rate, self.fund_rate)?;
        Ok(rates)
    }
}

#[derive(Args)]
struct CompareArgs {
    /// Initial investment, e.g. "R$ 10.000,00"
    #[arg(long)]
    initial: Option<String>,

    /// Monthly investment, e.g. "R$ 1.000,00"
    #[arg(long)]
    monthly: Option<String>,

    /// How long the money stays invested, e.g. "2 anos"
    #[arg(long)]
    years: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write both monthly schedules to this CSV file
    #[arg(long)]
    schedule: Option<PathBuf>,

    #[command(flatten)]
    rates: RateArgs,
}

#[derive(Args)]
struct BatchArgs {
    /// Input CSV with one request per row
    #[arg(long)]
    input: PathBuf,

    /// Output CSV
    #[arg(long, default_value = "comparison_output.csv")]
    output: PathBuf,

    #[command(flatten)]
    rates: RateArgs,
}

/// One line of the schedule export
#[derive(Serialize)]
struct ScheduleCsvRow<'a> {
    scenario: &'a str,
    annual_rate: f64,
    month: u32,
    bop_amount: f64,
    growth: f64,
    contribution: f64,
    eop_amount: f64,
}

/// One line of the batch output
#[derive(Serialize)]
struct BatchCsvRow {
    row: usize,
    months: Option<u32>,
    reference_amount: Option<f64>,
    fund_amount: Option<f64>,
    reference_display: Option<String>,
    fund_display: Option<String>,
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compare(args) => run_compare(args),
        Command::Batch(args) => run_batch(args),
    }
}

fn run_compare(args: CompareArgs) -> Result<()> {
    let rates = args.rates.resolve()?;
    let request = ComparisonRequest {
        initial_investment: args.initial,
        monthly_investment: args.monthly,
        time_investment: args.years,
    };

    let report = request.compare(&rates)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.headline());
        println!("  Taxa Selic:      {}", report.reference_display);
        println!("  Fundo Arca:      {}", report.fund_display);
        println!("  Total investido: {}", format_monetary_amount(report.total_invested));
        println!();
        println!("Taxa Selic: {} a.a.", format_percentage(report.reference_rate));
        println!("Rentabilidade do Arca: {} a.a.", format_percentage(report.fund_rate));
        println!("Data da última atualização: {}", report.rates_as_of_display());
    }

    if let Some(path) = args.schedule {
        let schedules = request.schedules(&rates)?;
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Unable to create schedule file {}", path.display()))?;

        write_schedule(&mut writer, "reference", &schedules.reference)?;
        write_schedule(&mut writer, "fund", &schedules.fund)?;
        writer.flush()?;

        info!("schedule written to {}", path.display());
    }

    Ok(())
}

fn write_schedule<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    scenario: &str,
    schedule: &ProjectionSchedule,
) -> Result<()> {
    for row in &schedule.rows {
        writer.serialize(ScheduleCsvRow {
            scenario,
            annual_rate: schedule.annual_rate,
            month: row.month,
            bop_amount: row.bop_amount,
            growth: row.growth,
            contribution: row.contribution,
            eop_amount: row.eop_amount,
        })?;
    }
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    let start = Instant::now();
    let rates = args.rates.resolve()?;

    let mut reader = csv::Reader::from_path(&args.input)
        .with_context(|| format!("Unable to open {}", args.input.display()))?;
    let requests: Vec<ComparisonRequest> = reader
        .deserialize::<ComparisonRequest>()
        .collect::<Result<_, _>>()
        .with_context(|| format!("Malformed request row in {}", args.input.display()))?;

    info!("loaded {} requests in {:?}", requests.len(), start.elapsed());

    // Rows are independent; evaluate them in parallel
    let as_of = Local::now().date_naive();
    let rows: Vec<BatchCsvRow> = requests
        .par_iter()
        .enumerate()
        .map(|(i, request)| match request.compare_on(&rates, as_of) {
            Ok(report) => BatchCsvRow {
                row: i + 1,
                months: Some(report.months),
                reference_amount: Some(report.reference_amount),
                fund_amount: Some(report.fund_amount),
                reference_display: Some(report.reference_display),
                fund_display: Some(report.fund_display),
                error: None,
            },
            Err(e) => BatchCsvRow {
                row: i + 1,
                months: None,
                reference_amount: None,
                fund_amount: None,
                reference_display: None,
                fund_display: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Unable to create {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let rejected = rows.iter().filter(|r| r.error.is_some()).count();
    println!(
        "Compared {} requests ({} rejected) in {:?}; results written to {}",
        rows.len(),
        rejected,
        start.elapsed(),
        args.output.display()
    );

    Ok(())
}
