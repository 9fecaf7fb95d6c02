use cardplan::application::engine::AmortizationEngine;
use cardplan::domain::contribution::ExtraContribution;
use cardplan::domain::ports::ScheduleSinkBox;
use cardplan::interfaces::csv::contribution_reader::ContributionReader;
use cardplan::interfaces::csv::schedule_writer::ScheduleWriter;
use cardplan::interfaces::form::ScheduleForm;
use cardplan::interfaces::json::JsonScheduleWriter;
use cardplan::interfaces::table::TableWriter;
use chrono::Month;
use clap::{ArgAction, Parser, ValueEnum};
use log::{LevelFilter, info};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use simple_logger::SimpleLogger;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
    Table,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Balance owed at the start of the schedule
    #[arg(long, default_value = "198000")]
    starting_balance: Decimal,

    /// Monthly interest rate in percent
    #[arg(long, default_value = "2.08")]
    interest_rate: Decimal,

    /// Admin fee charged every month
    #[arg(long, default_value = "1200")]
    admin_fee: Decimal,

    /// Monthly repayment amount
    #[arg(long, default_value = "7500")]
    repayment: Decimal,

    /// Month of the first repayment, e.g. "March"
    #[arg(long, default_value = "January", value_parser = parse_month)]
    start_month: Month,

    /// Year of the first repayment
    #[arg(long, default_value_t = 2024)]
    start_year: i32,

    /// Repayment duration in months (1-36)
    #[arg(long, default_value_t = 18)]
    months: u32,

    /// Extra contribution, e.g. "March 2024=5000". May be repeated.
    #[arg(long = "extra", value_name = "MONTH YEAR=AMOUNT")]
    extra: Vec<ExtraContribution>,

    /// CSV file of extra contributions with a month,year,amount header
    #[arg(long)]
    contributions: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Write the schedule to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_month(s: &str) -> std::result::Result<Month, String> {
    s.parse::<Month>()
        .map_err(|_| format!("'{s}' is not a month name"))
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(log_level(cli.verbose))
        .init()
        .into_diagnostic()?;

    // File contributions first, so --extra flags override them
    let mut contributions = Vec::new();
    if let Some(path) = &cli.contributions {
        let file = File::open(path).into_diagnostic()?;
        for contribution in ContributionReader::new(file).contributions() {
            contributions.push(contribution.into_diagnostic()?);
        }
        info!(
            "read {} extra contributions from {}",
            contributions.len(),
            path.display()
        );
    }
    contributions.extend(cli.extra);

    let form = ScheduleForm {
        starting_balance: cli.starting_balance,
        interest_rate_percent: cli.interest_rate,
        admin_fee: cli.admin_fee,
        repayment: cli.repayment,
        start_month: cli.start_month,
        start_year: cli.start_year,
        duration_months: cli.months,
        contributions,
    };
    let (params, request) = form.build().into_diagnostic()?;

    let engine = AmortizationEngine::new(params);
    let rows = engine.compute_schedule(&request).into_diagnostic()?;

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            info!("writing schedule to {}", path.display());
            Box::new(BufWriter::new(File::create(path).into_diagnostic()?))
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut sink: ScheduleSinkBox = match cli.format {
        OutputFormat::Csv => Box::new(ScheduleWriter::new(out)),
        OutputFormat::Json => Box::new(JsonScheduleWriter::new(out)),
        OutputFormat::Table => Box::new(TableWriter::new(out, engine.params().starting_balance)),
    };
    sink.write_schedule(&rows).into_diagnostic()?;

    Ok(())
}
