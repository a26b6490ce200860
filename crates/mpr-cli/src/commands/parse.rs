//! Parse command - extract pricing records from a single report file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info, warn};

use mpr_core::models::config::OutputFormat as ConfigFormat;
use mpr_core::{
    MarketReportParser, MprConfig, ParseReport, PdfExtractor, PricingRecord, ReportType, TextSource,
};

use super::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (PDF or extracted text)
    #[arg(required = true)]
    input: PathBuf,

    /// Report type (see `mpr reports`)
    #[arg(short = 't', long)]
    report_type: String,

    /// Publication date of the report, copied into the output
    #[arg(short = 'd', long)]
    report_date: Option<NaiveDate>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print parse statistics to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output, one row per record
    Csv,
    /// Plain text summary
    Text,
}

impl From<ConfigFormat> for OutputFormat {
    fn from(format: ConfigFormat) -> Self {
        match format {
            ConfigFormat::Json => Self::Json,
            ConfigFormat::Csv => Self::Csv,
            ConfigFormat::Text => Self::Text,
        }
    }
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

/// Output envelope for one parsed document.
#[derive(Serialize)]
pub struct ParsedReport<'a> {
    pub report_type: ReportType,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_date: Option<NaiveDate>,
    pub source: String,
    pub records: &'a [PricingRecord],
}

impl<'a> ParsedReport<'a> {
    pub fn new(report: &'a ParseReport, source: &Path, report_date: Option<NaiveDate>) -> Self {
        Self {
            report_type: report.report_type,
            title: report.report_type.title(),
            report_date,
            source: source.display().to_string(),
            records: &report.records,
        }
    }
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let report_type: ReportType = args.report_type.parse()?;
    info!("Processing file: {} as {}", args.input.display(), report_type);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Parsing {}...", args.input.display()));

    let report = parse_file(&args.input, report_type, &config)?;

    pb.finish_and_clear();

    if report.records.is_empty() {
        warn!("No pricing records found in {}", args.input.display());
    }

    let format = args.format.unwrap_or_else(|| config.output.format.into());
    let envelope = ParsedReport::new(&report, &args.input, args.report_date);
    let output = format_report(&envelope, format, config.output.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} {} records written to {}",
            style("✓").green(),
            report.records.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.stats {
        eprintln!("{}", serde_json::to_string_pretty(&report.stats)?);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read a report file and parse it; PDFs go through text extraction first.
pub fn parse_file(
    path: &Path,
    report_type: ReportType,
    config: &MprConfig,
) -> anyhow::Result<ParseReport> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let parser = MarketReportParser::from_config(&config.parser);

    let report = if extension == "pdf" {
        let data = fs::read(path)?;
        let extractor = PdfExtractor::from_bytes(&data)?;
        debug!("PDF has {} pages", extractor.page_count());
        parser.parse_source(&extractor, report_type)?
    } else {
        let text = fs::read_to_string(path)?;
        parser.parse_source(&TextSource::new(text), report_type)?
    };

    Ok(report)
}

pub fn format_report(
    report: &ParsedReport<'_>,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &ParsedReport<'_>) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "product_name",
        "product_code",
        "category",
        "price",
        "low_price",
        "high_price",
        "volume",
        "num_trades",
        "meat_type",
        "report_type",
        "report_date",
    ])?;

    let report_date = report.report_date.map(|d| d.to_string()).unwrap_or_default();

    for record in report.records {
        wtr.write_record([
            record.product_name.clone(),
            record.product_code.clone().unwrap_or_default(),
            record.category.clone().unwrap_or_default(),
            opt_to_string(record.price),
            opt_to_string(record.low_price),
            opt_to_string(record.high_price),
            opt_to_string(record.volume),
            opt_to_string(record.num_trades()),
            record.meat_type.to_string(),
            record.report_type.to_string(),
            report_date.clone(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &ParsedReport<'_>) -> String {
    let mut output = String::new();

    output.push_str(&format!("Report: {} ({})\n", report.title, report.report_type));
    if let Some(date) = report.report_date {
        output.push_str(&format!("Date: {}\n", date));
    }
    output.push_str(&format!("Source: {}\n", report.source));
    output.push_str(&format!("Records: {}\n", report.records.len()));

    let mut by_category: BTreeMap<&str, Vec<&PricingRecord>> = BTreeMap::new();
    for record in report.records {
        by_category
            .entry(record.category.as_deref().unwrap_or("(uncategorized)"))
            .or_default()
            .push(record);
    }

    for (category, records) in by_category {
        output.push_str(&format!("\n{} ({} records)\n", category, records.len()));
        for record in records {
            output.push_str(&format!(
                "  {:<48} {:>10} {:>12}\n",
                record.product_name,
                opt_to_string(record.price),
                opt_to_string(record.volume),
            ));
        }
    }

    output
}

fn opt_to_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
