//! Batch command - parse many report files of one type.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::task::JoinSet;
use tracing::{debug, error};

use mpr_core::{MprConfig, ParseReport, ReportType};

use super::load_config;
use super::parse::{OutputFormat, ParsedReport, format_report, parse_file};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Report type shared by every input
    #[arg(short = 't', long)]
    report_type: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    report: Option<ParseReport>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let report_type: ReportType = args.report_type.parse()?;

    // Expand glob pattern
    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let format = args.format.unwrap_or_else(|| config.output.format.into());
    let jobs = args.jobs.max(1);
    let mut pending = files.into_iter();
    let mut in_flight = JoinSet::new();
    let mut results = Vec::new();

    loop {
        while in_flight.len() < jobs {
            let Some(path) = pending.next() else { break };
            let config = config.clone();
            in_flight.spawn_blocking(move || process_single_file(path, report_type, &config));
        }

        let Some(joined) = in_flight.join_next().await else {
            break;
        };
        let result = joined?;
        pb.inc(1);

        match (&result.report, &result.error) {
            (Some(report), _) => {
                debug!(
                    "{}: {} records in {}ms",
                    result.path.display(),
                    report.records.len(),
                    result.processing_time_ms
                );
                if let Some(ref output_dir) = args.output_dir {
                    write_output(output_dir, &result.path, report, format, &config)?;
                }
            }
            (None, Some(e)) => {
                error!("Failed to process {}: {}", result.path.display(), e);
                if !args.continue_on_error {
                    pb.abandon();
                    anyhow::bail!("Failed to process {}: {}", result.path.display(), e);
                }
            }
            (None, None) => {}
        }

        results.push(result);
    }

    pb.finish_and_clear();
    results.sort_by(|a, b| a.path.cmp(&b.path));

    let succeeded = results.iter().filter(|r| r.report.is_some()).count();
    let failed = results.len() - succeeded;
    let total_records: usize = results
        .iter()
        .filter_map(|r| r.report.as_ref())
        .map(|r| r.records.len())
        .sum();

    if args.summary {
        let summary_path = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("summary.csv");
        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    eprintln!(
        "{} Processed {} files ({} ok, {} failed), {} records in {:.1}s",
        style("✓").green(),
        results.len(),
        succeeded,
        failed,
        total_records,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn process_single_file(path: PathBuf, report_type: ReportType, config: &MprConfig) -> FileResult {
    let file_start = Instant::now();
    let outcome = parse_file(&path, report_type, config);
    let processing_time_ms = file_start.elapsed().as_millis() as u64;

    match outcome {
        Ok(report) => FileResult {
            path,
            report: Some(report),
            error: None,
            processing_time_ms,
        },
        Err(e) => FileResult {
            path,
            report: None,
            error: Some(e.to_string()),
            processing_time_ms,
        },
    }
}

fn write_output(
    output_dir: &Path,
    input: &Path,
    report: &ParseReport,
    format: OutputFormat,
    config: &MprConfig,
) -> anyhow::Result<()> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    let output_path = output_dir.join(format!("{}.{}", stem, format.extension()));

    let envelope = ParsedReport::new(report, input, None);
    let content = format_report(&envelope, format, config.output.pretty)?;
    fs::write(&output_path, content)?;

    Ok(())
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["file", "status", "records", "error", "processing_time_ms"])?;

    for result in results {
        let (status, records) = match &result.report {
            Some(report) => ("ok", report.records.len().to_string()),
            None => ("error", String::new()),
        };
        wtr.write_record([
            result.path.display().to_string(),
            status.to_string(),
            records,
            result.error.clone().unwrap_or_default(),
            result.processing_time_ms.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
