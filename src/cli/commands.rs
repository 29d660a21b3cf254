//! Command implementations for the litrisk CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::ThreadPoolBuilder;

use crate::catalog::{CatalogFile, PatternCatalog, builtin_definitions};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::{AnalyzerConfig, RiskAnalyzer};
use crate::error::{LitriskError, Result};
use crate::record::{EmailRecord, JsonlRecordReader};

/// Execute a CLI command.
pub fn execute_command(args: LitriskArgs) -> Result<()> {
    let analyzer = build_analyzer(&args)?;

    match &args.command {
        Command::Analyze(analyze_args) => analyze_email(&analyzer, analyze_args, &args),
        Command::Batch(batch_args) => analyze_batch(&analyzer, batch_args, &args),
        Command::Categories => {
            output_categories(&CategoryInfo::from_catalog(analyzer.catalog()), &args)
        }
    }
}

/// Assemble the catalog and analyzer from the global options.
pub fn build_analyzer(args: &LitriskArgs) -> Result<RiskAnalyzer> {
    let mut definitions = if args.no_builtin {
        Vec::new()
    } else {
        builtin_definitions()
    };

    if let Some(path) = &args.patterns {
        debug!("Loading catalog file: {}", path.display());
        definitions.extend(CatalogFile::from_path(path)?.categories);
    }

    let catalog = PatternCatalog::from_definitions(definitions)?;
    if catalog.is_empty() {
        return Err(LitriskError::catalog("catalog has no categories"));
    }

    let config = AnalyzerConfig::new()
        .context_chars(args.context_chars)
        .max_snippet_chars(args.max_snippet_chars);

    RiskAnalyzer::with_config(Arc::new(catalog), config)
}

/// Analyze a single email.
fn analyze_email(
    analyzer: &RiskAnalyzer,
    args: &AnalyzeArgs,
    cli_args: &LitriskArgs,
) -> Result<()> {
    let record = load_record(args)?;
    let report = analyzer.scan(&record);
    output_analysis(&report, cli_args)
}

/// Resolve the email to analyze from inline text, a file, or stdin.
pub fn load_record(args: &AnalyzeArgs) -> Result<EmailRecord> {
    if args.has_inline_text() {
        return Ok(EmailRecord {
            subject: args.subject.clone(),
            body: args.body.clone(),
            ..Default::default()
        });
    }

    let json = match args.input.as_deref() {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    parse_record(&json)
}

/// Parse one JSON email object.
pub fn parse_record(json: &str) -> Result<EmailRecord> {
    serde_json::from_str(json)
        .map_err(|e| LitriskError::parse(format!("Failed to parse email: {e}")))
}

/// Analyze every record of a JSON Lines file.
fn analyze_batch(
    analyzer: &RiskAnalyzer,
    args: &BatchArgs,
    cli_args: &LitriskArgs,
) -> Result<()> {
    let entries = run_batch(analyzer, args)?;
    output_batch(&entries, cli_args)
}

/// Read, analyze and pair up the records of a batch file.
pub fn run_batch(analyzer: &RiskAnalyzer, args: &BatchArgs) -> Result<Vec<BatchEntry>> {
    let start_time = Instant::now();
    let (lines, records) = read_batch(&args.input, args.skip_invalid)?;

    let results = match args.threads {
        Some(threads) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| LitriskError::config(format!("Failed to build thread pool: {e}")))?;
            pool.install(|| analyzer.analyze_batch(&records))
        }
        None => analyzer.analyze_batch(&records),
    };

    let entries: Vec<BatchEntry> = lines
        .into_iter()
        .zip(records)
        .zip(results)
        .map(|((line, record), result)| BatchEntry {
            line,
            source_path: record.source_path,
            result,
        })
        .collect();

    info!(
        "Analyzed {} emails from {} in {}ms",
        entries.len(),
        args.input.display(),
        start_time.elapsed().as_millis()
    );

    Ok(entries)
}

/// Read a JSON Lines file into line numbers and records.
fn read_batch(path: &Path, skip_invalid: bool) -> Result<(Vec<usize>, Vec<EmailRecord>)> {
    let mut lines = Vec::new();
    let mut records = Vec::new();

    for item in JsonlRecordReader::from_path(path)? {
        match item {
            Ok((line, record)) => {
                lines.push(line);
                records.push(record);
            }
            Err(LitriskError::Parse(msg)) if skip_invalid => {
                warn!("Skipping {msg}");
            }
            Err(e) => return Err(e),
        }
    }

    Ok((lines, records))
}
