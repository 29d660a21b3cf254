//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::PatternCatalog;
use crate::cli::args::{LitriskArgs, OutputFormat};
use crate::engine::{AnalysisResult, RiskReport};
use crate::error::Result;

/// One analyzed line of a batch file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// 1-based line number in the input file.
    pub line: usize,
    /// The record's `source_path`, if it had one.
    pub source_path: Option<String>,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// A catalog category as listed by the `categories` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub patterns: Vec<String>,
}

impl CategoryInfo {
    /// Describe every category of a catalog, in catalog order.
    pub fn from_catalog(catalog: &PatternCatalog) -> Vec<Self> {
        catalog
            .categories()
            .iter()
            .map(|category| CategoryInfo {
                name: category.name().to_string(),
                patterns: category
                    .patterns()
                    .iter()
                    .map(|re| re.as_str().to_string())
                    .collect(),
            })
            .collect()
    }
}

/// Output the analysis of a single email.
pub fn output_analysis(report: &RiskReport, args: &LitriskArgs) -> Result<()> {
    let result = report.summarize();
    match args.output_format {
        OutputFormat::Human => {
            output_analysis_human(report, &result);
            Ok(())
        }
        OutputFormat::Json => output_json(&result, args),
        OutputFormat::Csv => {
            println!("{}", ANALYSIS_CSV_HEADER.join(","));
            println!("{}", csv_row(&analysis_values(&result)));
            Ok(())
        }
    }
}

/// Output the results of a batch run.
pub fn output_batch(entries: &[BatchEntry], args: &LitriskArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            output_batch_human(entries, args);
            Ok(())
        }
        OutputFormat::Json => output_json(&entries, args),
        OutputFormat::Csv => {
            println!("line,source_path,{}", ANALYSIS_CSV_HEADER.join(","));
            for entry in entries {
                let mut values = vec![
                    Value::from(entry.line),
                    entry
                        .source_path
                        .as_deref()
                        .map_or(Value::Null, Value::from),
                ];
                values.extend(analysis_values(&entry.result));
                println!("{}", csv_row(&values));
            }
            Ok(())
        }
    }
}

/// Output the catalog listing.
pub fn output_categories(categories: &[CategoryInfo], args: &LitriskArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("Risk Categories:");
            println!("════════════════");
            for category in categories {
                println!();
                println!("{} ({} patterns)", category.name, category.patterns.len());
                for pattern in &category.patterns {
                    println!("  {pattern}");
                }
            }
            Ok(())
        }
        OutputFormat::Json => output_json(&categories, args),
        OutputFormat::Csv => {
            println!("name,pattern_count");
            for category in categories {
                let values = [
                    Value::from(category.name.as_str()),
                    Value::from(category.patterns.len()),
                ];
                println!("{}", csv_row(&values));
            }
            Ok(())
        }
    }
}

const ANALYSIS_CSV_HEADER: [&str; 4] = [
    "risk_score",
    "risk_categories",
    "num_flags",
    "flagged_snippets",
];

fn analysis_values(result: &AnalysisResult) -> Vec<Value> {
    vec![
        Value::from(result.risk_score),
        Value::from(result.risk_categories.as_str()),
        Value::from(result.num_flags),
        Value::from(result.flagged_snippets.as_str()),
    ]
}

/// Output a single analysis in human format.
fn output_analysis_human(report: &RiskReport, result: &AnalysisResult) {
    println!("Risk Analysis:");
    println!("══════════════");
    println!("Risk score: {}", result.risk_score);
    if result.risk_categories.is_empty() {
        println!("Categories: none");
    } else {
        println!("Categories: {}", result.risk_categories);
    }
    println!("Flags: {}", result.num_flags);

    if !report.is_empty() {
        println!();
        println!("Flagged Snippets:");
        println!("─────────────────");
        for flag in report.flags() {
            let snippet = flag.annotated().replace('\n', " ");
            println!(
                "  {snippet}  (chars {}..{})",
                flag.occurrence.start, flag.occurrence.end
            );
        }
    }
}

/// Output batch results in human format.
fn output_batch_human(entries: &[BatchEntry], args: &LitriskArgs) {
    let flagged = entries.iter().filter(|e| e.result.num_flags > 0).count();

    for entry in entries {
        if entry.result.num_flags == 0 && args.verbosity() < 2 {
            continue;
        }
        let source = entry
            .source_path
            .as_deref()
            .map(|p| format!(" ({p})"))
            .unwrap_or_default();
        println!(
            "Line {}{source}: score {}, {} flags [{}]",
            entry.line,
            entry.result.risk_score,
            entry.result.num_flags,
            entry.result.risk_categories
        );
    }

    if args.verbosity() > 0 {
        println!();
        println!("Emails analyzed: {}", entries.len());
        println!("Emails flagged: {flagged}");
    }
}

/// Output in JSON format.
fn output_json<T: Serialize + ?Sized>(result: &T, args: &LitriskArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn csv_row(values: &[Value]) -> String {
    values
        .iter()
        .map(format_csv_value)
        .collect::<Vec<_>>()
        .join(",")
}

/// Format a JSON value for CSV output.
fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
                let escaped = s.replace('"', "\"\"");
                format!("\"{escaped}\"")
            } else {
                s.clone()
            }
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "".to_string(),
        other => format_csv_value(&Value::String(other.to_string())),
    }
}
