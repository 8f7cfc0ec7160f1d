//! Command-line interface components.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

use crate::binder::{BindStats, BindStrategy};
use crate::config::{ReaderConfig, TrimMode, UnsupportedKindPolicy};
use crate::dynamic::{DynamicRecord, DynamicSchema};
use crate::reader::CsvReader;

#[derive(Parser, Debug)]
#[command(name = "rowbind")]
#[command(about = "Bind a CSV file into typed records and print them")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// CSV file to read
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Column declaration NAME:KIND (text, bool, int, int64, float32, float64).
    /// Append '!' to the kind for a read-only column
    #[arg(short, long = "column", value_name = "NAME:KIND", required = true)]
    pub columns: Vec<String>,

    /// Treat the first row as a header and bind columns by name
    #[arg(short, long)]
    pub named: bool,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Trim whitespace around every token
    #[arg(long)]
    pub trim: bool,

    /// Accept rows with differing token counts
    #[arg(long)]
    pub flexible: bool,

    /// Leave columns of unsupported kinds unset instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Maximum number of records to print
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn strategy(&self) -> BindStrategy {
        if self.named {
            BindStrategy::ByName
        } else {
            BindStrategy::Positional
        }
    }

    pub fn reader_config(&self) -> crate::Result<ReaderConfig> {
        if !self.delimiter.is_ascii() {
            return Err(crate::Error::configuration(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }

        let trim = if self.trim {
            TrimMode::All
        } else {
            TrimMode::None
        };
        let unsupported = if self.lenient {
            UnsupportedKindPolicy::Skip
        } else {
            UnsupportedKindPolicy::Reject
        };

        let config = ReaderConfig::default()
            .with_delimiter(self.delimiter as u8)
            .with_trim(trim)
            .with_flexible(self.flexible)
            .with_unsupported_kinds(unsupported);
        config.validate()?;
        Ok(config)
    }

    pub fn schema(&self) -> crate::Result<DynamicSchema> {
        DynamicSchema::parse(self.columns.as_slice())
    }
}

/// Bind the input file and print the records
pub async fn run(args: &Args) -> Result<BindStats> {
    let schema = Arc::new(args.schema().context("Invalid column declarations")?);
    let reader = CsvReader::with_config(args.reader_config()?)?;

    let mut records: Vec<DynamicRecord> = Vec::new();
    let stats = reader
        .bind_file_async(
            args.strategy(),
            &args.input,
            || schema.new_record(),
            &mut records,
        )
        .await
        .with_context(|| format!("Failed to bind {}", args.input.display()))?;

    print!("{}", render_table(&schema, &records, args.limit));
    print_summary(&stats);

    Ok(stats)
}

/// Render up to `limit` records as an aligned text table
pub fn render_table(schema: &DynamicSchema, records: &[DynamicRecord], limit: usize) -> String {
    let shown = &records[..records.len().min(limit)];

    let cells: Vec<Vec<String>> = shown
        .iter()
        .map(|record| {
            record
                .iter()
                .map(|(_, value)| value.map_or_else(|| "-".to_string(), |v| v.to_string()))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = schema
        .descriptors()
        .iter()
        .enumerate()
        .map(|(i, d)| {
            cells
                .iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(d.field.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    let header: Vec<String> = schema
        .descriptors()
        .iter()
        .zip(&widths)
        .map(|(d, &w)| format!("{:<w$}", d.field).bold().to_string())
        .collect();
    out.push_str(&header.join("  "));
    out.push('\n');

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    if records.len() > shown.len() {
        out.push_str(
            &format!("... {} more record(s)", records.len() - shown.len())
                .dimmed()
                .to_string(),
        );
        out.push('\n');
    }

    out
}

fn print_summary(stats: &BindStats) {
    println!();
    println!(
        "{} {} record(s) from {} row(s), {} field(s) written",
        "Bound".green().bold(),
        stats.records_bound,
        stats.rows_read,
        stats.fields_written
    );

    if stats.fields_skipped > 0 {
        println!(
            "{} {} field(s) left unset (unsupported kind)",
            "Skipped".yellow().bold(),
            stats.fields_skipped
        );
    }

    if !stats.unmatched_columns.is_empty() {
        println!(
            "{} {}",
            "Unmatched columns:".yellow(),
            stats.unmatched_columns.join(", ")
        );
    }
}
