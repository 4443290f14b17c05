//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use chatlens::cli::Args;
use chatlens::config::AnalysisConfig;
use chatlens::dialect::Dialect;
use chatlens::output::{OutputFormat, to_csv, to_json};
use chatlens::parser::{ExportParser, read_export};
use chatlens::report::Report;
use chatlens::stats::format_duration;
use chatlens::ChatlensError;

/// How many authors each ranking shows in text mode.
const TOP_AUTHORS: usize = 5;

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_logging(&args);

    if let Err(e) = run(&args) {
        if e.is_unrecognized_format() {
            eprintln!("❌ Error: unrecognized file format ({})", e);
        } else {
            eprintln!("❌ Error: {}", e);
        }
        process::exit(1);
    }
}

/// Logs go to stderr so JSON/CSV on stdout stay clean. `-v` wins over `RUST_LOG`.
fn setup_logging(args: &Args) {
    let filter = if args.verbose > 0 {
        EnvFilter::new(args.log_level())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()))
    };

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry().with(filter).with(layer).init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let start = Instant::now();
    let format = args.output_format()?;
    let config = args.analysis_config();
    let filter = args.filter_config()?;

    let content = read_export(&args.input)?;
    let parser = match args.dialect {
        Some(dialect) => ExportParser::new(dialect.into()),
        None => ExportParser::detect(&content).map_err(|e| e.with_path(&args.input))?,
    };
    let parsed = parser
        .parse_str(&content)
        .map_err(|e| e.with_path(&args.input))?;
    let parsed_count = parsed.len();
    let conversation = parsed.filter(&filter);

    match format {
        OutputFormat::Json => {
            let report = Report::build(&conversation, &config)?;
            emit(args.output.as_deref(), &to_json(&report)?, format)?;
        }
        OutputFormat::Csv => {
            emit(args.output.as_deref(), &to_csv(&conversation)?, format)?;
        }
        _ => {
            let report = Report::build(&conversation, &config)?;
            let dialect = parser.header().name();
            match args.output {
                Some(ref path) => {
                    let mut file = BufWriter::new(File::create(path)?);
                    write_summary(&mut file, args, dialect, &report, &config)?;
                    file.flush()?;
                    println!("✅ Done! {} saved to {}", format, path.display());
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    write_summary(&mut stdout, args, dialect, &report, &config)?;
                    stdout.flush()?;
                }
            }
        }
    }

    tracing::info!(
        parsed = parsed_count,
        kept = conversation.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "done"
    );
    Ok(())
}

/// Writes `content` to `path`, or to stdout when no path is given.
fn emit(path: Option<&Path>, content: &str, format: OutputFormat) -> Result<(), ChatlensError> {
    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(content.as_bytes())?;
            println!("✅ Done! {} saved to {}", format, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn write_summary(
    out: &mut impl Write,
    args: &Args,
    dialect: &str,
    report: &Report,
    config: &AnalysisConfig,
) -> io::Result<()> {
    let info = &report.info;

    writeln!(out, "💬 chatlens v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    writeln!(out, "📂 Input:    {}", args.input.display())?;
    writeln!(out, "🌐 Dialect:  {}", dialect_label(args, dialect))?;
    writeln!(out, "📎 Media:    {}", config.media_placeholder)?;
    if let Some(ref after) = args.after {
        writeln!(out, "📅 After:    {after}")?;
    }
    if let Some(ref before) = args.before {
        writeln!(out, "📅 Before:   {before}")?;
    }
    if let Some(ref from) = args.from {
        writeln!(out, "👤 From:     {from}")?;
    }

    writeln!(out)?;
    writeln!(out, "📊 Overview:")?;
    writeln!(out, "   Period:    {}", info.date_range())?;
    writeln!(out, "   Messages:  {}", info.message_count)?;
    writeln!(out, "   Authors:   {}", info.author_count)?;
    writeln!(out, "   Media:     {}", info.media_count)?;

    writeln!(out)?;
    writeln!(out, "❓ Top questioners:")?;
    for (author, count) in report.questions.iter().take(TOP_AUTHORS) {
        writeln!(out, "   {author}: {count}")?;
    }

    writeln!(out)?;
    writeln!(out, "🗣️  Most talkative:")?;
    for (author, count) in report.messages.iter().take(TOP_AUTHORS) {
        let length = report.mean_message_length.get(author).copied().unwrap_or_default();
        writeln!(out, "   {author}: {count} messages ({length:.1} chars avg)")?;
    }

    writeln!(out)?;
    writeln!(out, "🤐 Longest silences:")?;
    for (author, minutes) in report.max_silence_minutes.iter().take(TOP_AUTHORS) {
        let silence = chrono::TimeDelta::minutes(*minutes);
        writeln!(out, "   {author}: {}", format_duration(silence))?;
    }

    writeln!(out)?;
    writeln!(out, "🖼️  Mean media interval:")?;
    for (author, interval) in report.media_interval.iter().take(TOP_AUTHORS) {
        writeln!(out, "   {author}: {interval}")?;
    }
    Ok(())
}

fn dialect_label(args: &Args, detected: &str) -> String {
    match args.dialect {
        Some(dialect) => Dialect::from(dialect).to_string(),
        None => format!("{detected} (auto-detected)"),
    }
}
