//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use chatstat::cli::Args;
use chatstat::core::output::write_report;
use chatstat::core::{Analyzer, OVERALL, Report, apply_filters, users};
use chatstat::format::{OutputFormat, write_to_format};
use chatstat::parsers::TranscriptParser;
use chatstat::{ChatstatError, Message};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Fail on bad dates before touching the file
    let date_filter = args.filter_config()?;

    let parse_start = Instant::now();
    let content = fs::read_to_string(&args.input)?;
    let parser = TranscriptParser::with_config(args.transcript_config());
    let parsed = parser.parse_detailed(&content)?;
    info!(
        records = parsed.messages.len(),
        date_format = %parsed.date_format,
        elapsed_ms = parse_start.elapsed().as_millis(),
        "parsed transcript"
    );

    let messages = apply_filters(parsed.messages, &date_filter);
    if date_filter.is_active() {
        debug!(records = messages.len(), "applied date range");
    }

    if args.list_users {
        for user in users(&messages) {
            println!("{user}");
        }
        return Ok(());
    }

    let user_filter = args.user_filter();
    let selected: Vec<Message> = user_filter.select(&messages).cloned().collect();
    if selected.is_empty() {
        let user = (!user_filter.is_overall()).then(|| user_filter.to_string());
        return Err(ChatstatError::empty(user));
    }

    let analyzer = Analyzer::new(args.analysis_config());

    match &args.output {
        Some(path) if args.report => {
            let report = analyzer.report(&messages, &user_filter);
            write_report(&report, path)?;
            println!("✅ Report saved to {path}");
        }
        Some(path) => {
            let format: OutputFormat = match args.format {
                Some(format) => format.into(),
                None => OutputFormat::from_path(path)?,
            };
            write_to_format(&selected, path, format)?;
            println!("✅ {} records written to {path} ({format})", selected.len());
        }
        None => {
            let report = analyzer.report(&messages, &user_filter);
            print_report(&report);
        }
    }

    debug!(elapsed_ms = total_start.elapsed().as_millis(), "done");
    Ok(())
}

fn print_report(report: &Report) {
    println!("📊 chatstat v{} - {}", env!("CARGO_PKG_VERSION"), report.user);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages:  {}", report.summary.messages);
    println!("   Words:     {}", report.summary.words);
    println!("   Media:     {}", report.summary.media);
    println!("   Links:     {}", report.summary.links);

    if report.user == OVERALL {
        println!();
        println!("👥 Most busy users:");
        for share in &report.busy_users.shares {
            println!(
                "   {:<24} {:>6}  {:>6.2}%",
                share.sender,
                share.messages,
                share.rounded()
            );
        }
    }

    println!();
    println!("🗓️  Monthly timeline:");
    for point in &report.monthly_timeline {
        println!("   {:<16} {:>6}", point.label, point.messages);
    }

    println!();
    println!("📈 Daily timeline:");
    for point in &report.daily_timeline {
        println!("   {:<16} {:>6}", point.date, point.messages);
    }

    print_frequency("📅 Busiest days:", &report.week_activity);
    print_frequency("📆 Busiest months:", &report.month_activity);

    if !report.heatmap.is_empty() {
        println!();
        println!("🔥 Activity heatmap:");
        println!("   {:<10} {}", "", report.heatmap.columns.join(" "));
        for (row, counts) in report.heatmap.rows.iter().zip(&report.heatmap.counts) {
            let cells: Vec<String> = report
                .heatmap
                .columns
                .iter()
                .zip(counts)
                .map(|(column, count)| format!("{count:>width$}", width = column.len()))
                .collect();
            println!("   {:<10} {}", row, cells.join(" "));
        }
    }

    print_frequency("💬 Most common words:", &report.common_words);
    print_frequency("😀 Emojis:", &report.emojis);
}

fn print_frequency(title: &str, table: &[(String, usize)]) {
    if table.is_empty() {
        return;
    }
    println!();
    println!("{title}");
    for (label, count) in table {
        println!("   {label:<16} {count:>6}");
    }
}
