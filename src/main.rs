//! # chatpulse CLI
//!
//! Command-line interface for the chatpulse library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatpulse::PulseError;
use chatpulse::cli::Args;
use chatpulse::core::{Pipeline, RunStats};
use chatpulse::error::SkipReason;
use chatpulse::logging::init_logging;

fn main() {
    let args = <Args as ClapParser>::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("⚠️  Logging disabled: {}", e);
    }

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PulseError> {
    let total_start = Instant::now();
    let config = args.to_config()?;

    // Print header
    println!("💫 chatpulse v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", config.input_path.display());
    println!("💾 Output:  {}", config.output_path.display());
    println!("📄 Format:  {}", config.format);
    println!("📅 Year:    {}", config.target_year);
    match config.exclusions.month {
        Some(month) => println!("🚫 Exclude: month {}", month),
        None => println!("🚫 Exclude: none"),
    }
    for range in &config.exclusions.ranges {
        println!("🚫 Exclude: {}..{}", range.start, range.end);
    }
    println!();

    let pipeline = Pipeline::new(config)?;

    println!("⏳ Reading transcript...");
    let analysis = pipeline.run()?;
    let stats = analysis.stats;

    println!(
        "   Found {} messages, {} counted",
        stats.messages_extracted, stats.messages_counted
    );
    println!();
    println!("✅ saved {} points", stats.records_emitted);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Laughs:       {} messages", stats.laugh_messages);
    println!("   ILYs:         {} messages", stats.ily_messages);
    println!("   Active days:  {}", stats.active_days);
    if stats.excluded_active_days > 0 {
        println!(
            "   ⚠️  {} active days fall inside the exclusions",
            stats.excluded_active_days
        );
    }

    if args.stats {
        print_skip_stats(&stats);
    }

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Per-reason skip breakdown for `--stats`.
fn print_skip_stats(stats: &RunStats) {
    println!();
    println!("🔍 Skipped:");
    println!("   Lines read:   {}", stats.lines_read);
    println!("   Blank lines:  {}", stats.blank_lines);
    for reason in SkipReason::all() {
        println!("   {:<24} {}", format!("{}:", reason), stats.skipped_for(*reason));
    }
    println!("   {:<24} {}", "total:", stats.skipped());
    println!("   Counted:      {:.1}% of messages", stats.counted_ratio());
}
