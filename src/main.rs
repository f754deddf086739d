//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `book_labels` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use book_labels::config::{Cli, Command};
use book_labels::initialization::init_logger_with;
use book_labels::{convert_csv, convert_fiction, convert_library};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli.command).await {
        eprintln!("book_labels error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Csv(args) => {
            let report = convert_csv(args.into()).await?;
            println!(
                "✅ Wrote {} record{} to {} in {:.1}s{}",
                report.records,
                plural(report.records),
                report.output.display(),
                report.elapsed_seconds,
                if report.downloaded {
                    " (listing downloaded)"
                } else {
                    ""
                }
            );
        }
        Command::Library(args) => {
            let report = convert_library(args.into()).await?;
            if let Some(seeded) = report.seeded {
                println!("Seeded {} book row{}", seeded, plural(seeded));
            }
            println!(
                "✅ Wrote {} record{} to {} in {:.1}s",
                report.records,
                plural(report.records),
                report.output.display(),
                report.elapsed_seconds
            );
        }
        Command::Fiction(args) => {
            let report = convert_fiction(args.into()).await?;
            println!(
                "✅ Wrote {} record{} from {} row{} to {} and {} in {:.1}s",
                report.counts.total,
                plural(report.counts.total),
                report.counts.orginal,
                plural(report.counts.orginal),
                report.json_output.display(),
                report.custom_output.display(),
                report.elapsed_seconds
            );
        }
    }
    Ok(())
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
