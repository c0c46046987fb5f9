// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-sync: align per-locale JSON translation catalogs with a source catalog

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use locale_sync::catalog::Indent;
use locale_sync::config::SyncOptions;
use locale_sync::reconcile;
use locale_sync::reporter::{ConsoleReporter, Reporter};
use locale_sync::summary::{print_summary, write_summary, RunSummary};
use locale_sync::types::WriteMode;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "locale-sync")]
#[command(version)]
#[command(about = "Keep per-locale JSON translation catalogs in step with a source catalog")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create missing locale catalogs and align existing ones with the source
    Sync {
        #[command(flatten)]
        args: SyncArgs,
    },

    /// Report catalogs that are out of date without writing anything
    Check {
        #[command(flatten)]
        args: SyncArgs,
    },
}

#[derive(Args)]
struct SyncArgs {
    /// Options file (json/yaml); flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory containing the source catalog [default: src/i18n]
    #[arg(long, value_name = "DIR")]
    source: Option<PathBuf>,

    /// Source catalog file name [default: messages.json]
    #[arg(long, value_name = "FILE")]
    source_file: Option<String>,

    /// Output directory [default: the source directory]
    #[arg(short, long, value_name = "DIR")]
    destination: Option<PathBuf>,

    /// Target locales (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    locales: Option<Vec<String>>,

    /// Indentation: "tab", a number of spaces, or a literal string [default: tab]
    #[arg(long, value_parser = parse_indent)]
    indent: Option<Indent>,

    /// Fail when a locale catalog cannot be compared
    #[arg(long)]
    strict: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Write a run summary (json, or yaml by extension)
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,
}

impl SyncArgs {
    fn options(&self) -> SyncOptions {
        SyncOptions {
            source: self.source.clone(),
            source_file: self.source_file.clone(),
            destination: self.destination.clone(),
            locales: self.locales.clone(),
            indent: self.indent.clone(),
            strict: self.strict.then_some(true),
        }
    }
}

fn parse_indent(value: &str) -> Result<Indent, String> {
    Ok(Indent::parse(value))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (args, mode) = match cli.command {
        Commands::Sync { args } => (args, WriteMode::Write),
        Commands::Check { args } => (args, WriteMode::Check),
    };

    let file_options = match &args.config {
        Some(path) => SyncOptions::load(path)?,
        None => SyncOptions::default(),
    };
    let config = file_options.overlay(args.options()).resolve(mode);
    let reporter = ConsoleReporter::new(args.quiet);

    let outcome = reconcile::run(&config, &reporter);
    let summary = RunSummary::new(&config, &outcome);
    print_summary(&summary, args.quiet);

    if let Some(path) = &args.summary {
        write_summary(&summary, path)?;
        reporter.notice(&format!("Summary saved to: {}", path.display()));
    }

    // The reporter has already printed the failure.
    if !outcome.success {
        process::exit(1);
    }
    Ok(())
}
