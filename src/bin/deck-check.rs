//! deck-check CLI tool.
//!
//! Usage:
//! ```bash
//! deck-check --catalog card.json check [--format Blitz] deck.txt
//! deck-check --catalog card.json export deck.txt
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fab_deck::cards::{CardCatalog, Format};
use fab_deck::config::FormatRules;
use fab_deck::deck::{encode, read_deck, DecodeReport};

/// Validate and re-export Flesh and Blood deck lists
#[derive(Parser)]
#[command(name = "deck-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Card catalog JSON dump
    #[arg(short, long, global = true, default_value = "data/card.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a deck list against its format rules
    Check {
        /// Deck list file
        deck: PathBuf,

        /// Check against this format instead of the deck's own
        #[arg(short, long)]
        format: Option<Format>,

        /// Format rules JSON (defaults to the built-in rules)
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Decode a deck list and print it in canonical form
    Export {
        /// Deck list file
        deck: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let catalog = CardCatalog::load_json(&cli.catalog)
        .with_context(|| format!("loading catalog {}", cli.catalog.display()))?;

    match cli.command {
        Commands::Check {
            deck,
            format,
            rules,
        } => {
            let rules = match rules {
                Some(path) => FormatRules::load_json(&path)
                    .with_context(|| format!("loading rules {}", path.display()))?,
                None => FormatRules::default(),
            };
            let (mut deck, report) = read_deck(&deck, &catalog)?;
            print_missing(&report);
            if let Some(format) = format {
                deck.set_format(format);
            }

            let legality = deck.check(&rules);
            println!(
                "{} ({}, {} cards)",
                deck.name(),
                deck.format(),
                deck.total_cards()
            );
            if legality.is_legal() {
                println!("Deck is legal.");
                Ok(ExitCode::SUCCESS)
            } else {
                for message in legality.messages() {
                    println!("  - {message}");
                }
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Export { deck } => {
            let (deck, report) = read_deck(&deck, &catalog)?;
            print_missing(&report);
            print!("{}", encode(&deck));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_missing(report: &DecodeReport) {
    if report.is_complete() {
        return;
    }
    eprintln!("Cards not found in catalog:");
    for name in &report.missing {
        eprintln!("  - {name}");
    }
}
