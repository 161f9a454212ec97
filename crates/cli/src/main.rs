//! CLI tool for converting Beamer sources to JSON slide decks.

use anyhow::{Context, Result};
use clap::Parser;
use deck_beamer::{build_deck, convert_file, deck_json, DeckOptions};
use std::path::PathBuf;

/// Convert a LaTeX Beamer presentation to a JSON slide deck.
#[derive(Parser, Debug)]
#[command(name = "deck-convert")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Beamer source file (.tex)
    input: PathBuf,

    /// Output slide-deck file (.json)
    output: PathBuf,

    /// Course label stamped into the deck metadata
    #[arg(default_value = "CMSC 173")]
    course: String,

    /// Institution name stamped into the deck metadata
    #[arg(long, default_value = "University of the Philippines - Cebu")]
    institution: String,

    /// Print the deck JSON to stdout instead of writing the output file
    #[arg(short, long)]
    print: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let options = DeckOptions {
        course: args.course,
        institution: args.institution,
    };

    if args.verbose {
        eprintln!("Processing: {}", args.input.display());
    }

    if args.print {
        log::debug!("Printing deck to stdout");
        let content = std::fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to open {}", args.input.display()))?;
        let deck = build_deck(&content, &args.input, &options);
        print!("{}", deck_json(&deck)?);
        return Ok(());
    }

    log::debug!("Writing deck to {}", args.output.display());
    let deck = convert_file(&args.input, &args.output, &options)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    println!(
        "Converted {} slides to {}",
        deck.slide_count(),
        args.output.display()
    );

    Ok(())
}
