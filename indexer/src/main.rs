use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indexer::{ingest, render, run_query, stats_line, OutputFormat, QueryOptions};
use postings_core::InvertedIndex;
use tracing_subscriber::{fmt, EnvFilter};

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build an in-memory inverted index from tokenizer output and query it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one JSON token array per line, index it, then look up each TERM
    Index {
        /// Read tokenizer output from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
        /// Rank results by TF-IDF score
        #[arg(long, default_value_t = false)]
        scores: bool,
        /// Maximum results printed per term
        #[arg(long)]
        limit: Option<usize>,
        /// Output format for query results
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Terms to look up
        terms: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Index { input, scores, limit, format, terms } => {
            let opts = QueryOptions { scores, limit, format: format.into() };
            index_and_query(input, &terms, &opts)
        }
    }
}

fn index_and_query(input: Option<PathBuf>, terms: &[String], opts: &QueryOptions) -> Result<()> {
    let mut index = InvertedIndex::new();
    let report = match &input {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            ingest(BufReader::new(f), &mut index)?
        }
        None => ingest(io::stdin().lock(), &mut index)?,
    };

    for failure in &report.failures {
        eprintln!("parse error on line {}: {}", failure.line_number, failure.error);
    }
    eprintln!("{}", stats_line(&index));
    if index.is_empty() {
        tracing::warn!("no documents were indexed");
    }

    if terms.is_empty() {
        eprintln!("usage: indexer index [--scores] <query-term> [<query-term>...]");
        return Ok(());
    }

    for term in terms {
        let resp = run_query(&index, term, opts);
        println!("{}", render(&resp, opts.format)?);
    }
    Ok(())
}
