//! bibnames - parse bibliographic author fields into CSL names

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quarto_bibnames::{NameParser, NameRecord, ParserConfig};

#[derive(Parser, Debug)]
#[command(name = "bibnames")]
#[command(about = "Parse bibliographic author fields into CSL name records")]
struct Args {
    /// Author fields to parse. Reads one field per line from stdin when omitted.
    fields: Vec<String>,

    /// TOML file with parser settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One CSL-JSON array per field
    Json,
    /// One name per line, in reading order
    Display,
    /// Canonical BibTeX field, names joined with "and"
    Bibtex,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bibnames=info,quarto_bibnames=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ParserConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ParserConfig::default(),
    };
    let parser = NameParser::new(config);
    tracing::debug!(config = ?parser.config(), "Parser ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.fields.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            write_field(&mut out, &parser, &line, args.format)?;
        }
    } else {
        for field in &args.fields {
            write_field(&mut out, &parser, field, args.format)?;
        }
    }

    Ok(())
}

fn write_field(
    out: &mut impl Write,
    parser: &NameParser,
    field: &str,
    format: OutputFormat,
) -> Result<()> {
    let names = parser.parse(field);
    tracing::debug!(field, count = names.len(), "Parsed field");

    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &names).context("Failed to serialize names")?;
            writeln!(out)?;
        }
        OutputFormat::Display => {
            for name in &names {
                writeln!(out, "{}", name.display_name())?;
            }
        }
        OutputFormat::Bibtex => {
            let parts: Vec<String> = names.iter().map(NameRecord::to_bibtex).collect();
            writeln!(out, "{}", parts.join(" and "))?;
        }
    }
    Ok(())
}
