//! Command-line running-order generator.
//!
//! Reads a performance table, builds the requested variations, and prints
//! each running order followed by a comparison table.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use running_order::config::{OutputFormat, RunConfig};
use running_order::scheduler::{generate_variations, Comparison};
use running_order::tabular::{
    parse_performances, render_comparison, render_variation, variation_rows, Table,
    DEFAULT_DELIMITER,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Performance table (delimited text, or JSON when the file ends in .json)
    input: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Longest allowed run for a performer
    #[arg(long)]
    max_in_row: Option<usize>,

    /// Number of variations to generate
    #[arg(short = 'n', long)]
    variations: Option<usize>,

    /// Seed of the first variation
    #[arg(long)]
    first_seed: Option<u64>,

    /// Column delimiter for text input
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// Emit JSON instead of text tables
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(&args.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&args)?;
    info!(
        event = "run_start",
        input = %args.input.display(),
        variations = config.variations,
        max_in_row = config.max_in_row,
    );

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let table = if args.input.extension().is_some_and(|e| e == "json") {
        Table::from_json(&text)?
    } else {
        Table::from_delimited(&text, args.delimiter)?
    };

    // Row issues are reported as warn! events by the parser.
    let parsed = parse_performances(&table)?;

    let variations = generate_variations(&parsed.performances, &parsed.performers, &config)
        .context("could not build a running order")?;
    let comparison = Comparison::of_all(&variations, &parsed.performers, config.max_in_row);

    match config.output {
        OutputFormat::Text => {
            for variation in &variations {
                println!("{}", render_variation(variation));
            }
            print!("{}", render_comparison(&comparison));
        }
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "variations": variations
                    .iter()
                    .map(|v| serde_json::json!({
                        "label": v.label,
                        "strategy": v.strategy,
                        "score": v.score,
                        "warning_count": v.warning_count(),
                        "rows": variation_rows(v),
                    }))
                    .collect::<Vec<_>>(),
                "comparison": comparison,
                "row_issues": parsed.issues,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}

/// File config (if any) with command-line overrides applied.
fn load_config(args: &Args) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RunConfig::default(),
    };
    if let Some(max_in_row) = args.max_in_row {
        config.max_in_row = max_in_row;
    }
    if let Some(variations) = args.variations {
        config.variations = variations;
    }
    if let Some(seed) = args.first_seed {
        config.first_seed = seed;
    }
    if args.json {
        config = config.with_output(OutputFormat::Json);
    }
    config.validate()?;
    Ok(config)
}
