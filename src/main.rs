use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use readability_score::{analyze_bytes, AnalysisResult, Error};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "readability-score",
    about = "Score the readability of English prose",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Print a short text report instead of JSON
    #[arg(long, conflicts_with = "compact")]
    summary: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "readability_score=debug"
    } else {
        "readability_score=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn render(cli: &Cli, result: &AnalysisResult) -> Result<String> {
    if cli.summary {
        return Ok(result.summary());
    }
    let json = if cli.compact {
        serde_json::to_string(result)?
    } else {
        serde_json::to_string_pretty(result)?
    };
    Ok(json)
}

fn report(source: &str, result: &AnalysisResult) {
    debug!(
        source,
        words = result.word_count,
        sentences = result.sentence_count,
        grade = result.grade,
        level = %result.level,
        "analysis complete"
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.files.is_empty() {
        info!("reading stdin");
        let mut input = Vec::new();
        std::io::stdin()
            .read_to_end(&mut input)
            .context("Failed to read stdin")?;
        let result = analyze_bytes(&input).context("stdin")?;
        report("stdin", &result);
        println!("{}", render(&cli, &result)?);
    } else {
        for path in &cli.files {
            info!(path = %path.display(), "reading file");
            let bytes = std::fs::read(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            let result = analyze_bytes(&bytes).with_context(|| path.display().to_string())?;
            report(&path.display().to_string(), &result);
            println!("{}", render(&cli, &result)?);
        }
    }
    Ok(())
}
