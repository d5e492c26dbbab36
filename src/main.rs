use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncRead, BufReader};
use tracing::info;

use unitok::pipeline::{self, PipelineConfig, ProcessingMode};
use unitok::segmenter::{Segmenter, SegmenterConfig};

#[derive(Parser, Debug)]
#[command(name = "unitok")]
#[command(about = "Unicode text normalizer and word segmenter for line-oriented streams")]
#[command(version)]
struct Args {
    /// Input file, or '-' for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Annotate dashes with reversible '@' markers
    #[arg(short, long)]
    protected_dash_split: bool,

    /// Only normalize, do not segment
    #[arg(short = 'n', long)]
    norm_only: bool,

    /// Only segment, do not normalize
    #[arg(short = 's', long)]
    segm_only: bool,

    /// Reconstruct text from segmented input
    #[arg(short, long)]
    desegment: bool,

    /// Number of worker threads (defaults to logical CPU count)
    #[arg(short = 'j', long)]
    num_threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,

    /// Write a JSON run summary to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured logs go to stderr so stdout stays a clean data channel
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    if args.norm_only && args.segm_only {
        anyhow::bail!("Cannot combine --norm-only and --segm-only");
    }

    let num_threads = args.num_threads.unwrap_or_else(num_cpus::get);
    if num_threads == 0 {
        anyhow::bail!("--num-threads must be a positive value");
    }

    let mode = if args.norm_only {
        ProcessingMode::NormalizeOnly
    } else if args.segm_only {
        ProcessingMode::SegmentOnly
    } else if args.desegment {
        ProcessingMode::Desegment
    } else {
        ProcessingMode::NormalizeAndSegment
    };

    let segmenter = Arc::new(Segmenter::new(SegmenterConfig {
        protected_dash_split: args.protected_dash_split,
    })?);

    let config = PipelineConfig {
        mode,
        num_threads,
        ..Default::default()
    };

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::with_template("{spinner} {pos} lines ({per_sec})")?);
        bar
    };

    let reader = BufReader::new(open_input(&args.input).await?);
    let stdout = tokio::io::stdout();

    info!(input = %args.input, ?mode, num_threads, "Starting stream processing");
    let stats = pipeline::process_stream(reader, stdout, segmenter, &config, &progress).await?;
    progress.finish_and_clear();

    info!(
        lines = stats.lines_processed,
        duration_ms = stats.duration_ms,
        lines_per_sec = stats.lines_per_sec,
        "Done"
    );

    if let Some(path) = &args.stats_out {
        let json = serde_json::to_string_pretty(&stats)?;
        tokio::fs::write(path, json).await?;
        info!("Wrote run stats to {}", path.display());
    }

    Ok(())
}

async fn open_input(input: &str) -> Result<Box<dyn AsyncRead + Send + Unpin>> {
    if input == "-" {
        return Ok(Box::new(tokio::io::stdin()));
    }
    // WHY: validate the input file early to fail fast with clear error context
    let file = tokio::fs::File::open(input)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot open input file {input}: {e}"))?;
    Ok(Box::new(file))
}
