// WHY: chunked ordered parallelism keeps output line order identical to input
// while per-line work runs on blocking worker threads off the async I/O path

use anyhow::{Context, Result};
use futures::stream::{FuturesOrdered, StreamExt};
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufWriter};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::segmenter::Segmenter;

/// Which operation the pipeline applies to every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingMode {
    NormalizeAndSegment,
    NormalizeOnly,
    SegmentOnly,
    Desegment,
}

/// Configuration for line-stream processing.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub mode: ProcessingMode,
    /// Worker threads for per-line processing
    pub num_threads: usize,
    /// Lines per work unit dispatched to a worker
    pub chunk_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: ProcessingMode::NormalizeAndSegment,
            num_threads: num_cpus::get(),
            // WHY: large enough to amortize task dispatch, small enough that
            // bounded in-flight chunks keep memory flat on huge streams
            chunk_size: 10_000,
        }
    }
}

/// Summary of one pipeline run.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProcessingStats {
    pub lines_processed: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub duration_ms: u64,
    pub lines_per_sec: f64,
}

/// Apply one processing mode to a single line, writing into `buffer`.
pub fn apply_mode(segmenter: &Segmenter, mode: ProcessingMode, line: &str, buffer: &mut String) {
    match mode {
        ProcessingMode::NormalizeAndSegment => segmenter.normalize_and_segment_into(line, buffer),
        ProcessingMode::NormalizeOnly => segmenter.normalize_into(line, buffer),
        ProcessingMode::SegmentOnly => segmenter.segment_into(line, buffer),
        ProcessingMode::Desegment => segmenter.desegment_into(line, buffer),
    }
}

/// Process a line stream: read, dispatch chunks to worker threads, write results
/// in input order, and return run statistics. Output lines are newline-terminated.
pub async fn process_stream<R, W>(
    reader: R,
    writer: W,
    segmenter: Arc<Segmenter>,
    config: &PipelineConfig,
    progress: &ProgressBar,
) -> Result<ProcessingStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let start = Instant::now();
    let mut lines = reader.lines();
    let mut writer = BufWriter::new(writer);

    // WHY: bounded in-flight queue gives back-pressure against a fast reader,
    // mirroring the original chunked worker loop
    let max_in_flight = config.num_threads.max(1) * 2;
    let mut in_flight: FuturesOrdered<JoinHandle<Vec<String>>> = FuturesOrdered::new();

    let mut chunk: Vec<String> = Vec::with_capacity(config.chunk_size);
    let mut lines_processed = 0u64;
    let mut bytes_in = 0u64;
    let mut bytes_out = 0u64;

    while let Some(line) = lines.next_line().await.context("reading input line")? {
        bytes_in += line.len() as u64 + 1;
        chunk.push(line);

        if chunk.len() >= config.chunk_size {
            let batch = std::mem::replace(&mut chunk, Vec::with_capacity(config.chunk_size));
            in_flight.push_back(spawn_chunk(Arc::clone(&segmenter), config.mode, batch));

            if in_flight.len() >= max_in_flight {
                if let Some(done) = in_flight.next().await {
                    let processed = done.context("worker thread failed")?;
                    write_chunk(
                        &mut writer,
                        processed,
                        &mut lines_processed,
                        &mut bytes_out,
                        progress,
                    )
                    .await?;
                }
            }
        }
    }

    if !chunk.is_empty() {
        in_flight.push_back(spawn_chunk(Arc::clone(&segmenter), config.mode, chunk));
    }

    while let Some(done) = in_flight.next().await {
        let processed = done.context("worker thread failed")?;
        write_chunk(
            &mut writer,
            processed,
            &mut lines_processed,
            &mut bytes_out,
            progress,
        )
        .await?;
    }

    writer.flush().await.context("flushing output")?;

    let duration = start.elapsed();
    let duration_ms = duration.as_millis() as u64;
    let lines_per_sec = if duration.as_secs_f64() > 0.0 {
        lines_processed as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    let stats = ProcessingStats {
        lines_processed,
        bytes_in,
        bytes_out,
        duration_ms,
        lines_per_sec,
    };

    info!(
        lines = stats.lines_processed,
        bytes_in = stats.bytes_in,
        bytes_out = stats.bytes_out,
        duration_ms = stats.duration_ms,
        "Stream processing complete"
    );

    Ok(stats)
}

fn spawn_chunk(
    segmenter: Arc<Segmenter>,
    mode: ProcessingMode,
    lines: Vec<String>,
) -> JoinHandle<Vec<String>> {
    tokio::task::spawn_blocking(move || {
        debug!(lines = lines.len(), "processing chunk");
        let mut buffer = String::new();
        lines
            .into_iter()
            .map(|line| {
                apply_mode(&segmenter, mode, &line, &mut buffer);
                buffer.clone()
            })
            .collect()
    })
}

async fn write_chunk<W>(
    writer: &mut BufWriter<W>,
    lines: Vec<String>,
    lines_processed: &mut u64,
    bytes_out: &mut u64,
    progress: &ProgressBar,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let count = lines.len() as u64;
    for line in lines {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        *bytes_out += line.len() as u64 + 1;
    }
    *lines_processed += count;
    progress.inc(count);
    Ok(())
}
