//! Path-token converter
//!
//! Single pass over the input: tokenize each line on whitespace, keep the
//! tokens that look like header-file references, rewrite their separators,
//! and append each rewritten token as its own output line. Order follows
//! discovery order, top-to-bottom, left-to-right.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

pub mod separators;

pub use separators::{convert_separators, is_header_token, Convention};

/// Fixed input file name, one or more whitespace-separated tokens per line.
pub const INPUT_FILE: &str = "headers-windows.txt";
/// Fixed output file name, created or truncated at the start of each run.
pub const OUTPUT_FILE: &str = "headers-posix.txt";

/// Counters for the run summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    pub lines_read: usize,
    pub tokens_scanned: usize,
    pub tokens_written: usize,
}

/// Run the converter over a line source and a line sink.
///
/// Consumes the reader once, in order. Empty lines and tokens without the
/// header marker are skipped, never rejected; the only failure mode is I/O.
pub fn convert_stream<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    from: Convention,
    to: Convention,
) -> Result<ConvertStats> {
    let mut stats = ConvertStats::default();

    for line in reader.lines() {
        let line = line.context("Failed reading input line")?;
        stats.lines_read += 1;

        for token in line.split_whitespace() {
            stats.tokens_scanned += 1;
            if !is_header_token(token) {
                continue;
            }
            let converted = convert_separators(token, from, to);
            tracing::debug!(token, converted = %converted, "converted header token");
            writeln!(writer, "{}", converted).context("Failed writing output line")?;
            stats.tokens_written += 1;
        }
    }

    Ok(stats)
}

/// One-shot run over the fixed file names, Windows to POSIX.
pub fn run_default() -> Result<()> {
    run(INPUT_FILE, OUTPUT_FILE, Convention::Windows, Convention::Posix)
}

fn run(input: &str, output: &str, from: Convention, to: Convention) -> Result<()> {
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("Failed to open input file: {}", input))?,
    );
    let mut writer = BufWriter::new(
        File::create(output).with_context(|| format!("Failed to create output file: {}", output))?,
    );

    let stats = convert_stream(reader, &mut writer, from, to)?;

    // Both handles close on drop; flush first so late write errors surface here.
    writer.flush().with_context(|| format!("Failed writing output file: {}", output))?;

    tracing::info!(
        lines_read = stats.lines_read,
        tokens_scanned = stats.tokens_scanned,
        tokens_written = stats.tokens_written,
        "conversion complete"
    );

    Ok(())
}
