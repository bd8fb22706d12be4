// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use crate::core::convert::convert_all;
use crate::core::reader::{read_integers, read_numbers, read_words};
use crate::core::report::{
    CONVERSIONS_FILE, STATISTICS_FILE, WORD_COUNT_FILE, publish, render_conversions,
    render_statistics, render_word_counts,
};
use crate::core::stats::summarize;
use crate::models::FrequencyTable;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input file to process (one record per line for the numeric tools)
    pub input: PathBuf,
}

/// Parses the command line, exiting the process on failure.
///
/// Usage errors exit with status 1; `--help` and `--version` exit with
/// status 0.
#[inline]
#[must_use]
pub fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|error| {
        let _ = error.print();
        if error.use_stderr() {
            process::exit(1);
        }
        process::exit(0);
    })
}

/// Runs the statistics pipeline: read numbers, summarize, report.
///
/// The report is printed to stdout and written to `StatisticsResults.txt`
/// inside `output_dir`.
///
/// # Errors
///
/// This function may return an error if:
/// * The input file does not exist or cannot be read
/// * No line parses as a valid number
/// * The output file cannot be written
#[inline]
pub fn run_statistics(input: &Path, output_dir: &Path) -> Result<()> {
    let started = Instant::now();
    let numbers = read_numbers(input)?;
    let summary = summarize(&numbers);
    let elapsed_seconds = started.elapsed().as_secs_f64();

    let report = render_statistics(&summary, elapsed_seconds);
    publish(&report, output_dir, STATISTICS_FILE)
}

/// Runs the conversion pipeline: read integers, convert each to binary and
/// hexadecimal, report.
///
/// The report is printed to stdout and written to `ConvertionResults.txt`
/// inside `output_dir`.
///
/// # Errors
///
/// This function may return an error if:
/// * The input file does not exist or cannot be read
/// * No line parses as a valid integer
/// * The output file cannot be written
#[inline]
pub fn run_conversions(input: &Path, output_dir: &Path) -> Result<()> {
    let started = Instant::now();
    let integers = read_integers(input)?;
    let conversions = convert_all(&integers);
    let elapsed_seconds = started.elapsed().as_secs_f64();

    let report = render_conversions(&conversions, elapsed_seconds);
    publish(&report, output_dir, CONVERSIONS_FILE)
}

/// Runs the word count pipeline: read and tokenize the text, build the
/// frequency table, report.
///
/// The report is printed to stdout and written to `WordCountResults.txt`
/// inside `output_dir`.
///
/// # Errors
///
/// This function may return an error if:
/// * The input file does not exist or cannot be read
/// * The text contains no tokens after normalization
/// * The output file cannot be written
#[inline]
pub fn run_word_count(input: &Path, output_dir: &Path) -> Result<()> {
    let started = Instant::now();
    let words = read_words(input)?;
    let table = FrequencyTable::from_words(&words);
    let elapsed_seconds = started.elapsed().as_secs_f64();

    let report = render_word_counts(&table, elapsed_seconds);
    publish(&report, output_dir, WORD_COUNT_FILE)
}
