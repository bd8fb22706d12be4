// src/bin/compute_statistics.rs
use std::path::Path;
use std::process;

use tally::cli::parse_args;
use tally::run_statistics;

fn main() {
    let args = parse_args();

    if let Err(error) = run_statistics(&args.input, Path::new(".")) {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}
