// src/bin/convert_numbers.rs
use std::path::Path;
use std::process;

use tally::cli::parse_args;
use tally::run_conversions;

fn main() {
    let args = parse_args();

    if let Err(error) = run_conversions(&args.input, Path::new(".")) {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}
