// src/bin/word_count.rs
use std::path::Path;
use std::process;

use tally::cli::parse_args;
use tally::run_word_count;

fn main() {
    let args = parse_args();

    if let Err(error) = run_word_count(&args.input, Path::new(".")) {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}
