// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;

pub use crate::cli::{Args, parse_args, run_conversions, run_statistics, run_word_count};
pub use crate::core::convert::{convert_all, to_binary, to_hexadecimal};
pub use crate::core::reader::{read_integers, read_numbers, read_words};
pub use crate::core::report::{
    CONVERSIONS_FILE, STATISTICS_FILE, WORD_COUNT_FILE, publish, render_conversions,
    render_statistics, render_word_counts,
};
pub use crate::core::stats::{mean, median, mode, standard_deviation, summarize, variance};
pub use crate::core::words::tokenize;
pub use crate::models::{Conversion, FrequencyTable, StatisticsSummary};
