// src/core/report.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::models::{Conversion, FrequencyTable, StatisticsSummary};

pub const STATISTICS_FILE: &str = "StatisticsResults.txt";
pub const CONVERSIONS_FILE: &str = "ConvertionResults.txt";
pub const WORD_COUNT_FILE: &str = "WordCountResults.txt";

/// Report text for the statistics pipeline.
#[inline]
#[must_use]
pub fn render_statistics(summary: &StatisticsSummary, elapsed_seconds: f64) -> String {
    format!(
        "Resultados de Estadísticas Descriptivas:\n\
         Media: {}\n\
         Mediana: {}\n\
         Moda: {}\n\
         Varianza: {}\n\
         Desviación Estándar: {}\n\
         Tiempo de ejecución: {elapsed_seconds:.4} segundos\n",
        summary.mean,
        summary.median,
        summary.mode_display(),
        summary.variance,
        summary.std_dev,
    )
}

/// Report text for the conversion pipeline, one line per input integer.
#[inline]
#[must_use]
pub fn render_conversions(conversions: &[Conversion], elapsed_seconds: f64) -> String {
    let lines: Vec<String> = conversions
        .iter()
        .map(|conversion| {
            format!(
                "Número: {}, Binario: {}, Hexadecimal: {}",
                conversion.number, conversion.binary, conversion.hexadecimal
            )
        })
        .collect();

    format!(
        "{}\nTiempo de ejecución: {elapsed_seconds:.4} segundos\n",
        lines.join("\n")
    )
}

/// Report text for the word count pipeline, entries sorted by word.
#[inline]
#[must_use]
pub fn render_word_counts(table: &FrequencyTable, elapsed_seconds: f64) -> String {
    let mut lines = vec![String::from("Resultados de Conteo de Palabras:\n")];
    for (word, count) in table.sorted_entries() {
        lines.push(format!("Palabra: \"{word}\" - Frecuencia: {count}"));
    }
    lines.push(format!(
        "\nTiempo de ejecución: {elapsed_seconds:.4} segundos\n"
    ));

    lines.join("\n")
}

/// Prints a report to stdout and writes the identical text to
/// `output_dir/file_name`, overwriting any previous run.
///
/// # Errors
///
/// This function may return an error if the output file cannot be written.
#[inline]
pub fn publish(report: &str, output_dir: &Path, file_name: &str) -> Result<()> {
    println!("{report}");

    let output_path = output_dir.join(file_name);
    fs::write(&output_path, report).with_context(|| {
        format!(
            "No se pudo escribir el archivo \"{}\".",
            output_path.display()
        )
    })?;

    println!("Los resultados han sido guardados en \"{file_name}\".");
    Ok(())
}
