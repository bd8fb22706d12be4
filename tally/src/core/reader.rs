// src/core/reader.rs
use anyhow::{Result, anyhow};
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::core::words::tokenize;

/// Reads a file of floating-point numbers, one per line.
///
/// Lines that do not parse are discarded with a warning on stderr.
///
/// # Arguments
///
/// * `path` - The input file to read
///
/// # Returns
///
/// * `Ok(Vec<f64>)` - The parsed numbers in file order
///
/// # Errors
///
/// This function may return an error if:
/// * The input file does not exist or cannot be read
/// * No line parses as a valid number
#[inline]
pub fn read_numbers(path: &Path) -> Result<Vec<f64>> {
    let numbers = read_parsed_lines::<f64>(path)?;
    if numbers.is_empty() {
        return Err(anyhow!("No se encontraron números válidos en el archivo."));
    }
    Ok(numbers)
}

/// Reads a file of integers, one per line.
///
/// Same policy as [`read_numbers`], with integer parsing: fractional values
/// count as malformed lines.
///
/// # Errors
///
/// This function may return an error if:
/// * The input file does not exist or cannot be read
/// * No line parses as a valid integer
#[inline]
pub fn read_integers(path: &Path) -> Result<Vec<i64>> {
    let numbers = read_parsed_lines::<i64>(path)?;
    if numbers.is_empty() {
        return Err(anyhow!("No se encontraron números válidos en el archivo."));
    }
    Ok(numbers)
}

/// Reads a text file and tokenizes it into lowercase words.
///
/// # Errors
///
/// This function may return an error if:
/// * The input file does not exist or cannot be read
/// * The text contains no tokens after normalization
#[inline]
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let content = read_input(path)?;
    let words = tokenize(&content);
    if words.is_empty() {
        return Err(anyhow!("No se encontraron palabras válidas en el archivo."));
    }
    Ok(words)
}

fn read_parsed_lines<T: FromStr>(path: &Path) -> Result<Vec<T>> {
    let content = read_input(path)?;

    let mut values = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if let Ok(value) = trimmed.parse::<T>() {
            values.push(value);
        } else {
            eprintln!("Advertencia: \"{trimmed}\" no es un número válido y será ignorado.");
        }
    }
    Ok(values)
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            anyhow!("El archivo \"{}\" no fue encontrado.", path.display())
        } else {
            anyhow::Error::new(error)
                .context(format!("No se pudo leer el archivo \"{}\".", path.display()))
        }
    })
}
