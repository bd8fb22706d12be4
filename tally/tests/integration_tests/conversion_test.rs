// tests/integration_tests/conversion_test.rs
use super::common::{create_input_file, read_output, strip_elapsed_line};
use anyhow::Result;
use tally::{CONVERSIONS_FILE, run_conversions};
use tempfile::TempDir;

#[test]
fn test_conversion_report_contents() -> Result<()> {
    let dir = TempDir::new()?;
    let input = create_input_file(dir.path(), "numbers.txt", "0\n10\n255\n")?;

    run_conversions(&input, dir.path())?;

    let report = read_output(dir.path(), CONVERSIONS_FILE)?;
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "Número: 0, Binario: 0, Hexadecimal: 0");
    assert_eq!(lines[1], "Número: 10, Binario: 1010, Hexadecimal: A");
    assert_eq!(lines[2], "Número: 255, Binario: 11111111, Hexadecimal: FF");
    assert!(lines[3].starts_with("Tiempo de ejecución: "));
    Ok(())
}

#[test]
fn test_conversion_preserves_input_order() -> Result<()> {
    let dir = TempDir::new()?;
    let input = create_input_file(dir.path(), "numbers.txt", "255\n0\n10\n")?;

    run_conversions(&input, dir.path())?;

    let report = read_output(dir.path(), CONVERSIONS_FILE)?;
    let first = report.find("Número: 255").expect("255 should be reported");
    let second = report.find("Número: 0").expect("0 should be reported");
    let third = report.find("Número: 10,").expect("10 should be reported");
    assert!(first < second && second < third, "Order must match the input");
    Ok(())
}

#[test]
fn test_conversion_skips_non_integer_lines() -> Result<()> {
    let dir = TempDir::new()?;
    let input = create_input_file(dir.path(), "numbers.txt", "10\n2.5\nquince\n255\n")?;

    run_conversions(&input, dir.path())?;

    let report = read_output(dir.path(), CONVERSIONS_FILE)?;
    assert!(report.contains("Número: 10,"));
    assert!(report.contains("Número: 255,"));
    assert!(
        !report.contains("2.5"),
        "Fractional lines are malformed for the converter: {report}"
    );
    Ok(())
}

#[test]
fn test_conversion_negative_numbers_are_sign_prefixed() -> Result<()> {
    let dir = TempDir::new()?;
    let input = create_input_file(dir.path(), "numbers.txt", "-5\n")?;

    run_conversions(&input, dir.path())?;

    let report = read_output(dir.path(), CONVERSIONS_FILE)?;
    assert!(report.contains("Número: -5, Binario: -101, Hexadecimal: -5"));
    Ok(())
}

#[test]
fn test_conversion_only_invalid_lines_is_fatal() -> Result<()> {
    let dir = TempDir::new()?;
    let input = create_input_file(dir.path(), "numbers.txt", "uno\ndos\n")?;

    let error = run_conversions(&input, dir.path()).expect_err("no usable integers");
    assert!(
        error.to_string().contains("No se encontraron números válidos"),
        "Unexpected error: {error}"
    );
    assert!(!dir.path().join(CONVERSIONS_FILE).exists());
    Ok(())
}

#[test]
fn test_conversion_rerun_is_idempotent() -> Result<()> {
    let dir = TempDir::new()?;
    let input = create_input_file(dir.path(), "numbers.txt", "7\n77\n777\n")?;

    run_conversions(&input, dir.path())?;
    let first = read_output(dir.path(), CONVERSIONS_FILE)?;

    run_conversions(&input, dir.path())?;
    let second = read_output(dir.path(), CONVERSIONS_FILE)?;

    assert_eq!(strip_elapsed_line(&first), strip_elapsed_line(&second));
    Ok(())
}
