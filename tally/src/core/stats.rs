// src/core/stats.rs
use crate::models::StatisticsSummary;

/// Computes every descriptive statistic for a dataset in one pass.
///
/// # Arguments
///
/// * `data` - The numbers to summarize; must be non-empty (the reader
///   rejects empty inputs before computation starts)
///
/// # Returns
///
/// * `StatisticsSummary` - Mean, median, mode, population variance and
///   standard deviation
#[inline]
#[must_use]
pub fn summarize(data: &[f64]) -> StatisticsSummary {
    let mean_value = mean(data);
    let variance_value = variance(data, mean_value);

    StatisticsSummary {
        mean: mean_value,
        median: median(data),
        mode: mode(data),
        variance: variance_value,
        std_dev: standard_deviation(variance_value),
    }
}

/// Arithmetic average: sum divided by count.
#[inline]
#[must_use]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn mean(data: &[f64]) -> f64 {
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Middle element of the sorted data, or the average of the two middle
/// elements for an even count.
#[inline]
#[must_use]
pub fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Most frequent value(s), grouped by exact equality.
///
/// Returns every value tied for the maximum count, in the order the values
/// were first encountered.
#[inline]
#[must_use]
pub fn mode(data: &[f64]) -> Vec<f64> {
    let mut groups: Vec<(f64, usize)> = Vec::new();
    for &value in data {
        if let Some(group) = groups.iter_mut().find(|(seen, _)| *seen == value) {
            group.1 += 1;
        } else {
            groups.push((value, 1));
        }
    }

    let max_count = groups.iter().map(|&(_, count)| count).max().unwrap_or(0);
    groups
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(value, _)| value)
        .collect()
}

/// Population variance: mean of squared deviations, divisor = count.
#[inline]
#[must_use]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn variance(data: &[f64], mean_value: f64) -> f64 {
    let squared_deviations: f64 = data
        .iter()
        .map(|value| (value - mean_value).powi(2))
        .sum();
    squared_deviations / data.len() as f64
}

/// Square root of the variance.
#[inline]
#[must_use]
pub fn standard_deviation(variance_value: f64) -> f64 {
    variance_value.sqrt()
}
