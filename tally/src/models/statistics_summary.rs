// src/models/statistics_summary.rs

/// Descriptive statistics for one numeric dataset.
///
/// `mode` holds every value tied for the highest occurrence count, in the
/// order the values were first encountered.
#[derive(Debug)]
pub struct StatisticsSummary {
    pub mean: f64,
    pub median: f64,
    pub mode: Vec<f64>,
    pub variance: f64,
    pub std_dev: f64,
}

impl StatisticsSummary {
    /// Renders the mode for display: a bare value when unique, a bracketed
    /// list when several values tie.
    #[inline]
    #[must_use]
    pub fn mode_display(&self) -> String {
        match self.mode.as_slice() {
            [single] => single.to_string(),
            values => {
                let joined = values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{joined}]")
            }
        }
    }
}
