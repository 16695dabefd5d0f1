use serde::Serialize;
use statrs::statistics::Statistics;

/// Summary statistics for one metric across all analyzable twitches.
///
/// `n` is always reported; the remaining fields are absent when fewer than
/// two defined samples were available (interval irregularity near the
/// sequence boundaries is NaN and does not contribute).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricStats {
    pub n: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl MetricStats {
    /// Aggregate fully-defined per-twitch values.
    ///
    /// Standard deviation is the population standard deviation. With
    /// `round_to_int` the four statistics are rounded half-to-even.
    pub fn from_values(values: &[f64], round_to_int: bool) -> Self {
        if values.is_empty() {
            return Self::empty(0);
        }

        let round = |x: f64| if round_to_int { x.round_ties_even() } else { x };
        Self {
            n: values.len(),
            mean: Some(round(values.mean())),
            std_dev: Some(round(values.population_std_dev())),
            min: Some(round(Statistics::min(values))),
            max: Some(round(Statistics::max(values))),
        }
    }

    /// Aggregate values that may contain NaN placeholders.
    ///
    /// `n` counts every sample, defined or not; the statistics cover only
    /// the defined ones and are absent when fewer than two exist.
    pub fn from_sparse_values(values: &[f64]) -> Self {
        let defined: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if defined.len() < 2 {
            return Self::empty(values.len());
        }

        Self {
            n: values.len(),
            ..Self::from_values(&defined, false)
        }
    }

    fn empty(n: usize) -> Self {
        Self {
            n,
            mean: None,
            std_dev: None,
            min: None,
            max: None,
        }
    }
}
