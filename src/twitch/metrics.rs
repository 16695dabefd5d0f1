use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::{CENTIMILLISECONDS_PER_SECOND, TWITCH_WIDTH_PERCENTS};
use crate::error::Result;
use crate::extrema::ExtremaIndices;
use crate::signal::FilteredSignal;
use crate::twitch::auc::calculate_area_under_curve;
use crate::twitch::indexer::{TwitchIndices, find_twitch_indices};
use crate::twitch::stats::MetricStats;
use crate::twitch::widths::{TwitchWidths, calculate_twitch_widths};

/// All metric values for one twitch.
///
/// `interval_irregularity` is NaN for the first and last analyzable twitch,
/// which lack two neighboring intervals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitchMetrics {
    /// Time to the next peak, centimilliseconds.
    pub period: f64,
    /// Twitch frequency in Hz, never rounded.
    pub frequency: f64,
    /// Mean height of the peak above its two bounding valleys.
    pub amplitude: f64,
    /// Width measurements keyed by percentage threshold.
    pub widths: TwitchWidths,
    /// Area under the curve above the 90%-width chord.
    pub auc: f64,
    /// Magnitude of the slope between the 10% and 90% rising crossings.
    pub contraction_velocity: f64,
    /// Magnitude of the slope between the 10% and 90% falling crossings.
    pub relaxation_velocity: f64,
    /// Absolute difference between the neighboring twitch intervals.
    pub interval_irregularity: f64,
}

/// Summary statistics per metric across all analyzable twitches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateMetrics {
    pub period: MetricStats,
    pub frequency: MetricStats,
    pub amplitude: MetricStats,
    /// Width statistics keyed by percentage threshold.
    pub widths: BTreeMap<u32, MetricStats>,
    pub auc: MetricStats,
    pub contraction_velocity: MetricStats,
    pub relaxation_velocity: MetricStats,
    pub interval_irregularity: MetricStats,
}

/// Per-twitch metric bundles keyed by twitch peak timestamp, plus the
/// aggregate statistics.
pub type DataMetrics = (BTreeMap<i64, TwitchMetrics>, AggregateMetrics);

/// Find all data metrics for individual twitches and their aggregates.
///
/// Indexes the twitches (the sole validation boundary) and computes every
/// per-twitch metric and its summary statistics. `round_to_int` rounds
/// period, amplitude, width, and AUC values half-to-even; frequency,
/// velocities, and interval irregularity are always exact.
pub fn data_metrics(
    extrema: &ExtremaIndices,
    signal: &FilteredSignal<'_>,
    round_to_int: bool,
) -> Result<DataMetrics> {
    let twitches = find_twitch_indices(extrema)?;
    Ok(metrics_for_twitches(&twitches, extrema, signal, round_to_int))
}

/// Metric computation over already-validated twitch records.
///
/// An empty record set (possible under relaxed extremum-count floors) yields
/// an empty per-twitch map and all-absent aggregate statistics.
pub fn metrics_for_twitches(
    twitches: &TwitchIndices,
    extrema: &ExtremaIndices,
    signal: &FilteredSignal<'_>,
    round_to_int: bool,
) -> DataMetrics {
    let time = signal.time();

    let periods = calculate_twitch_period(twitches, &extrema.peaks, signal);
    let frequencies: Vec<f64> = periods
        .iter()
        .map(|&p| 1.0 / (p as f64 / CENTIMILLISECONDS_PER_SECOND))
        .collect();
    let amplitudes = calculate_amplitudes(twitches, signal, round_to_int);
    let widths = calculate_twitch_widths(twitches, signal, round_to_int);
    let auc = calculate_area_under_curve(twitches, signal, &widths, round_to_int);
    let contraction_velocities = calculate_twitch_velocity(&widths, true);
    let relaxation_velocities = calculate_twitch_velocity(&widths, false);
    let irregularities = calculate_interval_irregularity(twitches, time);

    let mut width_stats = BTreeMap::new();
    for percent in TWITCH_WIDTH_PERCENTS {
        let values: Vec<f64> = widths.iter().map(|w| w[&percent].duration).collect();
        width_stats.insert(percent, MetricStats::from_values(&values, round_to_int));
    }

    let aggregate = AggregateMetrics {
        period: MetricStats::from_values(
            &periods.iter().map(|&p| p as f64).collect::<Vec<_>>(),
            round_to_int,
        ),
        frequency: MetricStats::from_values(&frequencies, false),
        amplitude: MetricStats::from_values(&amplitudes, round_to_int),
        widths: width_stats,
        auc: MetricStats::from_values(&auc, round_to_int),
        contraction_velocity: MetricStats::from_values(&contraction_velocities, false),
        relaxation_velocity: MetricStats::from_values(&relaxation_velocities, false),
        interval_irregularity: MetricStats::from_sparse_values(&irregularities),
    };

    let mut per_twitch = BTreeMap::new();
    for (i, (&peak, _)) in twitches.iter().enumerate() {
        per_twitch.insert(
            time[peak],
            TwitchMetrics {
                period: periods[i] as f64,
                frequency: frequencies[i],
                amplitude: amplitudes[i],
                widths: widths[i].clone(),
                auc: auc[i],
                contraction_velocity: contraction_velocities[i],
                relaxation_velocity: relaxation_velocities[i],
                interval_irregularity: irregularities[i],
            },
        );
    }

    (per_twitch, aggregate)
}

/// Time between each twitch's peak and the next peak in the full peak list.
///
/// Referenced through the full list (not just analyzable twitches), anchored
/// at the first analyzable twitch's position within it.
fn calculate_twitch_period(
    twitches: &TwitchIndices,
    all_peaks: &[usize],
    signal: &FilteredSignal<'_>,
) -> Vec<i64> {
    let Some(&first_twitch_peak) = twitches.keys().next() else {
        return Vec::new();
    };
    let time = signal.time();
    let first_position = all_peaks
        .iter()
        .position(|&p| p == first_twitch_peak)
        .expect("twitch peak present in the full peak list");

    (0..twitches.len())
        .map(|i| {
            let here = all_peaks[first_position + i];
            let next = all_peaks[first_position + i + 1];
            time[next] - time[here]
        })
        .collect()
}

/// Mean height of each peak above its two bounding valleys, absolute.
fn calculate_amplitudes(
    twitches: &TwitchIndices,
    signal: &FilteredSignal<'_>,
    round_to_int: bool,
) -> Vec<f64> {
    let value = signal.value();
    twitches
        .iter()
        .map(|(&peak, record)| {
            let peak_value = value[peak];
            let prior = value[record.prior_valley];
            let subsequent = value[record.subsequent_valley];
            let amplitude = (((peak_value - prior) + (peak_value - subsequent)) / 2.0).abs();
            if round_to_int {
                amplitude.round_ties_even()
            } else {
                amplitude
            }
        })
        .collect()
}

/// Contraction (rising) or relaxation (falling) velocity of each twitch:
/// the magnitude of the slope between its 10% and 90% width crossings.
fn calculate_twitch_velocity(per_twitch_widths: &[TwitchWidths], is_contraction: bool) -> Vec<f64> {
    let top_percent = TWITCH_WIDTH_PERCENTS[0];
    let base_percent = TWITCH_WIDTH_PERCENTS[TWITCH_WIDTH_PERCENTS.len() - 1];

    per_twitch_widths
        .iter()
        .map(|widths| {
            let (top, base) = if is_contraction {
                (widths[&top_percent].rising, widths[&base_percent].rising)
            } else {
                (widths[&top_percent].falling, widths[&base_percent].falling)
            };
            ((top.value - base.value) / (top.time - base.time)).abs()
        })
        .collect()
}

/// Absolute difference between the intervals on either side of each twitch.
///
/// Intervals are between consecutive analyzable twitch peaks; the first and
/// last twitch have no defined value.
fn calculate_interval_irregularity(twitches: &TwitchIndices, time: &[i64]) -> Vec<f64> {
    let peak_times: Vec<i64> = twitches.keys().map(|&p| time[p]).collect();
    let n = peak_times.len();

    (0..n)
        .map(|i| {
            if i == 0 || i + 1 == n {
                f64::NAN
            } else {
                let before = peak_times[i] - peak_times[i - 1];
                let after = peak_times[i + 1] - peak_times[i];
                (after - before).abs() as f64
            }
        })
        .collect()
}
