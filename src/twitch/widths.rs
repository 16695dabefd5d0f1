use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::TWITCH_WIDTH_PERCENTS;
use crate::signal::FilteredSignal;
use crate::twitch::indexer::TwitchIndices;
use crate::twitch::interpolate::interpolate_x_for_y;

/// Interpolated crossing point of a repolarization threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WidthCoord {
    /// Fractional timestamp in centimilliseconds.
    pub time: f64,
    /// Signal value at the crossing (the exact threshold).
    pub value: f64,
}

/// Twitch width at one percentage threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WidthMeasurement {
    /// Duration between the falling and rising crossings, centimilliseconds.
    pub duration: f64,
    /// Crossing on the contraction (rising) side of the peak.
    pub rising: WidthCoord,
    /// Crossing on the relaxation (falling) side of the peak.
    pub falling: WidthCoord,
}

/// Width measurements keyed by percentage threshold (10..=90 step 5).
pub type TwitchWidths = BTreeMap<u32, WidthMeasurement>;

/// Determine the width of each twitch 10-90% of the way down to its
/// bounding valleys.
///
/// For each threshold, walk outward from the peak one sample at a time until
/// the signal crosses the threshold, measuring crossing as distance from the
/// valley value so concave and convex shapes behave alike, then linearly
/// interpolate the exact crossing time between the straddling samples. The
/// walk indices persist across the ascending thresholds since each threshold
/// lies further from the peak than the last.
///
/// Returned in twitch order (ascending peak index), one entry per twitch.
pub fn calculate_twitch_widths(
    twitches: &TwitchIndices,
    signal: &FilteredSignal<'_>,
    round_to_int: bool,
) -> Vec<TwitchWidths> {
    let time = signal.time();
    let value = signal.value();

    let mut widths = Vec::with_capacity(twitches.len());
    for (&peak, record) in twitches {
        let peak_value = value[peak];
        let prior_valley_value = value[record.prior_valley];
        let subsequent_valley_value = value[record.subsequent_valley];

        let rising_amplitude = peak_value - prior_valley_value;
        let falling_amplitude = peak_value - subsequent_valley_value;

        let mut rising_idx = peak - 1;
        let mut falling_idx = peak + 1;

        let mut per_twitch = TwitchWidths::new();
        for percent in TWITCH_WIDTH_PERCENTS {
            let rising_threshold = peak_value - percent as f64 / 100.0 * rising_amplitude;
            let falling_threshold = peak_value - percent as f64 / 100.0 * falling_amplitude;

            while (value[rising_idx] - prior_valley_value).abs()
                > (rising_threshold - prior_valley_value).abs()
            {
                rising_idx -= 1;
            }
            while (value[falling_idx] - subsequent_valley_value).abs()
                > (falling_threshold - subsequent_valley_value).abs()
            {
                falling_idx += 1;
            }

            let rising_time = interpolate_x_for_y(
                rising_threshold,
                time[rising_idx] as f64,
                value[rising_idx],
                time[rising_idx + 1] as f64,
                value[rising_idx + 1],
            );
            let falling_time = interpolate_x_for_y(
                falling_threshold,
                time[falling_idx] as f64,
                value[falling_idx],
                time[falling_idx - 1] as f64,
                value[falling_idx - 1],
            );

            let measurement = WidthMeasurement {
                duration: maybe_round(falling_time - rising_time, round_to_int),
                rising: WidthCoord {
                    time: maybe_round(rising_time, round_to_int),
                    value: maybe_round(rising_threshold, round_to_int),
                },
                falling: WidthCoord {
                    time: maybe_round(falling_time, round_to_int),
                    value: maybe_round(falling_threshold, round_to_int),
                },
            };
            per_twitch.insert(percent, measurement);
        }
        widths.push(per_twitch);
    }
    widths
}

fn maybe_round(x: f64, round_to_int: bool) -> f64 {
    if round_to_int { x.round_ties_even() } else { x }
}
