use log::debug;

use crate::constants::{
    CENTIMILLISECONDS_PER_SECOND, MAX_TWITCH_FREQUENCY_HZ, PROMINENCE_RANGE_DIVISOR,
};
use crate::extrema::peak_finder::{DetectedPeaks, PeakSearchParams, find_peaks};
use crate::signal::FilteredSignal;

/// Ordered index lists of the detected peaks and valleys.
///
/// Both lists are strictly increasing indices into the filtered signal and
/// stay independent until joined by the twitch indexer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ExtremaIndices {
    pub peaks: Vec<usize>,
    pub valleys: Vec<usize>,
}

/// Locate twitch peaks and valleys in a filtered signal.
///
/// `twitches_point_up` states whether biological twitches point in the
/// positive direction; when false, the roles of the maxima and minima
/// searches are swapped.
pub fn detect_extrema(signal: &FilteredSignal<'_>, twitches_point_up: bool) -> ExtremaIndices {
    detect_extrema_with_max_frequency(signal, twitches_point_up, MAX_TWITCH_FREQUENCY_HZ)
}

/// [`detect_extrema`] with an explicit maximum plausible twitch frequency.
pub fn detect_extrema_with_max_frequency(
    signal: &FilteredSignal<'_>,
    twitches_point_up: bool,
    max_twitch_frequency_hz: f64,
) -> ExtremaIndices {
    // A sampling period needs two timestamps; shorter signals cannot
    // contain an interior extremum anyway.
    if signal.len() < 2 {
        debug!("signal too short for extremum search: {} samples", signal.len());
        return ExtremaIndices {
            peaks: Vec::new(),
            valleys: Vec::new(),
        };
    }

    let values = signal.value();
    let sampling_period_cms = signal.sampling_period_cms() as f64;

    // Twitches cannot occur closer together than one period of the maximum
    // plausible twitch frequency.
    let min_samples_between_twitches = ((1.0 / max_twitch_frequency_hz)
        * CENTIMILLISECONDS_PER_SECOND
        / sampling_period_cms)
        .round_ties_even() as usize;

    let max_height = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_height = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_prominence = (max_height - min_height).abs();

    let params = PeakSearchParams {
        distance: min_samples_between_twitches.max(1),
        min_prominence: max_prominence / PROMINENCE_RANGE_DIVISOR,
        min_width: min_samples_between_twitches as f64 / 2.0,
    };
    debug!(
        "extremum search: distance={} min_width={:.1} min_prominence={:.1}",
        params.distance, params.min_width, params.min_prominence
    );

    let peak_factor = if twitches_point_up { 1.0 } else { -1.0 };
    let peak_signal: Vec<f64> = values.iter().map(|&v| v * peak_factor).collect();
    let valley_signal: Vec<f64> = values.iter().map(|&v| v * -peak_factor).collect();

    let peaks = find_peaks(&peak_signal, &params);
    let valleys = find_peaks(&valley_signal, &params);

    let valley_indices = prune_duplicate_valleys(&valleys);
    debug!(
        "detected {} peaks and {} valleys ({} duplicate valleys pruned)",
        peaks.len(),
        valley_indices.len(),
        valleys.len() - valley_indices.len()
    );

    ExtremaIndices {
        peaks: peaks.indices,
        valleys: valley_indices,
    }
}

/// Drop spurious adjacent valley detections that share identical left and
/// right support bases, an artifact of the extremum search near flat
/// regions. The earlier detection is retained.
fn prune_duplicate_valleys(valleys: &DetectedPeaks) -> Vec<usize> {
    let mut kept = Vec::with_capacity(valleys.len());
    let mut kept_bases: Option<(usize, usize)> = None;

    for i in 0..valleys.len() {
        let bases = (valleys.left_bases[i], valleys.right_bases[i]);
        if kept_bases == Some(bases) {
            continue;
        }
        kept.push(valleys.indices[i]);
        kept_bases = Some(bases);
    }
    kept
}
