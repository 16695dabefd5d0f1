use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::constants::{MIN_NUMBER_PEAKS, MIN_NUMBER_VALLEYS};
use crate::error::{ExtremumKind, Result, TwitchError};
use crate::extrema::ExtremaIndices;

/// Cross-references from a twitch's defining peak to its bounding extrema.
///
/// `prior_peak` is absent only for the first analyzable twitch when the
/// recording starts with a peak. Invariant:
/// `prior_valley < peak < subsequent_valley`, and when present,
/// `prior_peak < prior_valley`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TwitchRecord {
    pub prior_peak: Option<usize>,
    pub prior_valley: usize,
    pub subsequent_peak: usize,
    pub subsequent_valley: usize,
}

/// Ordered mapping from twitch peak index to its record.
pub type TwitchIndices = BTreeMap<usize, TwitchRecord>;

/// Find the twitches that can be analyzed.
///
/// The first and last peaks of a recording cannot be analyzed as full
/// twitches: an analyzable twitch needs a valley before it and another peak
/// after it. Fails when too few extrema were detected or when the peak and
/// valley sequences do not strictly alternate.
pub fn find_twitch_indices(extrema: &ExtremaIndices) -> Result<TwitchIndices> {
    find_twitch_indices_with_floors(extrema, MIN_NUMBER_PEAKS, MIN_NUMBER_VALLEYS)
}

/// [`find_twitch_indices`] with explicit extremum-count floors.
pub fn find_twitch_indices_with_floors(
    extrema: &ExtremaIndices,
    min_peaks: usize,
    min_valleys: usize,
) -> Result<TwitchIndices> {
    let peaks = &extrema.peaks;
    let valleys = &extrema.valleys;

    if peaks.len() < min_peaks {
        return Err(TwitchError::InsufficientExtremaDetected {
            kind: ExtremumKind::Peak,
            detected: peaks.len(),
            required: min_peaks,
        });
    }
    if valleys.len() < min_valleys {
        return Err(TwitchError::InsufficientExtremaDetected {
            kind: ExtremumKind::Valley,
            detected: valleys.len(),
            required: min_valleys,
        });
    }

    let starts_with_peak = peaks[0] < valleys[0];
    check_alternation(peaks, valleys, starts_with_peak)?;

    let mut twitches = TwitchIndices::new();
    for (idx, &peak) in peaks.iter().enumerate() {
        if idx + 1 == peaks.len() {
            // The last peak has no subsequent peak to bound it.
            continue;
        }
        if idx == 0 && starts_with_peak {
            // No real valley precedes the very first peak.
            continue;
        }

        twitches.insert(
            peak,
            TwitchRecord {
                prior_peak: (idx > 0).then(|| peaks[idx - 1]),
                prior_valley: valleys[if starts_with_peak { idx - 1 } else { idx }],
                subsequent_peak: peaks[idx + 1],
                subsequent_valley: valleys[if starts_with_peak { idx } else { idx + 1 }],
            },
        );
    }
    debug!(
        "{} analyzable twitches from {} peaks / {} valleys",
        twitches.len(),
        peaks.len(),
        valleys.len()
    );

    Ok(twitches)
}

/// Walk both index sequences confirming strict peak/valley alternation.
///
/// Two peaks with no intervening valley (or the symmetric valley case) abort
/// the analysis, citing the offending pair. A trailing run of more than one
/// unconsumed extremum is the same violation at the end of the recording.
fn check_alternation(peaks: &[usize], valleys: &[usize], starts_with_peak: bool) -> Result<()> {
    let mut prev_is_peak = starts_with_peak;
    let (mut peak_idx, mut valley_idx) = if starts_with_peak { (1, 0) } else { (0, 1) };

    while peak_idx < peaks.len() && valley_idx < valleys.len() {
        if prev_is_peak {
            if valleys[valley_idx] > peaks[peak_idx] {
                return Err(TwitchError::TwoPeaksInARow {
                    first: peaks[peak_idx - 1],
                    second: peaks[peak_idx],
                });
            }
            valley_idx += 1;
        } else {
            if valleys[valley_idx] < peaks[peak_idx] {
                return Err(TwitchError::TwoValleysInARow {
                    first: valleys[valley_idx - 1],
                    second: valleys[valley_idx],
                });
            }
            peak_idx += 1;
        }
        prev_is_peak = !prev_is_peak;
    }

    if peak_idx + 1 < peaks.len() {
        return Err(TwitchError::TwoPeaksInARow {
            first: peaks[peak_idx],
            second: peaks[peak_idx + 1],
        });
    }
    if valley_idx + 1 < valleys.len() {
        return Err(TwitchError::TwoValleysInARow {
            first: valleys[valley_idx],
            second: valleys[valley_idx + 1],
        });
    }
    Ok(())
}
