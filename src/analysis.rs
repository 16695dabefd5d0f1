use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::extrema::{ExtremaIndices, detect_extrema_with_max_frequency};
use crate::signal::FilteredSignal;
use crate::twitch::indexer::{TwitchIndices, find_twitch_indices_with_floors};
use crate::twitch::metrics::{AggregateMetrics, TwitchMetrics, metrics_for_twitches};

/// Everything one analysis call produces.
#[derive(Debug, Clone, Serialize)]
pub struct TwitchAnalysis {
    pub extrema: ExtremaIndices,
    /// Twitch records keyed by twitch peak index.
    pub twitches: TwitchIndices,
    /// Per-twitch metric bundles keyed by twitch peak timestamp.
    pub per_twitch: std::collections::BTreeMap<i64, TwitchMetrics>,
    pub aggregate: AggregateMetrics,
}

/// Run the full pipeline on one filtered signal: locate extrema, index the
/// analyzable twitches, and compute per-twitch and aggregate metrics.
///
/// A pure function of its inputs: no I/O, no shared state, no partial
/// results on failure. Independent recordings (e.g. one per instrument
/// well) can be analyzed in parallel with no coordination.
pub fn analyze(signal: &FilteredSignal<'_>, config: &AnalysisConfig) -> Result<TwitchAnalysis> {
    let extrema = detect_extrema_with_max_frequency(
        signal,
        config.twitches_point_up,
        config.max_twitch_frequency_hz,
    );
    let twitches = find_twitch_indices_with_floors(&extrema, config.min_peaks, config.min_valleys)?;
    let (per_twitch, aggregate) =
        metrics_for_twitches(&twitches, &extrema, signal, config.round_to_int);

    Ok(TwitchAnalysis {
        extrema,
        twitches,
        per_twitch,
        aggregate,
    })
}
