//! Configuration for a twitch analysis call.
//!
//! The stateless entry points in [`crate::extrema`] and [`crate::twitch`]
//! take the individual flags they need; [`crate::analysis::analyze`] takes
//! the whole config and threads it through the pipeline.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_TWITCH_FREQUENCY_HZ, MIN_NUMBER_PEAKS, MIN_NUMBER_VALLEYS};

/// Analysis parameters supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Whether biological twitches point in the positive direction in the
    /// incoming data stream.
    pub twitches_point_up: bool,
    /// Round per-twitch values and aggregate statistics to the nearest
    /// integer (half-to-even) instead of returning exact floats.
    pub round_to_int: bool,
    /// Minimum number of detected peaks required for analysis.
    pub min_peaks: usize,
    /// Minimum number of detected valleys required for analysis.
    pub min_valleys: usize,
    /// Maximum plausible twitch frequency in Hz, used to derive the minimum
    /// sample separation between detected extrema.
    pub max_twitch_frequency_hz: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            twitches_point_up: true,
            round_to_int: true,
            min_peaks: MIN_NUMBER_PEAKS,
            min_valleys: MIN_NUMBER_VALLEYS,
            max_twitch_frequency_hz: MAX_TWITCH_FREQUENCY_HZ,
        }
    }
}
