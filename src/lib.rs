pub mod analysis;
pub mod config;
pub mod constants;
pub mod error;
pub mod extrema;
pub mod signal;
pub mod twitch;

pub use analysis::{TwitchAnalysis, analyze};
pub use config::AnalysisConfig;
pub use error::{ExtremumKind, Result, TwitchError};
pub use extrema::{ExtremaIndices, detect_extrema};
pub use signal::FilteredSignal;
pub use twitch::{data_metrics, find_twitch_indices};
