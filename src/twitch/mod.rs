pub mod auc;
pub mod indexer;
pub mod interpolate;
pub mod metrics;
pub mod stats;
pub mod widths;

pub use auc::calculate_area_under_curve;
pub use indexer::{
    TwitchIndices, TwitchRecord, find_twitch_indices, find_twitch_indices_with_floors,
};
pub use metrics::{AggregateMetrics, DataMetrics, TwitchMetrics, data_metrics, metrics_for_twitches};
pub use stats::MetricStats;
pub use widths::{TwitchWidths, WidthCoord, WidthMeasurement, calculate_twitch_widths};
