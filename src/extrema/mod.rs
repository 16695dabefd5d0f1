pub mod locator;
pub mod peak_finder;

pub use locator::{ExtremaIndices, detect_extrema, detect_extrema_with_max_frequency};
pub use peak_finder::{DetectedPeaks, PeakSearchParams, find_peaks};
