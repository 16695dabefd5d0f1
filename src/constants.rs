//! Numeric constants for twitch detection and metric extraction
//!
//! These constants pin down the instrument time base and the detection
//! thresholds used throughout the analysis pipeline.

/// Instrument time base: timestamps are in hundred-thousandths of a second
/// (centimilliseconds).
pub const CENTIMILLISECONDS_PER_SECOND: f64 = 100_000.0;

/// Maximum plausible twitch frequency in Hz. Sets the minimum required
/// sample separation between detected extrema.
pub const MAX_TWITCH_FREQUENCY_HZ: f64 = 7.0;

/// Fraction of the signal's total range required as peak prominence.
/// Extrema less prominent than range/4 are treated as noise.
pub const PROMINENCE_RANGE_DIVISOR: f64 = 4.0;

/// Minimum number of peaks required before twitch metrics can be extracted.
pub const MIN_NUMBER_PEAKS: usize = 3;

/// Minimum number of valleys required before twitch metrics can be extracted.
pub const MIN_NUMBER_VALLEYS: usize = 3;

/// Repolarization percentage thresholds at which twitch widths are measured.
pub const TWITCH_WIDTH_PERCENTS: [u32; 17] = [
    10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90,
];

/// Repolarization percentage whose interpolated crossing points bound the
/// area-under-curve integration.
pub const AUC_WIDTH_PERCENT: u32 = 90;
