use crate::error::{Result, TwitchError};

/// Borrowed two-row view of a noise-filtered waveform.
///
/// Row 0 holds timestamps in centimilliseconds (1/100,000 s), monotonically
/// increasing; row 1 holds the filtered magnetic/voltage values. The view is
/// owned by the noise-filtering collaborator and borrowed for the duration of
/// an analysis call; nothing in this crate mutates it.
#[derive(Debug, Clone, Copy)]
pub struct FilteredSignal<'a> {
    time: &'a [i64],
    value: &'a [f64],
}

impl<'a> FilteredSignal<'a> {
    /// Create a signal view over equal-length timestamp and value rows.
    pub fn new(time: &'a [i64], value: &'a [f64]) -> Result<Self> {
        if time.len() != value.len() {
            return Err(TwitchError::MismatchedSignalRows {
                times: time.len(),
                values: value.len(),
            });
        }
        Ok(Self { time, value })
    }

    /// Timestamp row in centimilliseconds.
    pub fn time(&self) -> &'a [i64] {
        self.time
    }

    /// Value row.
    pub fn value(&self) -> &'a [f64] {
        self.value
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Sampling period in centimilliseconds, taken from the first two
    /// timestamps.
    pub fn sampling_period_cms(&self) -> i64 {
        self.time[1] - self.time[0]
    }
}
