use std::fmt;

use thiserror::Error;

/// Which kind of extremum fell short of the configured floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    Peak,
    Valley,
}

impl fmt::Display for ExtremumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtremumKind::Peak => write!(f, "peak"),
            ExtremumKind::Valley => write!(f, "valley"),
        }
    }
}

/// Validation errors raised while turning detected extrema into twitches.
///
/// All variants are fatal to the current analysis call; they reflect genuine
/// signal-quality or detection-parameter problems and are never retried
/// internally. Payloads are kept to the offending indices; callers already
/// hold the signal and extrema arrays needed for richer diagnostics.
#[derive(Error, Debug)]
pub enum TwitchError {
    #[error(
        "A minimum of {required} {kind}s is required to extract twitch metrics, \
         however only {detected} {kind}(s) were detected"
    )]
    InsufficientExtremaDetected {
        kind: ExtremumKind,
        detected: usize,
        required: usize,
    },

    #[error("Two peaks in a row detected at sample indices {first} and {second}")]
    TwoPeaksInARow { first: usize, second: usize },

    #[error("Two valleys in a row detected at sample indices {first} and {second}")]
    TwoValleysInARow { first: usize, second: usize },

    #[error("Signal rows differ in length: {times} timestamps vs {values} values")]
    MismatchedSignalRows { times: usize, values: usize },
}

pub type Result<T> = std::result::Result<T, TwitchError>;
