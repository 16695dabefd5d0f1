use std::f64::consts::PI;

/// Default sampling period: 100 Hz instrument, timestamps in
/// centimilliseconds (1/100,000 s).
pub const SAMPLING_PERIOD_CMS: i64 = 1000;

/// Generate a synthetic twitch waveform as (timestamps, values).
///
/// Each entry in `cycle_samples` produces one raised-cosine contraction
/// bump of that many samples, starting and ending at `baseline`; a final
/// baseline sample closes the last cycle. With `point_up` false the bumps
/// point in the negative direction, mimicking instruments whose twitches
/// point down.
pub fn generate_twitch_waveform(
    cycle_samples: &[usize],
    amplitude: f64,
    baseline: f64,
    point_up: bool,
) -> (Vec<i64>, Vec<f64>) {
    let direction = if point_up { 1.0 } else { -1.0 };
    let mut value = Vec::new();

    for &len in cycle_samples {
        for k in 0..len {
            let bump = (1.0 - (2.0 * PI * k as f64 / len as f64).cos()) / 2.0;
            value.push(baseline + direction * amplitude * bump);
        }
    }
    value.push(baseline);

    let time: Vec<i64> = (0..value.len())
        .map(|i| i as i64 * SAMPLING_PERIOD_CMS)
        .collect();
    (time, value)
}
