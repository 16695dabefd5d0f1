use crate::constants::AUC_WIDTH_PERCENT;
use crate::signal::FilteredSignal;
use crate::twitch::indexer::TwitchIndices;
use crate::twitch::interpolate::interpolate_y_for_x;
use crate::twitch::widths::{TwitchWidths, WidthCoord};

/// Area under the curve of each twitch.
///
/// Integrates the signal between the interpolated 90%-width rising and
/// falling crossing points with the trapezoidal rule, walking sample by
/// sample inward from the crossings toward the peak. The two end trapezoids
/// are truncated at the exact interpolated coordinates rather than at whole
/// samples. Area is measured above the chord connecting the two crossing
/// points, not above zero: each trapezoid side is the absolute distance from
/// the sampled value to that chord.
///
/// Assumes well-formed twitch records and width data; the indexer is the
/// validation boundary.
pub fn calculate_area_under_curve(
    twitches: &TwitchIndices,
    signal: &FilteredSignal<'_>,
    per_twitch_widths: &[TwitchWidths],
    round_to_int: bool,
) -> Vec<f64> {
    let time = signal.time();
    let value = signal.value();

    let mut auc_per_twitch = Vec::with_capacity(twitches.len());
    for ((&peak, record), width_info) in twitches.iter().zip(per_twitch_widths) {
        let bounds = &width_info[&AUC_WIDTH_PERCENT];
        let rising = bounds.rising;
        let falling = bounds.falling;

        let prior_valley_value = value[record.prior_valley];
        let subsequent_valley_value = value[record.subsequent_valley];

        let mut total = 0.0;

        // Rising side: whole-sample trapezoids from the peak down to the
        // last sample still above the crossing, then the truncated edge
        // trapezoid against the interpolated coordinate.
        let mut rising_idx = peak;
        while (value[rising_idx - 1] - prior_valley_value).abs()
            > (rising.value - prior_valley_value).abs()
        {
            total += trapezoid_area(
                time[rising_idx - 1] as f64,
                time[rising_idx] as f64,
                value[rising_idx - 1],
                value[rising_idx],
                rising,
                falling,
            );
            rising_idx -= 1;
        }
        total += trapezoid_area(
            rising.time,
            time[rising_idx] as f64,
            rising.value,
            value[rising_idx],
            rising,
            falling,
        );

        // Falling side, mirrored.
        let mut falling_idx = peak;
        while (value[falling_idx + 1] - subsequent_valley_value).abs()
            > (falling.value - subsequent_valley_value).abs()
        {
            total += trapezoid_area(
                time[falling_idx] as f64,
                time[falling_idx + 1] as f64,
                value[falling_idx],
                value[falling_idx + 1],
                rising,
                falling,
            );
            falling_idx += 1;
        }
        total += trapezoid_area(
            time[falling_idx] as f64,
            falling.time,
            value[falling_idx],
            falling.value,
            rising,
            falling,
        );

        auc_per_twitch.push(if round_to_int {
            total.round_ties_even()
        } else {
            total
        });
    }
    auc_per_twitch
}

/// Area of one trapezoid whose floor is the chord between the two crossing
/// coordinates.
fn trapezoid_area(
    left_x: f64,
    right_x: f64,
    left_y: f64,
    right_y: f64,
    rising: WidthCoord,
    falling: WidthCoord,
) -> f64 {
    let floor_at = |x: f64| {
        interpolate_y_for_x(x, rising.time, rising.value, falling.time, falling.value)
    };

    let height = right_x - left_x;
    let left_side = (left_y - floor_at(left_x)).abs();
    let right_side = (right_y - floor_at(right_x)).abs();
    (left_side + right_side) / 2.0 * height
}
