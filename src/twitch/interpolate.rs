//! Point-slope linear interpolation between two samples.
//!
//! Both directions are needed: the width search solves for the fractional
//! crossing time at a known threshold value (x for y), and the AUC baseline
//! solves for the chord height at a known time (y for x).

/// Value of x between two points at which the line through them reaches
/// `desired_y`.
pub fn interpolate_x_for_y(desired_y: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let slope = (y2 - y1) / (x2 - x1);
    (desired_y - y1) / slope + x1
}

/// Value of the line through two points evaluated at `desired_x`.
pub fn interpolate_y_for_x(desired_x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let slope = (y2 - y1) / (x2 - x1);
    slope * (desired_x - x1) + y1
}
