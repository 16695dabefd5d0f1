//! Local-extremum search with distance, prominence, and width constraints.
//!
//! Plateau-aware local maxima, minimum-separation selection in order of
//! peak height, prominence computed against the surrounding bases, and
//! width measured at half prominence with sub-sample interpolated
//! intersection points.
//!
//! The search is tie-break sensitive: when two candidates within `distance`
//! of each other have equal height, the later one wins, via the stable
//! ascending priority sort.

/// Constraints applied to candidate maxima, in order: distance, prominence,
/// width.
#[derive(Debug, Clone, Copy)]
pub struct PeakSearchParams {
    /// Minimum index separation between retained peaks.
    pub distance: usize,
    /// Minimum required prominence.
    pub min_prominence: f64,
    /// Minimum required width (in samples) at half prominence.
    pub min_width: f64,
}

/// Retained peaks plus the prominence support used to qualify them.
///
/// All vectors are index-aligned; `indices` is strictly increasing.
#[derive(Debug, Clone, Default)]
pub struct DetectedPeaks {
    pub indices: Vec<usize>,
    pub prominences: Vec<f64>,
    pub left_bases: Vec<usize>,
    pub right_bases: Vec<usize>,
}

impl DetectedPeaks {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Find all local maxima in `x` satisfying `params`.
pub fn find_peaks(x: &[f64], params: &PeakSearchParams) -> DetectedPeaks {
    let mut candidates = local_maxima(x);

    if params.distance > 1 {
        candidates = select_by_peak_distance(&candidates, x, params.distance);
    }

    let mut peaks = peak_prominences(x, &candidates);

    if params.min_prominence > 0.0 {
        retain_aligned(&mut peaks, |i, p| p.prominences[i] >= params.min_prominence);
    }

    if params.min_width > 0.0 {
        let widths = peak_widths_at_half_prominence(x, &peaks);
        retain_aligned(&mut peaks, |i, _| widths[i] >= params.min_width);
    }

    peaks
}

/// Indices of all strict local maxima, with plateaus reported at their
/// midpoint.
fn local_maxima(x: &[f64]) -> Vec<usize> {
    let mut maxima = Vec::new();
    if x.len() < 3 {
        return maxima;
    }

    let i_max = x.len() - 1;
    let mut i = 1;
    while i < i_max {
        if x[i - 1] < x[i] {
            // Scan past any plateau of equal samples.
            let mut i_ahead = i + 1;
            while i_ahead < i_max && x[i_ahead] == x[i] {
                i_ahead += 1;
            }
            if x[i_ahead] < x[i] {
                let left_edge = i;
                let right_edge = i_ahead - 1;
                maxima.push((left_edge + right_edge) / 2);
                i = i_ahead;
                continue;
            }
        }
        i += 1;
    }
    maxima
}

/// Enforce a minimum separation between peaks, keeping the highest of any
/// conflicting group.
///
/// Peaks are visited from highest to lowest value; each survivor suppresses
/// every unvisited neighbor closer than `distance`. The priority sort is
/// stable, so equal-height conflicts resolve in favor of the later index.
fn select_by_peak_distance(peaks: &[usize], x: &[f64], distance: usize) -> Vec<usize> {
    let n = peaks.len();
    let mut keep = vec![true; n];

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        x[peaks[a]]
            .partial_cmp(&x[peaks[b]])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for &j in order.iter().rev() {
        if !keep[j] {
            continue;
        }
        let mut k = j;
        while k > 0 && peaks[j] - peaks[k - 1] < distance {
            k -= 1;
            keep[k] = false;
        }
        let mut k = j + 1;
        while k < n && peaks[k] - peaks[j] < distance {
            keep[k] = false;
            k += 1;
        }
    }

    peaks
        .iter()
        .zip(&keep)
        .filter_map(|(&p, &k)| k.then_some(p))
        .collect()
}

/// Compute the prominence and supporting bases of each peak.
///
/// For each side, scan away from the peak until a sample higher than the
/// peak (or the signal border) is found; the base is the lowest sample
/// encountered on the way. Prominence is the peak height above the higher
/// of the two base minima.
fn peak_prominences(x: &[f64], peaks: &[usize]) -> DetectedPeaks {
    let mut out = DetectedPeaks::default();

    for &peak in peaks {
        let peak_val = x[peak];

        let mut left_min = peak_val;
        let mut left_base = peak;
        let mut i = peak;
        while i > 0 {
            i -= 1;
            if x[i] > peak_val {
                break;
            }
            if x[i] < left_min {
                left_min = x[i];
                left_base = i;
            }
        }

        let mut right_min = peak_val;
        let mut right_base = peak;
        let mut i = peak;
        while i + 1 < x.len() {
            i += 1;
            if x[i] > peak_val {
                break;
            }
            if x[i] < right_min {
                right_min = x[i];
                right_base = i;
            }
        }

        out.indices.push(peak);
        out.prominences.push(peak_val - left_min.max(right_min));
        out.left_bases.push(left_base);
        out.right_bases.push(right_base);
    }

    out
}

/// Width of each peak at half its prominence, in (fractional) samples.
///
/// The intersection points on either side are linearly interpolated between
/// the last sample above the evaluation height and the first at or below it.
fn peak_widths_at_half_prominence(x: &[f64], peaks: &DetectedPeaks) -> Vec<f64> {
    let mut widths = Vec::with_capacity(peaks.len());

    for i in 0..peaks.len() {
        let peak = peaks.indices[i];
        let height = x[peak] - peaks.prominences[i] * 0.5;

        let mut l = peak;
        while l > peaks.left_bases[i] && x[l] > height {
            l -= 1;
        }
        let left_ip = if l < peak && x[l] < height {
            l as f64 + (height - x[l]) / (x[l + 1] - x[l])
        } else {
            l as f64
        };

        let mut r = peak;
        while r < peaks.right_bases[i] && x[r] > height {
            r += 1;
        }
        let right_ip = if r > peak && x[r] < height {
            r as f64 - (height - x[r]) / (x[r - 1] - x[r])
        } else {
            r as f64
        };

        widths.push(right_ip - left_ip);
    }

    widths
}

fn retain_aligned<F>(peaks: &mut DetectedPeaks, predicate: F)
where
    F: Fn(usize, &DetectedPeaks) -> bool,
{
    let kept: Vec<usize> = (0..peaks.len())
        .filter(|&i| predicate(i, peaks))
        .collect();

    peaks.indices = kept.iter().map(|&i| peaks.indices[i]).collect();
    peaks.prominences = kept.iter().map(|&i| peaks.prominences[i]).collect();
    peaks.left_bases = kept.iter().map(|&i| peaks.left_bases[i]).collect();
    peaks.right_bases = kept.iter().map(|&i| peaks.right_bases[i]).collect();
}
