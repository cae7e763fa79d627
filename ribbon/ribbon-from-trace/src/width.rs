//! Width and opacity profiles along a trace.
//!
//! Significance drives both the local half-width of the ribbon and the
//! alpha falloff of its vertices. Widths are smoothed over a moving
//! window before tessellation so single noisy samples do not produce
//! spikes in the silhouette.

use nalgebra::{Point2, Vector2};

/// Map a significance value to a ribbon half-width.
///
/// The significance is clamped to [0, 1], so the result is always in
/// `[1, 1 + max_width]` and monotonic in the input.
///
/// # Example
///
/// ```
/// use ribbon_from_trace::width_for_significance;
///
/// assert_eq!(width_for_significance(0.0, 4.0), 1.0);
/// assert_eq!(width_for_significance(0.5, 4.0), 3.0);
/// assert_eq!(width_for_significance(7.0, 4.0), 5.0); // clamped
/// ```
#[inline]
#[must_use]
pub fn width_for_significance(significance: f64, max_width: f64) -> f64 {
    1.0 + significance.clamp(0.0, 1.0) * max_width
}

/// Map a clamped significance value to a vertex opacity.
///
/// `(1 - d)^2` when the falloff is enabled, strictly decreasing in `d`;
/// constant 1 otherwise.
///
/// # Example
///
/// ```
/// use ribbon_from_trace::opacity_for_significance;
///
/// assert_eq!(opacity_for_significance(0.0, true), 1.0);
/// assert_eq!(opacity_for_significance(0.5, true), 0.25);
/// assert_eq!(opacity_for_significance(0.5, false), 1.0);
/// ```
#[inline]
#[must_use]
pub fn opacity_for_significance(significance: f64, use_opacity: bool) -> f64 {
    if use_opacity {
        (1.0 - significance).powi(2)
    } else {
        1.0
    }
}

/// Smoothed width of one trace point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SmoothedWidth {
    /// Within half a window of either end: use the raw width, skip the
    /// angle correction.
    Edge,
    /// Interior point: moving-average width over the window.
    Interior(f64),
}

/// Compute the windowed moving-average width per point.
///
/// Maintains an incremental running sum: the sample half a window ahead
/// enters as `i` advances and the sample half a window behind leaves.
/// Points where either window bound falls outside the trace are flagged
/// [`SmoothedWidth::Edge`], giving a short flat-width region at both ends.
pub(crate) fn smoothed_widths(widths: &[f64], window: usize) -> Vec<SmoothedWidth> {
    let half = window / 2;
    let mut running: f64 = widths[..half.min(widths.len())].iter().sum();
    let mut smoothed = Vec::with_capacity(widths.len());

    #[allow(clippy::cast_precision_loss)]
    let window_len = window as f64;

    for i in 0..widths.len() {
        let mut edge = false;
        if i >= half {
            running -= widths[i - half];
        } else {
            edge = true;
        }
        if i + half < widths.len() {
            running += widths[i + half];
        } else {
            edge = true;
        }

        smoothed.push(if edge {
            SmoothedWidth::Edge
        } else {
            SmoothedWidth::Interior(running / window_len)
        });
    }

    smoothed
}

/// Tangent angle of the segment from `p1` to `p2`.
#[inline]
pub(crate) fn line_angle(p1: &Point2<f64>, p2: &Point2<f64>) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x)
}

/// Scale a width by the local tangent angle.
///
/// A straight vertical offset under-represents the ribbon width at turns;
/// dividing by cos compensates for the foreshortening. The cap at 2x keeps
/// the geometry bounded as the angle approaches 90 degrees.
#[inline]
pub(crate) fn angle_corrected_width(width: f64, angle: f64) -> f64 {
    (width / angle.cos()).min(width * 2.0)
}

/// Unit normal of the segment from `p1` to `p2`.
///
/// Falls back to the vertical axis for a degenerate segment.
pub(crate) fn unit_normal(p1: &Point2<f64>, p2: &Point2<f64>) -> Vector2<f64> {
    let tangent = p2 - p1;
    Vector2::new(-tangent.y, tangent.x)
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(|| Vector2::new(0.0, 1.0))
}
