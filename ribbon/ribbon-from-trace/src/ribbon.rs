//! Variable-width ribbon construction.
//!
//! A [`HeatRibbon`] turns an ordered trace of 2D points with per-point
//! significance values into a triangulated ribbon whose local width and
//! opacity encode the significance. Highlight overlays mark x-ranges on
//! top of the built ribbon.

// Vertex indices are u32 by mesh contract
#![allow(clippy::cast_possible_truncation)]

use nalgebra::{Point2, Vector2};
use ribbon_types::{RibbonMesh, Rgba};
use tracing::debug;

use crate::error::{RibbonError, RibbonResult};
use crate::params::{OffsetMode, RibbonParams};
use crate::width::{
    angle_corrected_width, line_angle, opacity_for_significance, smoothed_widths, unit_normal,
    width_for_significance, SmoothedWidth,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Narrowest span a highlight may cover, in x units.
const MIN_HIGHLIGHT_WIDTH: f64 = 2.0;

/// Half-height of the highlight strip around the centerline.
const HIGHLIGHT_HALF_HEIGHT: f64 = 3.0;

/// An x-range to mark on top of a built ribbon.
///
/// Widths below 2 are raised to 2 so every highlight produces at least
/// one visible quad.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HighlightSpec {
    /// Left edge of the highlighted span.
    pub left_x: f64,
    /// Span width in x units.
    pub width: f64,
}

impl HighlightSpec {
    /// Create a highlight spec.
    #[inline]
    #[must_use]
    pub const fn new(left_x: f64, width: f64) -> Self {
        Self { left_x, width }
    }
}

/// Builder and owner of one variable-width ribbon mesh.
///
/// Each instance owns its mesh and centerline exclusively. A call to
/// [`rebuild`](Self::rebuild) replaces both wholesale; highlight overlays
/// extend the mesh additively and are themselves discarded by the next
/// rebuild.
///
/// # Example
///
/// ```
/// use ribbon_from_trace::{HeatRibbon, RibbonParams};
/// use ribbon_types::Point2;
///
/// let mut ribbon = HeatRibbon::new(RibbonParams::default());
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(20.0, 0.0),
/// ];
/// ribbon.rebuild(&points, &[0.0, 0.5, 1.0])?;
///
/// assert_eq!(ribbon.mesh().vertex_count(), 6);
/// assert_eq!(ribbon.mesh().triangle_count(), 4);
/// # Ok::<(), ribbon_from_trace::RibbonError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HeatRibbon {
    params: RibbonParams,
    base_color: Rgba,
    highlight_color: Rgba,
    centerline: Vec<Point2<f64>>,
    mesh: RibbonMesh,
}

impl HeatRibbon {
    /// Create a ribbon with the given parameters and no geometry.
    ///
    /// Base and highlight colors default to opaque white.
    #[must_use]
    pub fn new(params: RibbonParams) -> Self {
        Self {
            params,
            base_color: Rgba::WHITE,
            highlight_color: Rgba::WHITE,
            centerline: Vec::new(),
            mesh: RibbonMesh::new(),
        }
    }

    /// The construction parameters.
    #[inline]
    #[must_use]
    pub fn params(&self) -> &RibbonParams {
        &self.params
    }

    /// The accumulated mesh: ribbon geometry plus any appended highlights.
    #[inline]
    #[must_use]
    pub fn mesh(&self) -> &RibbonMesh {
        &self.mesh
    }

    /// The centerline recorded by the last rebuild; empty before the first.
    #[inline]
    #[must_use]
    pub fn centerline(&self) -> &[Point2<f64>] {
        &self.centerline
    }

    /// Set the ribbon base color. Alpha is overwritten per vertex by the
    /// opacity falloff.
    pub fn set_base_color(&mut self, color: Rgba) {
        self.base_color = color;
    }

    /// Set the highlight overlay color.
    pub fn set_highlight_color(&mut self, color: Rgba) {
        self.highlight_color = color;
    }

    /// Rebuild the ribbon mesh from a trace.
    ///
    /// Replaces the centerline and all accumulated geometry, including
    /// highlight overlays from previous appends. Significance values are
    /// clamped to [0, 1]; `points` must be non-decreasing in x for the
    /// position queries that highlights rely on (a caller contract, not
    /// validated here).
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::TooFewPoints`] for fewer than 2 points,
    /// [`RibbonError::LengthMismatch`] when the significance sequence has
    /// a different length, and the parameter validation errors of
    /// [`RibbonParams::validate`]. On error the previous geometry is left
    /// untouched.
    pub fn rebuild(&mut self, points: &[Point2<f64>], significances: &[f64]) -> RibbonResult<()> {
        self.params.validate()?;
        if points.len() < 2 {
            return Err(RibbonError::TooFewPoints {
                min: 2,
                actual: points.len(),
            });
        }
        if significances.len() != points.len() {
            return Err(RibbonError::LengthMismatch {
                points: points.len(),
                significances: significances.len(),
            });
        }

        let clamped: Vec<f64> = significances.iter().map(|d| d.clamp(0.0, 1.0)).collect();
        let widths: Vec<f64> = clamped
            .iter()
            .map(|&d| width_for_significance(d, self.params.max_width))
            .collect();
        let smoothed = smoothed_widths(&widths, self.params.smooth_window);
        let half = self.params.smooth_window / 2;

        let mut mesh = RibbonMesh::with_capacity(2 * points.len(), 2 * (points.len() - 1));
        for i in 0..points.len() {
            let vi = mesh.vertex_count() as u32;
            let point = points[i];
            let color = self
                .base_color
                .with_opacity(opacity_for_significance(clamped[i], self.params.use_opacity));

            let offset = self.cross_section_offset(points, &widths, &smoothed, half, i);
            mesh.push_vertex(point - offset, color);
            mesh.push_vertex(point + offset, color);

            if i > 0 {
                mesh.triangles.push([vi - 2, vi, vi - 1]);
                mesh.triangles.push([vi - 1, vi, vi + 1]);
            }
        }

        debug!(
            points = points.len(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "rebuilt ribbon mesh"
        );

        self.centerline = points.to_vec();
        self.mesh = mesh;
        Ok(())
    }

    /// Offset from the centerline to the cross-section vertices at point `i`.
    fn cross_section_offset(
        &self,
        points: &[Point2<f64>],
        widths: &[f64],
        smoothed: &[SmoothedWidth],
        half: usize,
        i: usize,
    ) -> Vector2<f64> {
        match (self.params.offset_mode, smoothed[i]) {
            (OffsetMode::FixedVertical, SmoothedWidth::Edge) => Vector2::new(0.0, widths[i]),
            (OffsetMode::FixedVertical, SmoothedWidth::Interior(avg)) => {
                let angle = line_angle(&points[i - half], &points[i + half]);
                Vector2::new(0.0, angle_corrected_width(avg, angle))
            }
            (OffsetMode::TrueNormal, SmoothedWidth::Edge) => {
                let prev = i.saturating_sub(1);
                let next = (i + 1).min(points.len() - 1);
                unit_normal(&points[prev], &points[next]) * widths[i]
            }
            (OffsetMode::TrueNormal, SmoothedWidth::Interior(avg)) => {
                unit_normal(&points[i - half], &points[i + half]) * avg
            }
        }
    }

    /// Interpolate the centerline y at the given x.
    ///
    /// Queries at or beyond the first/last centerline x return the
    /// endpoint's y unchanged (flat extrapolation); interior queries
    /// interpolate linearly within the bracketing segment. Relies on the
    /// monotonic-x contract of the centerline.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::NoRibbonBuilt`] before the first rebuild, and
    /// [`RibbonError::NonMonotonicCenterline`] when the interpolation
    /// fraction leaves [0, 1] - the marker of corrupt upstream data.
    pub fn position_on_line(&self, x: f64) -> RibbonResult<Point2<f64>> {
        let points = &self.centerline;
        let Some((first, last)) = points.first().zip(points.last()) else {
            return Err(RibbonError::NoRibbonBuilt);
        };
        if x <= first.x {
            return Ok(Point2::new(x, first.y));
        }
        if x >= last.x {
            return Ok(Point2::new(x, last.y));
        }

        // First point at or past the query; the endpoint checks above pin
        // it to an interior segment for any monotonic centerline.
        let index = points.partition_point(|p| p.x < x);
        if index == 0 {
            return Err(RibbonError::NonMonotonicCenterline { x });
        }
        let prev = points[index - 1];
        let cur = points[index];

        let fraction = (x - prev.x) / (cur.x - prev.x);
        if !(0.0..=1.0).contains(&fraction) {
            return Err(RibbonError::NonMonotonicCenterline { x });
        }
        Ok(Point2::new(x, (1.0 - fraction) * prev.y + fraction * cur.y))
    }

    /// Append highlight strips on top of the built ribbon.
    ///
    /// Each spec samples the centerline at unit x steps across its span
    /// and emits a thin strip of fixed height in the highlight color at
    /// full opacity. Geometry is staged and merged only after every
    /// sample succeeded, so a failure leaves the mesh untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::NoRibbonBuilt`] if no rebuild has completed
    /// yet, and propagates [`RibbonError::NonMonotonicCenterline`] from
    /// the centerline queries.
    pub fn append_highlights(&mut self, highlights: &[HighlightSpec]) -> RibbonResult<()> {
        if self.centerline.is_empty() {
            return Err(RibbonError::NoRibbonBuilt);
        }

        let color = self.highlight_color.with_opacity(1.0);
        let mut overlay = RibbonMesh::new();
        for spec in highlights {
            let right_x = spec.left_x + spec.width.max(MIN_HIGHLIGHT_WIDTH);

            let center = self.position_on_line(spec.left_x)?;
            push_highlight_pair(&mut overlay, center, color);

            let mut x = spec.left_x + 1.0;
            while x < right_x {
                let vi = overlay.vertex_count() as u32;
                let center = self.position_on_line(x)?;
                push_highlight_pair(&mut overlay, center, color);
                overlay.triangles.push([vi - 2, vi + 1, vi - 1]);
                overlay.triangles.push([vi - 2, vi, vi + 1]);
                x += 1.0;
            }
        }

        debug!(
            highlights = highlights.len(),
            vertices = overlay.vertex_count(),
            "appended highlight overlay"
        );

        self.mesh.merge(&overlay);
        Ok(())
    }
}

/// Emit the two vertices of a highlight cross-section.
fn push_highlight_pair(overlay: &mut RibbonMesh, center: Point2<f64>, color: Rgba) {
    overlay.push_vertex(
        Point2::new(center.x, center.y - HIGHLIGHT_HALF_HEIGHT),
        color,
    );
    overlay.push_vertex(
        Point2::new(center.x, center.y + HIGHLIGHT_HALF_HEIGHT),
        color,
    );
}
