//! Axis-aligned bounding box in 2D.

use nalgebra::{Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (AABB).
///
/// Represents a 2D rectangle aligned with the coordinate axes, defined by
/// minimum and maximum corner points. Renderers use it to size viewports
/// and cull off-screen ribbon geometry.
///
/// # Example
///
/// ```
/// use ribbon_types::{Aabb, Point2};
///
/// let aabb = Aabb::new(Point2::new(0.0, 0.0), Point2::new(10.0, 4.0));
///
/// assert_eq!(aabb.size().x, 10.0);
/// assert_eq!(aabb.size().y, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y values).
    pub min: Point2<f64>,
    /// Maximum corner (largest x, y values).
    pub max: Point2<f64>,
}

impl Aabb {
    /// Create a new AABB from minimum and maximum corners.
    ///
    /// The corners are automatically corrected if min > max for any axis.
    #[must_use]
    pub fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        Self {
            min: Point2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Point2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Create an AABB from a single point.
    ///
    /// The resulting box has zero area.
    #[inline]
    #[must_use]
    pub const fn from_point(point: Point2<f64>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Create an empty (invalid) AABB.
    ///
    /// An empty AABB has min > max, which is useful as a starting point
    /// for expanding to include points.
    ///
    /// # Example
    ///
    /// ```
    /// use ribbon_types::{Aabb, Point2};
    ///
    /// let mut aabb = Aabb::empty();
    /// assert!(aabb.is_empty());
    ///
    /// aabb.expand_to_include(&Point2::new(1.0, 2.0));
    /// assert!(!aabb.is_empty());
    /// ```
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point2::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create an AABB from an iterator of points.
    ///
    /// Returns an empty AABB if the iterator is empty.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point2<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Expand the AABB to include the given point.
    pub fn expand_to_include(&mut self, point: &Point2<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Check if the AABB is empty (has no valid area).
    ///
    /// An AABB is empty if min > max for any axis.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Get the size (dimensions) of the AABB.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector2<f64> {
        self.max - self.min
    }

    /// Get the center of the AABB.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Get the area of the AABB.
    ///
    /// Returns 0.0 for empty AABBs.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let s = self.size();
        s.x * s.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_corrects_swapped_corners() {
        let aabb = Aabb::new(Point2::new(5.0, 0.0), Point2::new(0.0, 3.0));
        assert_relative_eq!(aabb.min.x, 0.0);
        assert_relative_eq!(aabb.max.x, 5.0);
    }

    #[test]
    fn empty_aabb() {
        let aabb = Aabb::empty();
        assert!(aabb.is_empty());
        assert_relative_eq!(aabb.area(), 0.0);
    }

    #[test]
    fn from_points_spans_all() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(-2.0, 8.0),
        ];
        let aabb = Aabb::from_points(points.iter());
        assert_relative_eq!(aabb.min.x, -2.0);
        assert_relative_eq!(aabb.min.y, 0.0);
        assert_relative_eq!(aabb.max.x, 10.0);
        assert_relative_eq!(aabb.max.y, 8.0);
    }

    #[test]
    fn center_and_size() {
        let aabb = Aabb::new(Point2::new(0.0, 0.0), Point2::new(4.0, 2.0));
        assert_relative_eq!(aabb.center().x, 2.0);
        assert_relative_eq!(aabb.center().y, 1.0);
        assert_relative_eq!(aabb.size().x, 4.0);
        assert_relative_eq!(aabb.area(), 8.0);
    }

    #[test]
    fn from_single_point_has_zero_area() {
        let aabb = Aabb::from_point(Point2::new(3.0, 4.0));
        assert!(!aabb.is_empty());
        assert_relative_eq!(aabb.area(), 0.0);
    }
}
