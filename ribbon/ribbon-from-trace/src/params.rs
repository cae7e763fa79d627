//! Ribbon construction parameters.

use crate::error::{RibbonError, RibbonResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How cross-section offsets are oriented relative to the centerline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OffsetMode {
    /// Offset every cross-section straight along the y axis, scaling the
    /// offset magnitude by 1/cos of the local tangent angle (capped at 2x).
    ///
    /// This is the classic behavior for near-horizontal time-series
    /// ribbons. It is not a true miter join: on steep turns the fixed-axis
    /// offset under-represents the geometric width even after the angle
    /// scaling.
    #[default]
    FixedVertical,

    /// Offset each cross-section along the true local normal of the
    /// centerline, with no angle scaling.
    ///
    /// Produces geometrically exact cross-sections at any slope; opt in
    /// when comparing against the fixed-vertical rendering.
    TrueNormal,
}

/// Configuration for ribbon construction.
///
/// # Example
///
/// ```
/// use ribbon_from_trace::RibbonParams;
///
/// let params = RibbonParams::default()
///     .with_max_width(4.0)
///     .with_smooth_window(7);
///
/// assert!(params.use_opacity);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RibbonParams {
    /// Width added at full significance; per-point width is
    /// `1 + significance * max_width`. Must be finite and non-negative.
    pub max_width: f64,

    /// Fade cross-section alpha with significance. When disabled every
    /// vertex is fully opaque.
    pub use_opacity: bool,

    /// Number of samples in the moving-average width window. Must be at
    /// least 2; points closer than half a window to either end of the
    /// trace keep their raw width.
    pub smooth_window: usize,

    /// Orientation of the cross-section offsets.
    pub offset_mode: OffsetMode,
}

impl Default for RibbonParams {
    fn default() -> Self {
        Self {
            max_width: 1.0,
            use_opacity: true,
            smooth_window: 5,
            offset_mode: OffsetMode::FixedVertical,
        }
    }
}

impl RibbonParams {
    /// Set the maximum added width.
    #[must_use]
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width;
        self
    }

    /// Enable or disable the opacity falloff.
    #[must_use]
    pub fn with_use_opacity(mut self, use_opacity: bool) -> Self {
        self.use_opacity = use_opacity;
        self
    }

    /// Set the moving-average window size.
    #[must_use]
    pub fn with_smooth_window(mut self, smooth_window: usize) -> Self {
        self.smooth_window = smooth_window;
        self
    }

    /// Set the cross-section offset mode.
    #[must_use]
    pub fn with_offset_mode(mut self, offset_mode: OffsetMode) -> Self {
        self.offset_mode = offset_mode;
        self
    }

    /// Validate the parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::InvalidMaxWidth`] if `max_width` is negative
    /// or not finite, and [`RibbonError::WindowTooSmall`] if
    /// `smooth_window` is below 2.
    pub fn validate(&self) -> RibbonResult<()> {
        if self.max_width < 0.0 || !self.max_width.is_finite() {
            return Err(RibbonError::InvalidMaxWidth(self.max_width));
        }
        if self.smooth_window < 2 {
            return Err(RibbonError::WindowTooSmall {
                min: 2,
                actual: self.smooth_window,
            });
        }
        Ok(())
    }
}
