//! Build variable-width heat-ribbon meshes from recorded interaction traces.
//!
//! This crate turns time-ordered gaze or touch trajectories into
//! triangulated ribbons for session-replay analysis. Per-point
//! significance values drive the local width and opacity of the ribbon,
//! and highlight overlays mark notable x-ranges on top of it.
//!
//! # Features
//!
//! - **Significance-driven width**: each point's width encodes its scalar
//!   significance, smoothed over a moving window
//! - **Angle correction**: widths widen at turns to compensate for the
//!   fixed-axis cross-section offset, capped to keep geometry bounded
//! - **Highlight overlays**: thin strips sampled along the built
//!   centerline at unit x steps
//! - **True-normal mode**: opt-in geometrically exact cross-sections for
//!   comparison against the classic fixed-axis rendering
//!
//! # Quick Start
//!
//! ```
//! use ribbon_from_trace::{HeatRibbon, HighlightSpec, RibbonParams};
//! use ribbon_types::Point2;
//!
//! // A short horizontal trace with rising significance
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(20.0, 0.0),
//! ];
//!
//! let params = RibbonParams::default().with_max_width(4.0);
//! let mut ribbon = HeatRibbon::new(params);
//! ribbon.rebuild(&points, &[0.0, 0.5, 1.0])?;
//!
//! // Two vertices per point, two triangles per segment
//! assert_eq!(ribbon.mesh().vertex_count(), 6);
//! assert_eq!(ribbon.mesh().triangle_count(), 4);
//!
//! // Mark a span on top of the ribbon
//! ribbon.append_highlights(&[HighlightSpec::new(5.0, 4.0)])?;
//! assert!(ribbon.mesh().vertex_count() > 6);
//!
//! // Hand the flattened buffers to a renderer
//! let buffers = ribbon.mesh().to_buffers();
//! assert_eq!(buffers.positions.len(), buffers.colors.len());
//! # Ok::<(), ribbon_from_trace::RibbonError>(())
//! ```
//!
//! # Rebuild-then-overlay Contract
//!
//! [`HeatRibbon::rebuild`] replaces all geometry, including previously
//! appended highlights; [`HeatRibbon::append_highlights`] extends it and
//! therefore must follow a successful rebuild. Trace x coordinates must
//! be non-decreasing for the centerline queries to be meaningful.

mod error;
mod params;
mod ribbon;
mod width;

pub use error::{RibbonError, RibbonResult};
pub use params::{OffsetMode, RibbonParams};
pub use ribbon::{HeatRibbon, HighlightSpec};
pub use width::{opacity_for_significance, width_for_significance};
