//! Error types for ribbon construction.

use thiserror::Error;

/// Result type for ribbon construction operations.
pub type RibbonResult<T> = Result<T, RibbonError>;

/// Errors that can occur while building or extending a ribbon mesh.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RibbonError {
    /// Trace has too few points to form a ribbon.
    #[error("trace needs at least {min} points, got {actual}")]
    TooFewPoints {
        /// Minimum required points.
        min: usize,
        /// Actual point count.
        actual: usize,
    },

    /// Point and significance sequences differ in length.
    #[error("trace has {points} points but {significances} significance values")]
    LengthMismatch {
        /// Number of trace points supplied.
        points: usize,
        /// Number of significance values supplied.
        significances: usize,
    },

    /// Maximum width is negative or not finite.
    #[error("invalid max width: {0} (must be finite and non-negative)")]
    InvalidMaxWidth(f64),

    /// Smoothing window is too small to average over.
    #[error("smoothing window must be at least {min}, got {actual}")]
    WindowTooSmall {
        /// Minimum required window size.
        min: usize,
        /// Actual window size.
        actual: usize,
    },

    /// A query or overlay was requested before any successful rebuild.
    #[error("no ribbon built yet; rebuild the ribbon before querying or highlighting")]
    NoRibbonBuilt,

    /// The centerline violated the monotonic-x contract.
    ///
    /// This signals corrupt upstream data; the operation that hit it is
    /// aborted rather than emitting distorted geometry.
    #[error("centerline is not monotonic in x around x = {x}")]
    NonMonotonicCenterline {
        /// The query x that exposed the violation.
        x: f64,
    },
}
