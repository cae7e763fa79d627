//! Vertex color with alpha.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
///
/// The alpha channel carries per-vertex opacity: ribbon builders write the
/// opacity falloff of a cross-section into `a` while `r`, `g`, `b` stay at
/// the configured base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255), 255 is fully opaque.
    pub a: u8,
}

impl Rgba {
    /// Create a new color from RGBA components.
    ///
    /// # Example
    ///
    /// ```
    /// use ribbon_types::Rgba;
    ///
    /// let translucent_red = Rgba::new(255, 0, 0, 128);
    /// assert_eq!(translucent_red.a, 128);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    ///
    /// # Example
    ///
    /// ```
    /// use ribbon_types::Rgba;
    ///
    /// let red = Rgba::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from floating point values in [0, 1] range.
    ///
    /// Values are clamped to the valid range.
    ///
    /// # Example
    ///
    /// ```
    /// use ribbon_types::Rgba;
    ///
    /// let color = Rgba::from_float(1.0, 0.5, 0.0, 1.0);
    /// assert_eq!(color.r, 255);
    /// assert_eq!(color.g, 127);
    /// assert_eq!(color.b, 0);
    /// assert_eq!(color.a, 255);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation and sign loss are safe: values are clamped to [0.0, 1.0] before * 255.0
    pub fn from_float(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: (r.clamp(0.0, 1.0) * 255.0) as u8,
            g: (g.clamp(0.0, 1.0) * 255.0) as u8,
            b: (b.clamp(0.0, 1.0) * 255.0) as u8,
            a: (a.clamp(0.0, 1.0) * 255.0) as u8,
        }
    }

    /// Convert to floating point values in [0, 1] range.
    ///
    /// # Example
    ///
    /// ```
    /// use ribbon_types::Rgba;
    ///
    /// let color = Rgba::new(255, 128, 0, 255);
    /// let (r, g, b, a) = color.to_float();
    /// assert!((r - 1.0).abs() < 0.01);
    /// assert!((g - 0.5).abs() < 0.01);
    /// assert!((b - 0.0).abs() < 0.01);
    /// assert!((a - 1.0).abs() < 0.01);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_float(self) -> (f32, f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        )
    }

    /// Return the same color with the alpha channel set from an opacity
    /// in [0, 1].
    ///
    /// The opacity is clamped before scaling to 8 bits.
    ///
    /// # Example
    ///
    /// ```
    /// use ribbon_types::Rgba;
    ///
    /// let faded = Rgba::WHITE.with_opacity(0.25);
    /// assert_eq!(faded.a, 63);
    /// assert_eq!(faded.r, 255);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation and sign loss are safe: opacity is clamped to [0.0, 1.0] before * 255.0
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: (opacity.clamp(0.0, 1.0) * 255.0) as u8,
            ..self
        }
    }

    /// Black color (0, 0, 0), opaque.
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// White color (255, 255, 255), opaque.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Red color (255, 0, 0), opaque.
    pub const RED: Self = Self::opaque(255, 0, 0);

    /// Green color (0, 255, 0), opaque.
    pub const GREEN: Self = Self::opaque(0, 255, 0);

    /// Blue color (0, 0, 255), opaque.
    pub const BLUE: Self = Self::opaque(0, 0, 255);
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}
