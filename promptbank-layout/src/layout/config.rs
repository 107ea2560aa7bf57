//! Flow layout configuration: margin and the two spacing axes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Spacing used when a gap is left to the style.
pub const STYLE_SPACING: f32 = 5.0;

/// Default margin of a freshly constructed container.
pub const DEFAULT_MARGIN: f32 = 10.0;

/// Margin and spacing of the prompt board viewport.
pub const BOARD_MARGIN: f32 = 15.0;
pub const BOARD_SPACING: f32 = 15.0;

// =========================================================================
// Spacing
// =========================================================================

/// A gap between neighbouring items.
///
/// Serialized as a plain number. Any negative number (the legacy `-1`)
/// reads back as [`Spacing::Style`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Spacing {
    /// Use the style default ([`STYLE_SPACING`]).
    #[default]
    Style,
    /// A fixed, non-negative gap in pixels.
    Fixed(f32),
}

impl Spacing {
    /// Build a spacing from a raw value, mapping negative and NaN to `Style`.
    pub fn from_raw(value: f32) -> Self {
        if value.is_nan() || value < 0.0 {
            Spacing::Style
        } else {
            Spacing::Fixed(value)
        }
    }

    /// The gap in pixels.
    #[inline]
    pub fn resolve(self) -> f32 {
        match self {
            Spacing::Style => STYLE_SPACING,
            Spacing::Fixed(v) if v.is_nan() || v < 0.0 => STYLE_SPACING,
            Spacing::Fixed(v) => v,
        }
    }

    fn normalized(self) -> Self {
        match self {
            Spacing::Style => Spacing::Style,
            Spacing::Fixed(v) => Spacing::from_raw(v),
        }
    }
}

impl From<f32> for Spacing {
    fn from(value: f32) -> Self {
        Spacing::from_raw(value)
    }
}

impl From<f64> for Spacing {
    fn from(value: f64) -> Self {
        Spacing::from_raw(value as f32)
    }
}

impl Serialize for Spacing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Spacing::Style => serializer.serialize_f32(-1.0),
            Spacing::Fixed(v) => serializer.serialize_f32(*v),
        }
    }
}

impl<'de> Deserialize<'de> for Spacing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f32::deserialize(deserializer)?;
        Ok(Spacing::from_raw(raw))
    }
}

// =========================================================================
// LayoutConfig
// =========================================================================

/// Margin and spacing of a [`FlowContainer`](super::FlowContainer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Uniform inset on all four sides. Only widens the minimum size.
    pub margin: f32,
    /// Gap between items on the same row.
    pub horizontal_spacing: Spacing,
    /// Gap between rows.
    pub vertical_spacing: Spacing,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            horizontal_spacing: Spacing::Style,
            vertical_spacing: Spacing::Style,
        }
    }
}

impl LayoutConfig {
    /// Create a config with the default margin and style spacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration used by the prompt board.
    pub fn board() -> Self {
        Self::new().margin(BOARD_MARGIN).spacing(BOARD_SPACING)
    }

    /// Set the margin.
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set both spacing axes.
    pub fn spacing(mut self, spacing: impl Into<Spacing>) -> Self {
        let spacing = spacing.into();
        self.horizontal_spacing = spacing;
        self.vertical_spacing = spacing;
        self
    }

    /// Set the gap between items on a row.
    pub fn horizontal_spacing(mut self, spacing: impl Into<Spacing>) -> Self {
        self.horizontal_spacing = spacing.into();
        self
    }

    /// Set the gap between rows.
    pub fn vertical_spacing(mut self, spacing: impl Into<Spacing>) -> Self {
        self.vertical_spacing = spacing.into();
        self
    }

    /// Clamp out-of-range values: negative or NaN margin becomes 0, negative
    /// or NaN spacing falls back to the style.
    pub fn normalized(self) -> Self {
        let margin = if self.margin.is_nan() || self.margin < 0.0 {
            tracing::warn!(margin = self.margin, "invalid layout margin, using 0");
            0.0
        } else {
            self.margin
        };
        Self {
            margin,
            horizontal_spacing: self.horizontal_spacing.normalized(),
            vertical_spacing: self.vertical_spacing.normalized(),
        }
    }

    /// Resolved `(horizontal, vertical)` gaps in pixels.
    #[inline]
    pub fn resolved_spacing(&self) -> (f32, f32) {
        (self.horizontal_spacing.resolve(), self.vertical_spacing.resolve())
    }
}
