//! Colors and resolved draw styles carried by booked views.

use std::fmt;

use serde::{Deserialize, Serialize};

/// RGBA color. Alpha is a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity fraction.
    pub a: f64,
}

impl Color {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from RGB channels and an opacity fraction.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional). Malformed
    /// channels fall back to 0.
    pub fn hex(s: &str) -> Self {
        let s = s.strip_prefix('#').unwrap_or(s);
        let chan = |lo: usize| {
            s.get(lo..lo + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(0)
        };
        Self { r: chan(0), g: chan(2), b: chan(4), a: 1.0 }
    }

    /// Same color with a different opacity.
    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    /// SVG fill/stroke attribute value.
    pub fn to_svg_fill(&self) -> String {
        if (self.a - 1.0).abs() < 1e-6 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
        }
    }

    /// `#rrggbb` form, dropping alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation between two colors (for colormaps).
    pub fn lerp(a: Color, b: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: (a.r as f64 * (1.0 - t) + b.r as f64 * t).round() as u8,
            g: (a.g as f64 * (1.0 - t) + b.g as f64 * t).round() as u8,
            b: (a.b as f64 * (1.0 - t) + b.b as f64 * t).round() as u8,
            a: a.a * (1.0 - t) + b.a * t,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_fill())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::hex(&s))
    }
}

/// Line stroke pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinePattern {
    /// Continuous stroke.
    #[default]
    Solid,
    /// Long dashes.
    Dashed,
    /// Dot pattern.
    Dotted,
    /// Alternating dash-dot.
    DashDot,
}

/// Data-point marker shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerShape {
    /// Filled circle.
    #[default]
    Circle,
    /// Filled square.
    Square,
    /// Upward triangle.
    Triangle,
    /// Diamond.
    Diamond,
}

/// Cosmetics resolved from a parameter record at booking time.
///
/// Defaults: black solid line of width 2, marker size 0 (profile booking
/// raises the marker size to 1.3), no fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawStyle {
    /// Outline color.
    pub line_color: Color,
    /// Marker color.
    pub marker_color: Color,
    /// Fill color, if the histogram body is filled.
    pub fill_color: Option<Color>,
    /// Outline stroke pattern.
    pub line_pattern: LinePattern,
    /// Marker shape.
    pub marker_shape: MarkerShape,
    /// Outline width in points.
    pub line_width: f64,
    /// Marker radius in points; 0 hides markers.
    pub marker_size: f64,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgb(0, 0, 0),
            marker_color: Color::rgb(0, 0, 0),
            fill_color: None,
            line_pattern: LinePattern::Solid,
            marker_shape: MarkerShape::Circle,
            line_width: 2.0,
            marker_size: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let c = Color::hex("#5790fc");
        assert_eq!((c.r, c.g, c.b), (0x57, 0x90, 0xfc));
        assert_eq!(c.to_hex(), "#5790fc");
    }

    #[test]
    fn hex_malformed_falls_back() {
        let c = Color::hex("zz");
        assert_eq!((c.r, c.g, c.b), (0, 0, 0));
    }

    #[test]
    fn svg_fill_with_alpha() {
        let c = Color::rgb(255, 0, 0).with_alpha(0.5);
        assert_eq!(c.to_svg_fill(), "rgba(255,0,0,0.500)");
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(200, 100, 50);
        assert_eq!(Color::lerp(a, b, 0.0), a);
        assert_eq!(Color::lerp(a, b, 1.0), b);
    }

    #[test]
    fn style_defaults() {
        let s = DrawStyle::default();
        assert_eq!(s.line_width, 2.0);
        assert_eq!(s.marker_size, 0.0);
        assert!(s.fill_color.is_none());
    }
}
