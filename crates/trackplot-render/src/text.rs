//! Approximate text measurement.
//!
//! No font binaries ship with this crate, so widths are estimated from
//! per-class advance fractions of a generic sans face. Good enough for
//! margin and legend sizing; rasterization resolves real fonts from the
//! system at export time.

use crate::primitives::{FontWeight, TextStyle};

/// Measured extent of a text run, in points.
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    /// Advance width.
    pub width: f64,
    /// Line height.
    pub height: f64,
    /// Ascent above the baseline.
    pub ascent: f64,
}

/// Advance width of one character as a fraction of the font size.
fn advance_fraction(ch: char) -> f64 {
    match ch {
        ' ' => 0.28,
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.24,
        'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '{' | '}' | '/' => 0.34,
        'm' | 'w' => 0.82,
        'M' | 'W' => 0.92,
        'I' | 'J' => 0.30,
        c if c.is_ascii_uppercase() => 0.70,
        c if c.is_ascii_digit() => 0.55,
        '#' | '@' | '%' => 0.85,
        '_' | '-' | '=' | '+' | '<' | '>' => 0.58,
        _ => 0.52,
    }
}

/// Estimate the extent of `text` at `size_pt` points.
pub fn measure_text(text: &str, size_pt: f64, weight: FontWeight) -> TextMetrics {
    let mut width: f64 = text.chars().map(advance_fraction).sum();
    if weight == FontWeight::Bold {
        width *= 1.05;
    }
    TextMetrics { width: width * size_pt, height: size_pt * 1.18, ascent: size_pt * 0.78 }
}

/// Estimate the extent of `text` under a [`TextStyle`].
pub fn measure_styled(text: &str, style: &TextStyle) -> TextMetrics {
    measure_text(text, style.size, style.weight)
}
