//! Shape, line, text and marker styles used by the canvas.

use trackplot_hist::style::{Color, LinePattern, MarkerShape};

/// Fill + stroke style for rectangles and polygons.
#[derive(Debug, Clone)]
pub struct Style {
    /// Fill color; `None` leaves the shape unfilled.
    pub fill: Option<Color>,
    /// Stroke color; `None` draws no outline.
    pub stroke: Option<Color>,
    /// Stroke width in points.
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self { fill: None, stroke: None, stroke_width: 1.0 }
    }
}

impl Style {
    /// Filled shape, no outline.
    pub fn filled(color: Color) -> Self {
        Self { fill: Some(color), ..Default::default() }
    }

    /// Outlined shape, no fill.
    pub fn stroked(color: Color, width: f64) -> Self {
        Self { stroke: Some(color), stroke_width: width, ..Default::default() }
    }
}

/// Line style.
#[derive(Debug, Clone)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in points.
    pub width: f64,
    /// SVG dash array; `None` is solid.
    pub dash: Option<String>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { color: Color::rgb(0, 0, 0), width: 1.0, dash: None }
    }
}

impl LineStyle {
    /// Continuous line.
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: None }
    }

    /// Dashed line.
    pub fn dashed(color: Color, width: f64) -> Self {
        Self { color, width, dash: Some("6 3".into()) }
    }

    /// Line with the dash array matching a data-side pattern.
    pub fn patterned(color: Color, width: f64, pattern: LinePattern) -> Self {
        let dash = match pattern {
            LinePattern::Solid => None,
            LinePattern::Dashed => Some("6 3".into()),
            LinePattern::Dotted => Some("2 2".into()),
            LinePattern::DashDot => Some("6 3 2 3".into()),
        };
        Self { color, width, dash }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Regular,
    /// Bold weight.
    Bold,
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic.
    Italic,
}

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Anchor at the start of the run.
    #[default]
    Start,
    /// Anchor at the middle.
    Middle,
    /// Anchor at the end.
    End,
}

impl TextAnchor {
    /// SVG attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Vertical text baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    /// Alphabetic baseline.
    #[default]
    Alphabetic,
    /// Centered on the glyph box.
    Central,
    /// Hanging from the top.
    Hanging,
}

impl TextBaseline {
    /// SVG attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Alphabetic => "auto",
            TextBaseline::Central => "central",
            TextBaseline::Hanging => "hanging",
        }
    }
}

/// Text style.
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f64,
    /// Text color.
    pub color: Color,
    /// Weight.
    pub weight: FontWeight,
    /// Slant.
    pub style: FontStyle,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 10.0,
            color: Color::rgb(0, 0, 0),
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
        }
    }
}

/// Marker style for data points.
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    /// Shape.
    pub shape: MarkerShape,
    /// Radius in points.
    pub size: f64,
    /// Color.
    pub color: Color,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self { shape: MarkerShape::Circle, size: 3.0, color: Color::rgb(0, 0, 0) }
    }
}
