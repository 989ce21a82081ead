//! Immediate-mode SVG canvas. Coordinates in points (1pt = 1/72"),
//! origin at the top-left, y growing downwards.

use std::fmt::Write as FmtWrite;

use trackplot_hist::style::MarkerShape;

use crate::primitives::{FontStyle, FontWeight, LineStyle, MarkerStyle, Style, TextStyle};
use crate::text::{TextMetrics, measure_styled};

/// A drawing element held until serialization.
#[derive(Debug, Clone)]
enum Element {
    Rect { x: f64, y: f64, w: f64, h: f64, style: Style },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, style: LineStyle },
    Poly { points: Vec<(f64, f64)>, style: Style, dash: Option<String>, close: bool },
    Circle { cx: f64, cy: f64, r: f64, style: Style },
    Text { x: f64, y: f64, content: String, style: TextStyle, rotate: Option<f64> },
}

/// Deferred-element SVG canvas.
pub struct Canvas {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
    elements: Vec<Element>,
}

impl Canvas {
    /// New blank canvas.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, elements: Vec::new() }
    }

    /// Drop all elements, keeping the size.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Axis-aligned rectangle.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style) {
        self.elements.push(Element::Rect { x, y, w, h, style: style.clone() });
    }

    /// Straight line segment.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        self.elements.push(Element::Line { x1, y1, x2, y2, style: style.clone() });
    }

    /// Open polyline, stroked with `style`.
    pub fn polyline(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        self.elements.push(Element::Poly {
            points: points.to_vec(),
            style: Style { stroke: Some(style.color), stroke_width: style.width, fill: None },
            dash: style.dash.clone(),
            close: false,
        });
    }

    /// Closed polygon.
    pub fn polygon(&mut self, points: &[(f64, f64)], style: &Style) {
        self.elements.push(Element::Poly {
            points: points.to_vec(),
            style: style.clone(),
            dash: None,
            close: true,
        });
    }

    /// Circle.
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, style: &Style) {
        self.elements.push(Element::Circle { cx, cy, r, style: style.clone() });
    }

    /// Text run.
    pub fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        self.elements.push(Element::Text {
            x,
            y,
            content: content.to_string(),
            style: style.clone(),
            rotate: None,
        });
    }

    /// Text run rotated by `angle` degrees around its anchor.
    pub fn text_rotated(&mut self, x: f64, y: f64, content: &str, style: &TextStyle, angle: f64) {
        self.elements.push(Element::Text {
            x,
            y,
            content: content.to_string(),
            style: style.clone(),
            rotate: Some(angle),
        });
    }

    /// Vertical error bar with horizontal caps (`cap_width` 0 omits caps).
    pub fn error_bar(&mut self, x: f64, y_lo: f64, y_hi: f64, cap_width: f64, style: &LineStyle) {
        self.line(x, y_lo, x, y_hi, style);
        if cap_width > 0.0 {
            let half = cap_width / 2.0;
            self.line(x - half, y_lo, x + half, y_lo, style);
            self.line(x - half, y_hi, x + half, y_hi, style);
        }
    }

    /// Data-point marker.
    pub fn marker(&mut self, x: f64, y: f64, marker: &MarkerStyle) {
        let s = marker.size;
        if s <= 0.0 {
            return;
        }
        let style = Style::filled(marker.color);
        match marker.shape {
            MarkerShape::Circle => self.circle(x, y, s, &style),
            MarkerShape::Square => self.rect(x - s, y - s, 2.0 * s, 2.0 * s, &style),
            MarkerShape::Triangle => {
                self.polygon(&[(x, y - s), (x + s, y + s), (x - s, y + s)], &style)
            }
            MarkerShape::Diamond => {
                self.polygon(&[(x, y - s), (x + s, y), (x, y + s), (x - s, y)], &style)
            }
        }
    }

    /// Estimate the extent of a text run under `style`.
    pub fn measure_text(&self, content: &str, style: &TextStyle) -> TextMetrics {
        measure_styled(content, style)
    }

    /// Serialize to an SVG document with a white background.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(16 * 1024);
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )
        .unwrap();
        writeln!(out, r#"<rect width="{}" height="{}" fill="white" />"#, self.width, self.height)
            .unwrap();
        for elem in &self.elements {
            write_element(&mut out, elem);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_element(out: &mut String, elem: &Element) {
    match elem {
        Element::Rect { x, y, w, h, style } => {
            write!(out, r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}""#).unwrap();
            write_style(out, style);
            out.push_str(" />\n");
        }
        Element::Line { x1, y1, x2, y2, style } => {
            write!(out, r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}""#).unwrap();
            write_line_style(out, style);
            out.push_str(" />\n");
        }
        Element::Poly { points, style, dash, close } => {
            let tag = if *close { "polygon" } else { "polyline" };
            write!(out, "<{tag} points=\"").unwrap();
            for (i, (x, y)) in points.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write!(out, "{x:.2},{y:.2}").unwrap();
            }
            out.push('"');
            write_style(out, style);
            if let Some(dash) = dash {
                write!(out, r#" stroke-dasharray="{dash}""#).unwrap();
            }
            out.push_str(" />\n");
        }
        Element::Circle { cx, cy, r, style } => {
            write!(out, r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}""#).unwrap();
            write_style(out, style);
            out.push_str(" />\n");
        }
        Element::Text { x, y, content, style, rotate } => {
            write!(out, r#"<text x="{x:.2}" y="{y:.2}""#).unwrap();
            write!(
                out,
                r#" font-family="Helvetica, Arial, sans-serif" font-size="{:.1}""#,
                style.size
            )
            .unwrap();
            write!(out, r#" fill="{}""#, style.color.to_svg_fill()).unwrap();
            write!(out, r#" text-anchor="{}""#, style.anchor.as_str()).unwrap();
            write!(out, r#" dominant-baseline="{}""#, style.baseline.as_str()).unwrap();
            if style.weight == FontWeight::Bold {
                write!(out, r#" font-weight="bold""#).unwrap();
            }
            if style.style == FontStyle::Italic {
                write!(out, r#" font-style="italic""#).unwrap();
            }
            if let Some(angle) = rotate {
                write!(out, r#" transform="rotate({angle:.1},{x:.2},{y:.2})""#).unwrap();
            }
            out.push('>');
            for ch in content.chars() {
                match ch {
                    '<' => out.push_str("&lt;"),
                    '>' => out.push_str("&gt;"),
                    '&' => out.push_str("&amp;"),
                    '"' => out.push_str("&quot;"),
                    _ => out.push(ch),
                }
            }
            out.push_str("</text>\n");
        }
    }
}

fn write_style(out: &mut String, style: &Style) {
    match &style.fill {
        Some(fill) => write!(out, r#" fill="{}""#, fill.to_svg_fill()).unwrap(),
        None => write!(out, r#" fill="none""#).unwrap(),
    }
    if let Some(stroke) = &style.stroke {
        write!(out, r#" stroke="{}""#, stroke.to_svg_fill()).unwrap();
        write!(out, r#" stroke-width="{:.2}""#, style.stroke_width).unwrap();
    }
}

fn write_line_style(out: &mut String, style: &LineStyle) {
    write!(out, r#" stroke="{}""#, style.color.to_svg_fill()).unwrap();
    write!(out, r#" stroke-width="{:.2}""#, style.width).unwrap();
    if let Some(dash) = &style.dash {
        write!(out, r#" stroke-dasharray="{dash}""#).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use trackplot_hist::style::Color;

    use super::*;

    #[test]
    fn empty_canvas_serializes() {
        let c = Canvas::new(100.0, 50.0);
        let svg = c.to_svg();
        assert!(svg.contains("width=\"100\""));
        assert!(svg.contains("height=\"50\""));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn rect_and_fill() {
        let mut c = Canvas::new(200.0, 100.0);
        c.rect(10.0, 20.0, 50.0, 30.0, &Style::filled(Color::hex("#e42536")));
        let svg = c.to_svg();
        assert!(svg.contains(r##"fill="#e42536""##));
        assert!(svg.contains("width=\"50.00\""));
    }

    #[test]
    fn text_escapes_markup() {
        let mut c = Canvas::new(100.0, 100.0);
        c.text(5.0, 5.0, "a < b && c", &TextStyle::default());
        let svg = c.to_svg();
        assert!(svg.contains("a &lt; b &amp;&amp; c"));
    }

    #[test]
    fn dashed_line_emits_dasharray() {
        let mut c = Canvas::new(100.0, 100.0);
        c.line(0.0, 0.0, 10.0, 10.0, &LineStyle::dashed(Color::rgb(0, 0, 0), 1.0));
        assert!(c.to_svg().contains("stroke-dasharray=\"6 3\""));
    }

    #[test]
    fn zero_size_marker_hidden() {
        let mut c = Canvas::new(100.0, 100.0);
        c.marker(10.0, 10.0, &MarkerStyle { size: 0.0, ..Default::default() });
        assert!(!c.to_svg().contains("circle"));
    }

    #[test]
    fn clear_drops_elements() {
        let mut c = Canvas::new(100.0, 100.0);
        c.circle(1.0, 1.0, 5.0, &Style::filled(Color::rgb(0, 0, 0)));
        c.clear();
        assert!(!c.to_svg().contains("circle"));
    }
}
