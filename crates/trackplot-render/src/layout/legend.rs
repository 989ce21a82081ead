//! The reusable legend object.

use trackplot_hist::style::Color;

use crate::canvas::Canvas;
use crate::primitives::{LineStyle, MarkerStyle, Style, TextAnchor, TextBaseline, TextStyle};

/// One legend row.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    /// Row label.
    pub label: String,
    /// Swatch color.
    pub color: Color,
    /// Swatch kind.
    pub kind: LegendKind,
}

/// Swatch rendering for a legend row.
#[derive(Debug, Clone)]
pub enum LegendKind {
    /// Filled rectangle.
    FilledRect,
    /// Line sample with an optional dash array.
    Line(Option<String>),
    /// Marker dot.
    Marker,
}

/// A reusable legend: entries plus an explicit NDC rectangle.
///
/// The default placement matches the shared legend of the original
/// plotting scripts (upper right, borderless, transparent).
#[derive(Debug, Clone)]
pub struct Legend {
    /// Rows, drawn top to bottom.
    pub entries: Vec<LegendEntry>,
    /// `(x1, y1, x2, y2)` in NDC, y up.
    pub rect: (f64, f64, f64, f64),
    /// Draw a frame and opaque background.
    pub frame: bool,
    /// Label font size in points.
    pub font_size: f64,
}

impl Default for Legend {
    fn default() -> Self {
        Self { entries: Vec::new(), rect: (0.70, 0.74, 0.96, 0.94), frame: false, font_size: 10.0 }
    }
}

impl Legend {
    /// Empty legend at the default position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn add(&mut self, label: impl Into<String>, color: Color, kind: LegendKind) {
        self.entries.push(LegendEntry { label: label.into(), color, kind });
    }

    /// Drop all rows (reuse across plots).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Reposition to the NDC rectangle `(x1, y1, x2, y2)`, y up.
    pub fn move_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.rect = (x1, y1, x2, y2);
    }

    /// Render onto the canvas. A no-op without entries.
    pub fn draw(&self, canvas: &mut Canvas) {
        if self.entries.is_empty() {
            return;
        }
        let (x1, y1, x2, y2) = self.rect;
        let w = canvas.width;
        let h = canvas.height;
        let left = x1 * w;
        let right = x2 * w;
        let top = (1.0 - y2) * h;
        let bottom = (1.0 - y1) * h;

        if self.frame {
            let bg = Style {
                fill: Some(Color::rgba(255, 255, 255, 0.9)),
                stroke: Some(Color::rgb(120, 120, 120)),
                stroke_width: 0.5,
            };
            canvas.rect(left, top, right - left, bottom - top, &bg);
        }

        let row_h = (bottom - top) / self.entries.len() as f64;
        let swatch_w = 14.0;
        let gap = 5.0;
        let text_style = TextStyle {
            size: self.font_size,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Central,
            ..Default::default()
        };

        for (i, entry) in self.entries.iter().enumerate() {
            let cy = top + (i as f64 + 0.5) * row_h;
            let sx = left + 2.0;
            match &entry.kind {
                LegendKind::FilledRect => {
                    let sh = (self.font_size - 1.0).min(row_h - 2.0).max(2.0);
                    canvas.rect(sx, cy - sh / 2.0, swatch_w, sh, &Style::filled(entry.color));
                }
                LegendKind::Line(dash) => {
                    let ls = LineStyle { color: entry.color, width: 2.0, dash: dash.clone() };
                    canvas.line(sx, cy, sx + swatch_w, cy, &ls);
                }
                LegendKind::Marker => {
                    canvas.marker(
                        sx + swatch_w / 2.0,
                        cy,
                        &MarkerStyle { color: entry.color, size: 3.0, ..Default::default() },
                    );
                }
            }
            canvas.text(sx + swatch_w + gap, cy, &entry.label, &text_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_legend_draws_nothing() {
        let mut canvas = Canvas::new(100.0, 100.0);
        Legend::new().draw(&mut canvas);
        assert!(!canvas.to_svg().contains("<text"));
    }

    #[test]
    fn rows_render_top_to_bottom() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let mut legend = Legend::new();
        legend.add("signal", Color::hex("#e42536"), LegendKind::Line(None));
        legend.add("background", Color::hex("#5790fc"), LegendKind::FilledRect);
        legend.draw(&mut canvas);
        let svg = canvas.to_svg();
        assert!(svg.find("signal").unwrap() < svg.find("background").unwrap());
    }

    #[test]
    fn move_to_updates_rect() {
        let mut legend = Legend::new();
        legend.move_to(0.2, 0.2, 0.5, 0.4);
        assert_eq!(legend.rect, (0.2, 0.2, 0.5, 0.4));
    }
}
