//! The draw context: reusable cosmetic objects passed explicitly into
//! draw calls instead of living as process-wide singletons.

use trackplot_hist::style::{Color, LinePattern};

use crate::pad::Pad;
use crate::layout::legend::Legend;
use crate::primitives::LineStyle;

/// Reusable reference line (e.g. an expectation marker across the frame).
#[derive(Debug, Clone)]
pub struct RefLine {
    /// Stroke color.
    pub color: Color,
    /// Stroke pattern.
    pub pattern: LinePattern,
    /// Stroke width in points.
    pub width: f64,
}

impl Default for RefLine {
    fn default() -> Self {
        Self { color: Color::rgb(110, 110, 110), pattern: LinePattern::Dashed, width: 1.0 }
    }
}

impl RefLine {
    /// Draw a horizontal line across the current frame at data value `y`.
    /// A no-op before the first frame is drawn.
    pub fn horizontal(&self, pad: &mut Pad, y: f64) {
        let (Some(area), Some(py)) = (pad.area(), pad.y_to_pixel(y)) else { return };
        let style = LineStyle::patterned(self.color, self.width, self.pattern);
        pad.canvas_mut().line(area.left, py, area.right(), py, &style);
    }

    /// Draw a vertical line across the current frame at data value `x`.
    /// A no-op before the first frame is drawn.
    pub fn vertical(&self, pad: &mut Pad, x: f64) {
        let (Some(area), Some(px)) = (pad.area(), pad.x_to_pixel(x)) else { return };
        let style = LineStyle::patterned(self.color, self.width, self.pattern);
        pad.canvas_mut().line(px, area.top, px, area.bottom(), &style);
    }
}

/// Reusable cosmetic objects for a plotting session: one legend and one
/// reference line, reused across draw calls.
#[derive(Debug, Clone, Default)]
pub struct DrawContext {
    /// The shared legend.
    pub legend: Legend,
    /// The shared reference line.
    pub line: RefLine,
}

impl DrawContext {
    /// Fresh context with default cosmetics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reposition the legend to the NDC rectangle `(x1, y1, x2, y2)`.
    pub fn move_legend(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.legend.move_to(x1, y1, x2, y2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_legend_forwards() {
        let mut ctx = DrawContext::new();
        ctx.move_legend(0.1, 0.2, 0.3, 0.4);
        assert_eq!(ctx.legend.rect, (0.1, 0.2, 0.3, 0.4));
    }
}
