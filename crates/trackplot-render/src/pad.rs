//! The pad: drawing surface state (canvas, margins, log flags, frame).

use crate::canvas::Canvas;
use crate::config::PlotConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;

#[derive(Debug, Clone)]
struct Frame {
    area: PlotArea,
    x_axis: Axis,
    y_axis: Axis,
}

/// Drawing surface: owns the canvas plus margin, log-scale and frame
/// state. One pad is reused across plots; [`clear`](Pad::clear) resets it.
pub struct Pad {
    config: PlotConfig,
    canvas: Canvas,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    logx: bool,
    logy: bool,
    logz: bool,
    frame: Option<Frame>,
}

impl Pad {
    /// New pad sized and margined per the configuration.
    pub fn new(config: PlotConfig) -> Self {
        let canvas = Canvas::new(config.figure.width, config.figure.height);
        let m = &config.margins;
        let (left, right, top, bottom) = (m.left, m.right, m.top, m.bottom);
        Self { config, canvas, left, right, top, bottom, logx: false, logy: false, logz: false, frame: None }
    }

    /// Pad with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PlotConfig::default())
    }

    /// Active configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Canvas width in points.
    pub fn width(&self) -> f64 {
        self.canvas.width
    }

    /// Canvas height in points.
    pub fn height(&self) -> f64 {
        self.canvas.height
    }

    /// Reset for the next plot: drop drawn content and the frame, restore
    /// configured margins, switch log scales off.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.frame = None;
        let m = &self.config.margins;
        self.left = m.left;
        self.right = m.right;
        self.top = m.top;
        self.bottom = m.bottom;
        self.logx = false;
        self.logy = false;
        self.logz = false;
    }

    /// Set the log-x flag.
    pub fn set_log_x(&mut self, on: bool) {
        self.logx = on;
    }

    /// Set the log-y flag.
    pub fn set_log_y(&mut self, on: bool) {
        self.logy = on;
    }

    /// Set the log-z flag (2D color scale).
    pub fn set_log_z(&mut self, on: bool) {
        self.logz = on;
    }

    /// Log-x flag.
    pub fn log_x(&self) -> bool {
        self.logx
    }

    /// Log-y flag.
    pub fn log_y(&self) -> bool {
        self.logy
    }

    /// Log-z flag.
    pub fn log_z(&self) -> bool {
        self.logz
    }

    /// Widen or narrow the right margin (fraction of the canvas width).
    pub fn set_right_margin(&mut self, fraction: f64) {
        self.right = fraction;
    }

    /// Current margins `(left, right, top, bottom)` as fractions.
    pub fn margins(&self) -> (f64, f64, f64, f64) {
        (self.left, self.right, self.top, self.bottom)
    }

    /// Plot area inside the current margins.
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::from_margins(
            self.canvas.width,
            self.canvas.height,
            self.left,
            self.right,
            self.top,
            self.bottom,
        )
    }

    /// NDC x (0..1, left to right) to canvas points.
    pub fn ndc_x(&self, x: f64) -> f64 {
        x * self.canvas.width
    }

    /// NDC y (0..1, bottom to top) to canvas points (y down).
    pub fn ndc_y(&self, y: f64) -> f64 {
        (1.0 - y) * self.canvas.height
    }

    pub(crate) fn set_frame(&mut self, area: PlotArea, x_axis: Axis, y_axis: Axis) {
        self.frame = Some(Frame { area, x_axis, y_axis });
    }

    /// Area of the last drawn frame, if any.
    pub fn area(&self) -> Option<PlotArea> {
        self.frame.as_ref().map(|f| f.area)
    }

    /// Pixel x of a data value on the last frame's x axis.
    pub fn x_to_pixel(&self, x: f64) -> Option<f64> {
        self.frame.as_ref().map(|f| f.x_axis.data_to_pixel(x, f.area.left, f.area.right()))
    }

    /// Pixel y of a data value on the last frame's y axis.
    pub fn y_to_pixel(&self, y: f64) -> Option<f64> {
        self.frame.as_ref().map(|f| f.y_axis.data_to_pixel(y, f.area.bottom(), f.area.top))
    }

    /// Mutable canvas access for draw routines.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Canvas access.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Re-stroke the frame border over drawn content (bars painted over
    /// the axis lines otherwise leave a ragged edge in the export).
    pub fn redraw_axis(&mut self) {
        if let Some(frame) = self.frame.clone() {
            crate::plots::axes_draw::stroke_frame(&mut self.canvas, &frame.area);
        }
    }

    /// Serialize the canvas to SVG.
    pub fn to_svg(&self) -> String {
        self.canvas.to_svg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_mapping() {
        let pad = Pad::with_defaults();
        assert!((pad.ndc_x(0.5) - pad.width() / 2.0).abs() < 1e-9);
        assert!((pad.ndc_y(1.0) - 0.0).abs() < 1e-9);
        assert!((pad.ndc_y(0.0) - pad.height()).abs() < 1e-9);
    }

    #[test]
    fn clear_resets_margins_and_logs() {
        let mut pad = Pad::with_defaults();
        pad.set_right_margin(0.10);
        pad.set_log_y(true);
        pad.clear();
        assert_eq!(pad.margins().1, pad.config().margins.right);
        assert!(!pad.log_y());
    }

    #[test]
    fn no_frame_before_drawing() {
        let pad = Pad::with_defaults();
        assert!(pad.area().is_none());
        assert!(pad.y_to_pixel(1.0).is_none());
    }
}
