//! 1D histogram drawing.

use trackplot_hist::{Hist1d, Hist1dView};

use crate::canvas::Canvas;
use crate::context::DrawContext;
use crate::label::experiment_label;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::pad::Pad;
use crate::plots::axes_draw::draw_axes;
use crate::plots::{log_low_edge, stats};
use crate::primitives::{LineStyle, Style, TextAnchor, TextStyle};
use crate::{RenderError, Result};

/// Options for 1D draws.
#[derive(Debug, Clone)]
pub struct HistDrawOpts {
    /// Y-axis title; empty keeps the histogram's own.
    pub ytitle: String,
    /// Logarithmic x axis.
    pub logx: bool,
    /// Logarithmic y axis.
    pub logy: bool,
    /// Draw the stat box (for the first view).
    pub stats: bool,
    /// Overlay numeric value labels on the first view's bins.
    pub text: bool,
}

impl Default for HistDrawOpts {
    fn default() -> Self {
        Self { ytitle: "Entries".into(), logx: false, logy: false, stats: true, text: false }
    }
}

impl HistDrawOpts {
    /// Convention for multi-view overlays: stat box off.
    pub fn overlay() -> Self {
        Self { stats: false, ..Default::default() }
    }
}

/// Draw a single 1D view.
pub fn draw_hist(
    pad: &mut Pad,
    ctx: &DrawContext,
    view: &Hist1dView,
    opts: &HistDrawOpts,
) -> Result<()> {
    draw_hists(pad, ctx, std::slice::from_ref(view), opts)
}

/// Draw a collection of 1D views on shared axes: the first view sets the
/// frame and headroom (maximum × 14 on a log scale, × 1.4 with the
/// minimum floored at 0 otherwise); the rest overlay without redrawing
/// axes. The context's legend is rendered when it has entries, and the
/// experiment label finishes the plot.
pub fn draw_hists(
    pad: &mut Pad,
    ctx: &DrawContext,
    views: &[Hist1dView],
    opts: &HistDrawOpts,
) -> Result<()> {
    let first = views.first().ok_or(RenderError::EmptyDraw("histogram views"))?;
    pad.set_log_x(opts.logx);
    pad.set_log_y(opts.logy);

    let config = pad.config().clone();
    let area = pad.plot_area();
    let h = &first.hist;

    let x_axis = if opts.logx {
        Axis::log(log_low_edge(h.xlow, h.xup), h.xup)
    } else {
        Axis::linear(h.xlow, h.xup, config.axes.divisions)
    }
    .with_label(&h.xtitle);

    let raw_max = h.maximum().max(0.0);
    let ytitle = if opts.ytitle.is_empty() { h.ytitle.clone() } else { opts.ytitle.clone() };
    let y_axis = if opts.logy {
        let floor = views
            .iter()
            .filter_map(|v| v.hist.minimum_positive())
            .fold(f64::INFINITY, f64::min);
        let lo = if floor.is_finite() { floor * 0.5 } else { 0.1 };
        let hi = (raw_max * 14.0).max(lo * 100.0);
        Axis::log(lo, hi)
    } else {
        Axis::linear(0.0, (raw_max * 1.4).max(1.0), config.axes.divisions)
    }
    .with_label(ytitle);

    {
        let canvas = pad.canvas_mut();
        draw_axes(canvas, &area, &x_axis, &y_axis, &config);
        for view in views {
            draw_step_outline(canvas, &area, &x_axis, &y_axis, &view.hist, &view.style);
        }
        if opts.text {
            value_labels(canvas, &area, &x_axis, &y_axis, h, config.font.size);
        }
    }

    pad.set_frame(area, x_axis, y_axis);
    if opts.stats {
        stats::draw_stats_box(pad, &config.stats, &stats::hist1d_rows(&first.hist));
    }
    ctx.legend.draw(pad.canvas_mut());
    experiment_label(pad);
    Ok(())
}

/// Step outline (and optional fill) of one histogram.
fn draw_step_outline(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    h: &Hist1d,
    style: &trackplot_hist::DrawStyle,
) {
    let base = if y_axis.log { y_axis.min } else { y_axis.min.max(0.0) };
    let clamp = |py: f64| py.clamp(area.top, area.bottom());
    let base_py = clamp(y_axis.data_to_pixel(base, area.bottom(), area.top));

    let mut points = Vec::with_capacity(2 * h.nbins + 2);
    points.push((x_axis.data_to_pixel(h.bin_edge(0), area.left, area.right()), base_py));
    for i in 0..h.nbins {
        let py = clamp(y_axis.data_to_pixel(h.content[i], area.bottom(), area.top));
        points.push((x_axis.data_to_pixel(h.bin_edge(i), area.left, area.right()), py));
        points.push((x_axis.data_to_pixel(h.bin_edge(i + 1), area.left, area.right()), py));
    }
    points.push((x_axis.data_to_pixel(h.bin_edge(h.nbins), area.left, area.right()), base_py));

    if let Some(fill) = style.fill_color {
        canvas.polygon(&points, &Style::filled(fill));
    }
    canvas.polyline(
        &points,
        &LineStyle::patterned(style.line_color, style.line_width, style.line_pattern),
    );
}

/// Numeric value labels above each non-empty bin.
fn value_labels(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    h: &Hist1d,
    font_size: f64,
) {
    let style = TextStyle { size: font_size, anchor: TextAnchor::Middle, ..Default::default() };
    for i in 0..h.nbins {
        if h.content[i] == 0.0 {
            continue;
        }
        let px = x_axis.data_to_pixel(h.bin_center(i), area.left, area.right());
        let py = y_axis.data_to_pixel(h.content[i], area.bottom(), area.top);
        let py = py.clamp(area.top + font_size, area.bottom());
        canvas.text(px, py - 3.0, &stats::format_stat(h.content[i]), &style);
    }
}

#[cfg(test)]
mod tests {
    use trackplot_hist::{Booker, HistParams};

    use super::*;

    fn booked_view(fills: &[f64]) -> Hist1dView {
        let mut views = Booker::new()
            .book(&[HistParams::new("h", "x", "", "x value", 10, 0.0, 10.0)])
            .unwrap();
        for &x in fills {
            views[0].hist.fill(x);
        }
        views.remove(0)
    }

    #[test]
    fn empty_views_is_an_error() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        let err = draw_hists(&mut pad, &ctx, &[], &HistDrawOpts::default()).unwrap_err();
        assert!(matches!(err, RenderError::EmptyDraw(_)));
    }

    #[test]
    fn draw_emits_frame_and_label() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        let view = booked_view(&[1.0, 2.0, 2.5]);
        draw_hist(&mut pad, &ctx, &view, &HistDrawOpts::default()).unwrap();
        let svg = pad.to_svg();
        assert!(svg.contains("polyline"));
        assert!(svg.contains(">CMS<"));
        assert!(svg.contains("x value"));
        assert!(svg.contains("Entries"));
    }

    #[test]
    fn linear_headroom_is_1p4() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        let view = booked_view(&[5.0, 5.0, 5.0, 5.0]); // max bin = 4
        draw_hist(&mut pad, &ctx, &view, &HistDrawOpts::default()).unwrap();
        // y max = 4 * 1.4 = 5.6; the pixel of 5.6 is the frame top.
        let top = pad.y_to_pixel(5.6).unwrap();
        assert!((top - pad.area().unwrap().top).abs() < 1e-6);
    }

    #[test]
    fn log_headroom_is_14x() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        let view = booked_view(&[5.0, 5.0, 5.0, 5.0, 1.0]);
        let opts = HistDrawOpts { logy: true, ..Default::default() };
        draw_hist(&mut pad, &ctx, &view, &opts).unwrap();
        assert!(pad.log_y());
        let top = pad.y_to_pixel(4.0 * 14.0).unwrap();
        assert!((top - pad.area().unwrap().top).abs() < 1e-6);
    }

    #[test]
    fn overlay_draws_every_view() {
        let mut booker = Booker::new();
        let mut views = booker
            .book(&[
                HistParams::new("a", "x", "", "x", 5, 0.0, 5.0),
                HistParams::new("b", "x", "", "x", 5, 0.0, 5.0),
            ])
            .unwrap();
        views[0].hist.fill(1.0);
        views[1].hist.fill(3.0);
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        draw_hists(&mut pad, &ctx, &views, &HistDrawOpts::overlay()).unwrap();
        let svg = pad.to_svg();
        assert_eq!(svg.matches("<polyline").count(), 2);
    }

    #[test]
    fn value_labels_when_requested() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        let view = booked_view(&[2.5, 2.5, 2.5]);
        let opts = HistDrawOpts { text: true, stats: false, ..Default::default() };
        draw_hist(&mut pad, &ctx, &view, &opts).unwrap();
        assert!(pad.to_svg().contains(">3<"));
    }
}
