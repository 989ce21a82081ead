//! 2D histogram drawing: colored cells with an optional palette bar.

use trackplot_hist::Hist2dView;

use crate::color::heat;
use crate::config::StatsConfig;
use crate::context::DrawContext;
use crate::label::experiment_label;
use crate::layout::axes::Axis;
use crate::pad::Pad;
use crate::plots::axes_draw::draw_axes;
use crate::plots::{log_low_edge, stats};
use crate::primitives::{Style, TextAnchor, TextBaseline, TextStyle};
use crate::{RenderError, Result};

/// Right margin used for 2D plots so the palette bar fits.
const RIGHT_MARGIN_2D: f64 = 0.10;

/// Palette bar strip in NDC, as placed by the shared convention.
const PALETTE_NDC: (f64, f64, f64, f64) = (0.91, 0.13, 0.95, 0.95);

/// Palette label size as a fraction of the canvas height.
const PALETTE_LABEL_SIZE: f64 = 0.024;

/// Stat-box inset for 2D plots (the default spot would cover the palette).
const STATS_2D: StatsConfig = StatsConfig { x2: 0.88, y2: 0.93, w: 0.24, h: 0.23 };

/// Options for 2D draws.
#[derive(Debug, Clone)]
pub struct Hist2dDrawOpts {
    /// Logarithmic x axis.
    pub logx: bool,
    /// Logarithmic y axis.
    pub logy: bool,
    /// Logarithmic color scale.
    pub logz: bool,
    /// Draw the palette bar.
    pub palette: bool,
    /// Draw the stat box.
    pub stats: bool,
}

impl Default for Hist2dDrawOpts {
    fn default() -> Self {
        Self { logx: false, logy: false, logz: false, palette: true, stats: true }
    }
}

/// Draw a 2D view as colored cells. Widens the right margin for the
/// palette bar and pins the palette and stat box to fixed normalized
/// coordinates so they never cover the frame.
pub fn draw_hist2d(
    pad: &mut Pad,
    ctx: &DrawContext,
    view: &Hist2dView,
    opts: &Hist2dDrawOpts,
) -> Result<()> {
    let h = &view.hist;
    if h.content.is_empty() {
        return Err(RenderError::EmptyDraw("2D view with no cells"));
    }
    pad.set_log_x(opts.logx);
    pad.set_log_y(opts.logy);
    pad.set_log_z(opts.logz);
    pad.set_right_margin(RIGHT_MARGIN_2D);

    let config = pad.config().clone();
    let area = pad.plot_area();

    let x_axis = if opts.logx {
        Axis::log(log_low_edge(h.xlow, h.xup), h.xup)
    } else {
        Axis::linear(h.xlow, h.xup, config.axes.divisions)
    }
    .with_label(&h.xtitle);
    let y_axis = if opts.logy {
        Axis::log(log_low_edge(h.ylow, h.yup), h.yup)
    } else {
        Axis::linear(h.ylow, h.yup, config.axes.divisions)
    }
    .with_label(&h.ytitle);

    let z_max = h.maximum().max(0.0);
    let z_floor = h.minimum_positive().unwrap_or(1.0);
    let z_frac = |v: f64| -> f64 {
        if z_max <= 0.0 {
            return 0.0;
        }
        if opts.logz {
            let lo = (z_floor * 0.5).ln();
            let hi = z_max.ln();
            if hi <= lo { 1.0 } else { ((v.max(z_floor * 0.5)).ln() - lo) / (hi - lo) }
        } else {
            v / z_max
        }
    };

    {
        let canvas = pad.canvas_mut();
        draw_axes(canvas, &area, &x_axis, &y_axis, &config);
        for iy in 0..h.nbinsy {
            for ix in 0..h.nbinsx {
                let v = h.bin_content(ix, iy);
                if v <= 0.0 {
                    continue;
                }
                let x_lo = h.xlow + ix as f64 * h.bin_width_x();
                let x_hi = x_lo + h.bin_width_x();
                let y_lo = h.ylow + iy as f64 * h.bin_width_y();
                let y_hi = y_lo + h.bin_width_y();
                let px_lo = x_axis.data_to_pixel(x_lo, area.left, area.right());
                let px_hi = x_axis.data_to_pixel(x_hi, area.left, area.right());
                let py_lo = y_axis.data_to_pixel(y_lo, area.bottom(), area.top);
                let py_hi = y_axis.data_to_pixel(y_hi, area.bottom(), area.top);
                canvas.rect(
                    px_lo,
                    py_hi,
                    px_hi - px_lo,
                    py_lo - py_hi,
                    &Style::filled(heat(z_frac(v))),
                );
            }
        }
    }

    if opts.palette {
        draw_palette_bar(pad, z_max, z_floor, opts.logz);
    }
    pad.set_frame(area, x_axis, y_axis);
    if opts.stats {
        stats::draw_stats_box(pad, &STATS_2D, &stats::hist2d_rows(&view.hist));
    }
    ctx.legend.draw(pad.canvas_mut());
    experiment_label(pad);
    Ok(())
}

/// Vertical color-scale bar at the fixed NDC strip.
fn draw_palette_bar(pad: &mut Pad, z_max: f64, z_floor: f64, logz: bool) {
    let (x1, y1, x2, y2) = PALETTE_NDC;
    let left = pad.ndc_x(x1);
    let right = pad.ndc_x(x2);
    let top = pad.ndc_y(y2);
    let bottom = pad.ndc_y(y1);
    let label_size = PALETTE_LABEL_SIZE * pad.height();
    let canvas = pad.canvas_mut();

    let steps = 64;
    let step_h = (bottom - top) / steps as f64;
    for i in 0..steps {
        // top of the bar is the maximum
        let t = 1.0 - i as f64 / (steps - 1) as f64;
        let y = top + i as f64 * step_h;
        canvas.rect(left, y, right - left, step_h + 0.3, &Style::filled(heat(t)));
    }

    let label_style = TextStyle {
        size: label_size,
        anchor: TextAnchor::Start,
        baseline: TextBaseline::Central,
        ..Default::default()
    };
    let n_labels = 5;
    for i in 0..n_labels {
        let frac = i as f64 / (n_labels - 1) as f64; // 0 at bottom
        let value = if logz {
            let lo = z_floor * 0.5;
            lo * (z_max / lo).powf(frac)
        } else {
            frac * z_max
        };
        let y = bottom - frac * (bottom - top);
        canvas.text(right + 2.0, y, &stats::format_stat(value), &label_style);
    }
}

#[cfg(test)]
mod tests {
    use trackplot_hist::{Booker, Hist2dParams};

    use super::*;

    fn booked_2d() -> Hist2dView {
        let mut views = Booker::new()
            .book_2d(&[Hist2dParams::new(
                "occ", "phi", "", "#phi", 8, 0.0, 8.0, "eta", "#eta", 4, 0.0, 4.0,
            )])
            .unwrap();
        views[0].hist.fill(0.5, 0.5);
        views[0].hist.fill(0.5, 0.5);
        views[0].hist.fill(3.5, 2.5);
        views.remove(0)
    }

    #[test]
    fn cells_palette_and_stats_render() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        draw_hist2d(&mut pad, &ctx, &booked_2d(), &Hist2dDrawOpts::default()).unwrap();
        let svg = pad.to_svg();
        // 2 occupied cells + 64 palette steps + stat box + background
        assert!(svg.matches("<rect").count() >= 2 + 64 + 1 + 1);
        assert!(svg.contains("Mean x"));
        assert!(svg.contains(">CMS<"));
    }

    #[test]
    fn right_margin_widened() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        draw_hist2d(&mut pad, &ctx, &booked_2d(), &Hist2dDrawOpts::default()).unwrap();
        assert!((pad.margins().1 - RIGHT_MARGIN_2D).abs() < 1e-12);
    }

    #[test]
    fn palette_can_be_disabled() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        let opts = Hist2dDrawOpts { palette: false, stats: false, ..Default::default() };
        draw_hist2d(&mut pad, &ctx, &booked_2d(), &opts).unwrap();
        let svg = pad.to_svg();
        // only the 2 occupied cells and the background rect remain
        assert!(svg.matches("<rect").count() < 10);
    }

    #[test]
    fn logz_draw_succeeds() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        let opts = Hist2dDrawOpts { logz: true, ..Default::default() };
        draw_hist2d(&mut pad, &ctx, &booked_2d(), &opts).unwrap();
        assert!(pad.log_z());
    }
}
