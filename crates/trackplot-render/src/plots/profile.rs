//! Profile histogram drawing (markers with error bars).

use trackplot_hist::ProfileView;

use crate::context::DrawContext;
use crate::label::experiment_label;
use crate::layout::axes::Axis;
use crate::pad::Pad;
use crate::plots::axes_draw::draw_axes;
use crate::plots::{log_low_edge, stats};
use crate::primitives::{LineStyle, MarkerStyle};
use crate::{RenderError, Result};

/// Options for profile draws.
#[derive(Debug, Clone)]
pub struct ProfileDrawOpts {
    /// Y-axis title; empty keeps the profile's own.
    pub ytitle: String,
    /// Logarithmic x axis.
    pub logx: bool,
    /// Logarithmic y axis.
    pub logy: bool,
    /// Explicit y maximum, applied after the headroom multiplier.
    pub ymax: Option<f64>,
    /// Draw the stat box (for the first view).
    pub stats: bool,
}

impl Default for ProfileDrawOpts {
    fn default() -> Self {
        Self { ytitle: String::new(), logx: false, logy: false, ymax: None, stats: true }
    }
}

impl ProfileDrawOpts {
    /// Convention for multi-view overlays: stat box off.
    pub fn overlay() -> Self {
        Self { stats: false, ..Default::default() }
    }
}

/// Draw a single profile view.
pub fn draw_profile(
    pad: &mut Pad,
    ctx: &DrawContext,
    view: &ProfileView,
    opts: &ProfileDrawOpts,
) -> Result<()> {
    draw_profiles(pad, ctx, std::slice::from_ref(view), opts)
}

/// Draw a collection of profile views on shared axes. Headroom follows
/// the 1D convention (× 14 log, × 1.4 linear with a zero floor); an
/// explicit `ymax` overrides the computed ceiling.
pub fn draw_profiles(
    pad: &mut Pad,
    ctx: &DrawContext,
    views: &[ProfileView],
    opts: &ProfileDrawOpts,
) -> Result<()> {
    let first = views.first().ok_or(RenderError::EmptyDraw("profile views"))?;
    pad.set_log_x(opts.logx);
    pad.set_log_y(opts.logy);

    let config = pad.config().clone();
    let area = pad.plot_area();
    let p = &first.hist;

    let x_axis = if opts.logx {
        Axis::log(log_low_edge(p.xlow, p.xup), p.xup)
    } else {
        Axis::linear(p.xlow, p.xup, config.axes.divisions)
    }
    .with_label(&p.xtitle);

    let raw_max = p.maximum().max(0.0);
    let mut hi = raw_max * if opts.logy { 14.0 } else { 1.4 };
    if let Some(ymax) = opts.ymax {
        hi = ymax;
    }
    let ytitle = if opts.ytitle.is_empty() { p.ytitle.clone() } else { opts.ytitle.clone() };
    let y_axis = if opts.logy {
        let lo = log_low_edge(0.0, hi.max(1.0)).min(hi / 100.0).max(1e-300);
        Axis::log(lo, hi.max(lo * 10.0))
    } else {
        Axis::linear(0.0, hi.max(1.0), config.axes.divisions)
    }
    .with_label(ytitle);

    {
        let canvas = pad.canvas_mut();
        draw_axes(canvas, &area, &x_axis, &y_axis, &config);
        for view in views {
            let p = &view.hist;
            let marker = MarkerStyle {
                shape: view.style.marker_shape,
                size: view.style.marker_size * 2.0,
                color: view.style.marker_color,
            };
            let err_style = LineStyle::solid(view.style.marker_color, 1.0);
            for i in 0..p.nbins {
                if p.count[i] <= 0.0 {
                    continue;
                }
                let px = x_axis.data_to_pixel(p.bin_center(i), area.left, area.right());
                let mean = p.bin_mean(i);
                let err = p.bin_error(i);
                let py = y_axis.data_to_pixel(mean, area.bottom(), area.top);
                let py_lo = y_axis
                    .data_to_pixel(mean - err, area.bottom(), area.top)
                    .clamp(area.top, area.bottom());
                let py_hi = y_axis
                    .data_to_pixel(mean + err, area.bottom(), area.top)
                    .clamp(area.top, area.bottom());
                canvas.error_bar(px, py_lo, py_hi, 4.0, &err_style);
                canvas.marker(px, py.clamp(area.top, area.bottom()), &marker);
            }
        }
    }

    pad.set_frame(area, x_axis, y_axis);
    if opts.stats {
        stats::draw_stats_box(pad, &config.stats, &stats::profile_rows(&first.hist));
    }
    ctx.legend.draw(pad.canvas_mut());
    experiment_label(pad);
    Ok(())
}

#[cfg(test)]
mod tests {
    use trackplot_hist::{Booker, ErrorMode, ProfileParams};

    use super::*;

    fn booked_profile() -> ProfileView {
        let mut views = Booker::new()
            .book_profiles(
                &[ProfileParams::new(
                    "res", "pt", "", "p_{T} [GeV]", 5, 0.0, 50.0, "dz", "#sigma(z)", -5.0, 5.0,
                )],
                ErrorMode::Spread,
            )
            .unwrap();
        for (x, y) in [(5.0, 1.0), (5.0, 2.0), (25.0, 3.0), (45.0, 0.5)] {
            views[0].hist.fill(x, y);
        }
        views.remove(0)
    }

    #[test]
    fn empty_profiles_is_an_error() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        let err = draw_profiles(&mut pad, &ctx, &[], &ProfileDrawOpts::default()).unwrap_err();
        assert!(matches!(err, RenderError::EmptyDraw(_)));
    }

    #[test]
    fn markers_for_filled_bins_only() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        let view = booked_profile();
        let opts = ProfileDrawOpts { stats: false, ..Default::default() };
        draw_profile(&mut pad, &ctx, &view, &opts).unwrap();
        // 3 filled bins -> 3 circle markers (default shape)
        assert_eq!(pad.to_svg().matches("<circle").count(), 3);
    }

    #[test]
    fn ymax_override_wins() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        let view = booked_profile();
        let opts = ProfileDrawOpts { ymax: Some(10.0), stats: false, ..Default::default() };
        draw_profile(&mut pad, &ctx, &view, &opts).unwrap();
        let top = pad.y_to_pixel(10.0).unwrap();
        assert!((top - pad.area().unwrap().top).abs() < 1e-6);
    }

    #[test]
    fn profile_uses_its_ytitle() {
        let mut pad = Pad::with_defaults();
        let ctx = DrawContext::new();
        let view = booked_profile();
        draw_profile(&mut pad, &ctx, &view, &ProfileDrawOpts::default()).unwrap();
        assert!(pad.to_svg().contains("#sigma(z)"));
    }
}
