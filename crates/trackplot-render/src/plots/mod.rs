//! Draw pipelines for the view kinds.

pub mod axes_draw;
pub mod hist;
pub mod hist2d;
pub mod profile;
pub mod stats;

use trackplot_hist::View;

use crate::Result;
use crate::context::DrawContext;
use crate::pad::Pad;

/// Draw any view variant with default options.
pub fn draw_view(pad: &mut Pad, ctx: &DrawContext, view: &View) -> Result<()> {
    match view {
        View::H1(v) => hist::draw_hist(pad, ctx, v, &hist::HistDrawOpts::default()),
        View::Profile(v) => {
            profile::draw_profile(pad, ctx, v, &profile::ProfileDrawOpts::default())
        }
        View::H2(v) => hist2d::draw_hist2d(pad, ctx, v, &hist2d::Hist2dDrawOpts::default()),
    }
}

/// Positive lower bound for a log axis over `[low, up]`.
pub(crate) fn log_low_edge(low: f64, up: f64) -> f64 {
    if low > 0.0 { low } else { up.abs().max(1.0) * 1e-3 }
}
