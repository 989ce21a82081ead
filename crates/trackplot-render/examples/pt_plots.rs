//! Produce the standard pt/eta plot set from a synthetic event store.
//!
//! Run with `cargo run --example pt_plots -- [outdir]`.

use trackplot_hist::style::Color;
use trackplot_hist::{
    Booker, ErrorMode, EventStore, Hist2dParams, HistParams, ProfileParams, ProjectOptions,
    project, project_2d, project_profiles,
};
use trackplot_render::layout::legend::LegendKind;
use trackplot_render::{
    DrawContext, Hist2dDrawOpts, HistDrawOpts, Pad, ProfileDrawOpts, draw_hist2d, draw_hists,
    draw_profile, save,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let outdir = std::env::args().nth(1).unwrap_or_else(|| "plots".into());

    // Synthetic tracks: falling pt spectrum, flat eta.
    let n = 20_000;
    let pt: Vec<f64> = (0..n).map(|i| 2.0 + 48.0 * ((i * 7919 % n) as f64 / n as f64).powi(3)).collect();
    let eta: Vec<f64> = (0..n).map(|i| ((i * 104729 % n) as f64 / n as f64 - 0.5) * 5.0).collect();
    let store = EventStore::new().with_column("pt", pt)?.with_column("eta", eta)?;

    let mut booker = Booker::new();
    let mut pad = Pad::with_defaults();
    let mut ctx = DrawContext::new();

    // Overlaid pt spectra, log y.
    let mut spectra = booker.book(&[
        HistParams::new("pt_all", "pt", "", "p_{T} [GeV]", 50, 0.0, 50.0)
            .colors(Color::hex("#e42536"), Color::hex("#e42536").with_alpha(0.15)),
        HistParams::new("pt_central", "pt", "abs(eta) < 1", "p_{T} [GeV]", 50, 0.0, 50.0)
            .colors(Color::hex("#5790fc"), Color::hex("#5790fc").with_alpha(0.15)),
    ])?;
    project(&store, &mut spectra, &ProjectOptions::default())?;

    ctx.legend.add("all tracks", spectra[0].style.line_color, LegendKind::Line(None));
    ctx.legend.add("|#eta| < 1", spectra[1].style.line_color, LegendKind::Line(None));
    ctx.move_legend(0.62, 0.74, 0.93, 0.90);
    let opts = HistDrawOpts { logy: true, stats: false, ..Default::default() };
    draw_hists(&mut pad, &ctx, &spectra, &opts)?;
    save(&mut pad, &outdir, "pt_spectrum", false)?;

    // Mean |eta| versus pt.
    let mut profs = booker.book_profiles(
        &[ProfileParams::new(
            "abseta_vs_pt", "pt", "", "p_{T} [GeV]", 25, 0.0, 50.0, "abs(eta)", "<|#eta|>", 0.0,
            5.0,
        )],
        ErrorMode::Spread,
    )?;
    project_profiles(&store, &mut profs, u64::MAX)?;

    pad.clear();
    ctx.legend.clear();
    draw_profile(&mut pad, &ctx, &profs[0], &ProfileDrawOpts::default())?;
    save(&mut pad, &outdir, "abseta_vs_pt", false)?;

    // Occupancy map with palette.
    let mut maps = booker.book_2d(&[Hist2dParams::new(
        "occupancy", "pt", "", "p_{T} [GeV]", 25, 0.0, 50.0, "eta", "#eta", 25, -2.5, 2.5,
    )])?;
    project_2d(&store, &mut maps, u64::MAX)?;

    pad.clear();
    draw_hist2d(&mut pad, &ctx, &maps[0], &Hist2dDrawOpts::default())?;
    save(&mut pad, &outdir, "occupancy", true)?;

    Ok(())
}
