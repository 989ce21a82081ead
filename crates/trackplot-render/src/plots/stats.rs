//! The summary-statistics box.

use trackplot_hist::style::Color;
use trackplot_hist::{Hist1d, Hist2d, Profile1d};

use crate::canvas::Canvas;
use crate::config::StatsConfig;
use crate::pad::Pad;
use crate::primitives::{Style, TextAnchor, TextBaseline, TextStyle};

/// Compact numeric formatting for stat-box values.
pub(crate) fn format_stat(v: f64) -> String {
    if !v.is_finite() {
        return "-".into();
    }
    let a = v.abs();
    if a >= 1e6 || (a > 0.0 && a < 1e-3) {
        format!("{v:.3e}")
    } else if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.4}");
        let s = s.trim_end_matches('0').trim_end_matches('.');
        s.to_string()
    }
}

/// Stat rows for a 1D histogram (entries, mean, std dev, flows).
pub(crate) fn hist1d_rows(h: &Hist1d) -> Vec<(String, String)> {
    vec![
        ("Entries".into(), format_stat(h.entries)),
        ("Mean".into(), format_stat(h.mean())),
        ("Std Dev".into(), format_stat(h.std_dev())),
        ("Underflow".into(), format_stat(h.underflow)),
        ("Overflow".into(), format_stat(h.overflow)),
    ]
}

/// Stat rows for a profile (entries plus the x distribution of counts).
pub(crate) fn profile_rows(p: &Profile1d) -> Vec<(String, String)> {
    let sumw: f64 = p.count.iter().sum();
    let (mean, std) = if sumw > 0.0 {
        let mean = (0..p.nbins).map(|i| p.bin_center(i) * p.count[i]).sum::<f64>() / sumw;
        let var = (0..p.nbins)
            .map(|i| {
                let d = p.bin_center(i) - mean;
                d * d * p.count[i]
            })
            .sum::<f64>()
            / sumw;
        (mean, var.max(0.0).sqrt())
    } else {
        (0.0, 0.0)
    };
    vec![
        ("Entries".into(), format_stat(p.entries)),
        ("Mean".into(), format_stat(mean)),
        ("Std Dev".into(), format_stat(std)),
    ]
}

/// Stat rows for a 2D histogram.
pub(crate) fn hist2d_rows(h: &Hist2d) -> Vec<(String, String)> {
    vec![
        ("Entries".into(), format_stat(h.entries)),
        ("Mean x".into(), format_stat(h.mean_x())),
        ("Mean y".into(), format_stat(h.mean_y())),
    ]
}

/// Draw the stat box at an explicit NDC rectangle (x2/y2 upper-right
/// corner, w/h extent).
pub(crate) fn draw_stats_box(pad: &mut Pad, rect: &StatsConfig, rows: &[(String, String)]) {
    if rows.is_empty() {
        return;
    }
    let left = pad.ndc_x(rect.x2 - rect.w);
    let right = pad.ndc_x(rect.x2);
    let top = pad.ndc_y(rect.y2);
    let bottom = pad.ndc_y(rect.y2 - rect.h);
    let font_size = pad.config().font.size;
    let canvas: &mut Canvas = pad.canvas_mut();

    let frame = Style {
        fill: Some(Color::rgb(255, 255, 255)),
        stroke: Some(Color::rgb(0, 0, 0)),
        stroke_width: 0.8,
    };
    canvas.rect(left, top, right - left, bottom - top, &frame);

    let row_h = (bottom - top) / rows.len() as f64;
    let label_style = TextStyle {
        size: font_size,
        anchor: TextAnchor::Start,
        baseline: TextBaseline::Central,
        ..Default::default()
    };
    let value_style = TextStyle {
        size: font_size,
        anchor: TextAnchor::End,
        baseline: TextBaseline::Central,
        ..Default::default()
    };
    for (i, (label, value)) in rows.iter().enumerate() {
        let cy = top + (i as f64 + 0.5) * row_h;
        canvas.text(left + 4.0, cy, label, &label_style);
        canvas.text(right - 4.0, cy, value, &value_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_integers_plainly() {
        assert_eq!(format_stat(1234.0), "1234");
        assert_eq!(format_stat(0.0), "0");
    }

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(format_stat(1.5), "1.5");
        assert_eq!(format_stat(0.25), "0.25");
    }

    #[test]
    fn format_large_goes_scientific() {
        assert!(format_stat(1.5e7).contains('e'));
    }

    #[test]
    fn hist_rows_reflect_content() {
        let mut h = Hist1d::new("h", "x", 10, 0.0, 10.0);
        h.fill(2.5);
        h.fill(7.5);
        let rows = hist1d_rows(&h);
        assert_eq!(rows[0], ("Entries".to_string(), "2".to_string()));
        assert_eq!(rows[1].1, "5");
    }

    #[test]
    fn stats_box_renders_rows() {
        let mut pad = Pad::with_defaults();
        let rows = vec![("Entries".to_string(), "42".to_string())];
        let rect = pad.config().stats.clone();
        draw_stats_box(&mut pad, &rect, &rows);
        let svg = pad.to_svg();
        assert!(svg.contains("Entries"));
        assert!(svg.contains("42"));
    }
}
