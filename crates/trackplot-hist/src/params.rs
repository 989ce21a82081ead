//! Parameter records describing one histogram each.
//!
//! One explicit struct per histogram kind; optional cosmetic fields fall
//! back to the [`DrawStyle`] defaults when unset.

use serde::{Deserialize, Serialize};

use crate::error::{HistError, Result};
use crate::style::{Color, DrawStyle, LinePattern, MarkerShape};

/// Parameters for a plain 1D histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistParams {
    /// Plot name (used for output files, not the internal identifier).
    pub name: String,
    /// Source expression evaluated per row.
    pub expr: String,
    /// Selection predicate; empty accepts every row.
    pub cut: String,
    /// X-axis title.
    pub xtitle: String,
    /// Number of x bins.
    pub nbinsx: usize,
    /// Lower edge of the x axis.
    pub xlow: f64,
    /// Upper edge of the x axis.
    pub xup: f64,
    /// Line color override.
    pub line_color: Option<Color>,
    /// Marker color override.
    pub marker_color: Option<Color>,
    /// Fill color override.
    pub fill_color: Option<Color>,
    /// Line pattern override.
    pub line_pattern: Option<LinePattern>,
    /// Marker shape override.
    pub marker_shape: Option<MarkerShape>,
    /// Line width override.
    pub line_width: Option<f64>,
    /// Marker size override.
    pub marker_size: Option<f64>,
}

impl HistParams {
    /// Positional constructor matching the common booking call sites.
    pub fn new(
        name: impl Into<String>,
        expr: impl Into<String>,
        cut: impl Into<String>,
        xtitle: impl Into<String>,
        nbinsx: usize,
        xlow: f64,
        xup: f64,
    ) -> Self {
        Self {
            name: name.into(),
            expr: expr.into(),
            cut: cut.into(),
            xtitle: xtitle.into(),
            nbinsx,
            xlow,
            xup,
            line_color: None,
            marker_color: None,
            fill_color: None,
            line_pattern: None,
            marker_shape: None,
            line_width: None,
            marker_size: None,
        }
    }

    /// Set line and fill colors; the line color is also used for markers.
    pub fn colors(mut self, line: Color, fill: Color) -> Self {
        self.line_color = Some(line);
        self.marker_color = Some(line);
        self.fill_color = Some(fill);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_axis(&self.name, "x", self.nbinsx, self.xlow, self.xup)
    }

    pub(crate) fn resolve_style(&self, default_marker_size: f64) -> DrawStyle {
        let mut s = DrawStyle { marker_size: default_marker_size, ..DrawStyle::default() };
        if let Some(c) = self.line_color {
            s.line_color = c;
        }
        if let Some(c) = self.marker_color {
            s.marker_color = c;
        }
        if let Some(c) = self.fill_color {
            s.fill_color = Some(c);
        }
        if let Some(p) = self.line_pattern {
            s.line_pattern = p;
        }
        if let Some(m) = self.marker_shape {
            s.marker_shape = m;
        }
        if let Some(w) = self.line_width {
            s.line_width = w;
        }
        if let Some(m) = self.marker_size {
            s.marker_size = m;
        }
        s
    }
}

/// Parameters for a profile histogram (per-x-bin mean of a second quantity).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileParams {
    /// Base 1D parameters (x expression, binning, cosmetics).
    pub base: HistParams,
    /// Expression for the profiled quantity.
    pub yexpr: String,
    /// Y-axis title.
    pub ytitle: String,
    /// Values of `yexpr` below this are ignored.
    pub ylow: f64,
    /// Values of `yexpr` above this are ignored.
    pub yup: f64,
}

impl ProfileParams {
    /// Positional constructor.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        expr: impl Into<String>,
        cut: impl Into<String>,
        xtitle: impl Into<String>,
        nbinsx: usize,
        xlow: f64,
        xup: f64,
        yexpr: impl Into<String>,
        ytitle: impl Into<String>,
        ylow: f64,
        yup: f64,
    ) -> Self {
        Self {
            base: HistParams::new(name, expr, cut, xtitle, nbinsx, xlow, xup),
            yexpr: yexpr.into(),
            ytitle: ytitle.into(),
            ylow,
            yup,
        }
    }

    /// Set line and fill colors; the line color is also used for markers.
    pub fn colors(mut self, line: Color, fill: Color) -> Self {
        self.base = self.base.colors(line, fill);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if self.ylow >= self.yup {
            return Err(HistError::Params(format!(
                "'{}': y range inverted ({} >= {})",
                self.base.name, self.ylow, self.yup
            )));
        }
        Ok(())
    }
}

/// Parameters for a 2D histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hist2dParams {
    /// Base 1D parameters (x expression, binning, cosmetics).
    pub base: HistParams,
    /// Expression for the y quantity.
    pub yexpr: String,
    /// Y-axis title.
    pub ytitle: String,
    /// Number of y bins.
    pub nbinsy: usize,
    /// Lower edge of the y axis.
    pub ylow: f64,
    /// Upper edge of the y axis.
    pub yup: f64,
}

impl Hist2dParams {
    /// Positional constructor.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        expr: impl Into<String>,
        cut: impl Into<String>,
        xtitle: impl Into<String>,
        nbinsx: usize,
        xlow: f64,
        xup: f64,
        yexpr: impl Into<String>,
        ytitle: impl Into<String>,
        nbinsy: usize,
        ylow: f64,
        yup: f64,
    ) -> Self {
        Self {
            base: HistParams::new(name, expr, cut, xtitle, nbinsx, xlow, xup),
            yexpr: yexpr.into(),
            ytitle: ytitle.into(),
            nbinsy,
            ylow,
            yup,
        }
    }

    /// Set line and fill colors; the line color is also used for markers.
    pub fn colors(mut self, line: Color, fill: Color) -> Self {
        self.base = self.base.colors(line, fill);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.base.validate()?;
        check_axis(&self.base.name, "y", self.nbinsy, self.ylow, self.yup)
    }
}

fn check_axis(name: &str, axis: &str, nbins: usize, low: f64, up: f64) -> Result<()> {
    if nbins == 0 {
        return Err(HistError::Params(format!("'{name}': {axis} bin count must be positive")));
    }
    if !(low < up) {
        return Err(HistError::Params(format!(
            "'{name}': {axis} range inverted ({low} >= {up})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_params_pass() {
        let p = HistParams::new("pt", "pt", "pt > 2", "p_{T} [GeV]", 50, 0.0, 100.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn zero_bins_rejected() {
        let p = HistParams::new("h", "x", "", "x", 0, 0.0, 1.0);
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("bin count"));
    }

    #[test]
    fn inverted_range_rejected() {
        let p = HistParams::new("h", "x", "", "x", 10, 1.0, 1.0);
        assert!(p.validate().is_err());
        let p2 = Hist2dParams::new("h", "x", "", "x", 10, 0.0, 1.0, "y", "y", 5, 2.0, -2.0);
        assert!(p2.validate().is_err());
    }

    #[test]
    fn nan_range_rejected() {
        let p = HistParams::new("h", "x", "", "x", 10, f64::NAN, 1.0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn colors_set_marker_to_line() {
        let p = HistParams::new("h", "x", "", "x", 10, 0.0, 1.0)
            .colors(Color::hex("#e42536"), Color::hex("#f89c20"));
        let s = p.resolve_style(0.0);
        assert_eq!(s.line_color, Color::hex("#e42536"));
        assert_eq!(s.marker_color, Color::hex("#e42536"));
        assert_eq!(s.fill_color, Some(Color::hex("#f89c20")));
    }

    #[test]
    fn overrides_beat_defaults() {
        let mut p = HistParams::new("h", "x", "", "x", 10, 0.0, 1.0);
        p.line_width = Some(1.0);
        p.marker_size = Some(0.8);
        let s = p.resolve_style(1.3);
        assert_eq!(s.line_width, 1.0);
        assert_eq!(s.marker_size, 0.8);
    }
}
