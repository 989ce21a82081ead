//! Booking: parameter records in, styled histogram views out.
//!
//! The [`Booker`] owns a monotonically increasing counter and derives every
//! histogram's internal identifier from it (`h1_3`, `hp1_4`, `h2_5`), so
//! identifiers are unique per booker with no collision risk.

use crate::error::Result;
use crate::expr::Expr;
use crate::hist::{ErrorMode, Hist1d, Hist2d, Profile1d};
use crate::params::{Hist2dParams, HistParams, ProfileParams};
use crate::style::DrawStyle;

/// Marker size applied to profile views when the record sets none.
const PROFILE_MARKER_SIZE: f64 = 1.3;

/// A booked 1D histogram view: one histogram, its resolved style, and the
/// compiled projection expressions.
#[derive(Debug, Clone)]
pub struct Hist1dView {
    /// Plot name from the parameter record.
    pub name: String,
    /// The owned histogram.
    pub hist: Hist1d,
    /// Resolved cosmetics.
    pub style: DrawStyle,
    pub(crate) expr: Expr,
    pub(crate) cut: Option<Expr>,
}

/// A booked profile view.
#[derive(Debug, Clone)]
pub struct ProfileView {
    /// Plot name from the parameter record.
    pub name: String,
    /// The owned profile.
    pub hist: Profile1d,
    /// Resolved cosmetics.
    pub style: DrawStyle,
    pub(crate) expr_x: Expr,
    pub(crate) expr_y: Expr,
    pub(crate) cut: Option<Expr>,
}

/// A booked 2D histogram view.
#[derive(Debug, Clone)]
pub struct Hist2dView {
    /// Plot name from the parameter record.
    pub name: String,
    /// The owned histogram.
    pub hist: Hist2d,
    /// Resolved cosmetics.
    pub style: DrawStyle,
    pub(crate) expr_x: Expr,
    pub(crate) expr_y: Expr,
    pub(crate) cut: Option<Expr>,
}

/// Closed variant over the three view kinds.
#[derive(Debug, Clone)]
pub enum View {
    /// Plain 1D histogram.
    H1(Hist1dView),
    /// Profile histogram.
    Profile(ProfileView),
    /// 2D histogram.
    H2(Hist2dView),
}

impl View {
    /// Plot name.
    pub fn name(&self) -> &str {
        match self {
            View::H1(v) => &v.name,
            View::Profile(v) => &v.name,
            View::H2(v) => &v.name,
        }
    }

    /// Resolved cosmetics.
    pub fn style(&self) -> &DrawStyle {
        match self {
            View::H1(v) => &v.style,
            View::Profile(v) => &v.style,
            View::H2(v) => &v.style,
        }
    }
}

impl From<Hist1dView> for View {
    fn from(v: Hist1dView) -> Self {
        View::H1(v)
    }
}

impl From<ProfileView> for View {
    fn from(v: ProfileView) -> Self {
        View::Profile(v)
    }
}

impl From<Hist2dView> for View {
    fn from(v: Hist2dView) -> Self {
        View::H2(v)
    }
}

/// Largest single-bin content of a view.
pub trait MaxBin {
    /// Maximum bin (or cell) content.
    fn max_bin(&self) -> f64;
}

impl MaxBin for Hist1dView {
    fn max_bin(&self) -> f64 {
        self.hist.maximum()
    }
}

impl MaxBin for ProfileView {
    fn max_bin(&self) -> f64 {
        self.hist.maximum()
    }
}

impl MaxBin for Hist2dView {
    fn max_bin(&self) -> f64 {
        self.hist.maximum()
    }
}

impl MaxBin for View {
    fn max_bin(&self) -> f64 {
        match self {
            View::H1(v) => v.max_bin(),
            View::Profile(v) => v.max_bin(),
            View::H2(v) => v.max_bin(),
        }
    }
}

/// Maximum single-bin content across `views` (shared y ceiling when
/// drawing several plots consistently). Empty input yields
/// `f64::NEG_INFINITY`.
pub fn get_maximum<V: MaxBin>(views: &[V]) -> f64 {
    views.iter().map(|v| v.max_bin()).fold(f64::NEG_INFINITY, f64::max)
}

/// Books histogram views from parameter records.
#[derive(Debug, Default)]
pub struct Booker {
    next: u32,
}

impl Booker {
    /// New booker with the counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Book one 1D view per record, in input order.
    pub fn book(&mut self, params: &[HistParams]) -> Result<Vec<Hist1dView>> {
        params
            .iter()
            .map(|p| {
                p.validate()?;
                let id = self.next_id();
                Ok(Hist1dView {
                    name: p.name.clone(),
                    hist: Hist1d::new(format!("h1_{id}"), &p.xtitle, p.nbinsx, p.xlow, p.xup),
                    style: p.resolve_style(0.0),
                    expr: Expr::parse(&p.expr)?,
                    cut: compile_cut(&p.cut)?,
                })
            })
            .collect()
    }

    /// Book one profile view per record, in input order. `mode` is applied
    /// uniformly to the batch (default convention: spread as error).
    pub fn book_profiles(
        &mut self,
        params: &[ProfileParams],
        mode: ErrorMode,
    ) -> Result<Vec<ProfileView>> {
        params
            .iter()
            .map(|p| {
                p.validate()?;
                let id = self.next_id();
                let mut hist = Profile1d::new(
                    format!("hp1_{id}"),
                    &p.base.xtitle,
                    &p.ytitle,
                    p.base.nbinsx,
                    p.base.xlow,
                    p.base.xup,
                    p.ylow,
                    p.yup,
                );
                hist.error_mode = mode;
                Ok(ProfileView {
                    name: p.base.name.clone(),
                    hist,
                    style: p.base.resolve_style(PROFILE_MARKER_SIZE),
                    expr_x: Expr::parse(&p.base.expr)?,
                    expr_y: Expr::parse(&p.yexpr)?,
                    cut: compile_cut(&p.base.cut)?,
                })
            })
            .collect()
    }

    /// Book one 2D view per record, in input order.
    pub fn book_2d(&mut self, params: &[Hist2dParams]) -> Result<Vec<Hist2dView>> {
        params
            .iter()
            .map(|p| {
                p.validate()?;
                let id = self.next_id();
                Ok(Hist2dView {
                    name: p.base.name.clone(),
                    hist: Hist2d::new(
                        format!("h2_{id}"),
                        &p.base.xtitle,
                        &p.ytitle,
                        p.base.nbinsx,
                        p.base.xlow,
                        p.base.xup,
                        p.nbinsy,
                        p.ylow,
                        p.yup,
                    ),
                    style: p.base.resolve_style(0.0),
                    expr_x: Expr::parse(&p.base.expr)?,
                    expr_y: Expr::parse(&p.yexpr)?,
                    cut: compile_cut(&p.base.cut)?,
                })
            })
            .collect()
    }
}

fn compile_cut(cut: &str) -> Result<Option<Expr>> {
    if cut.trim().is_empty() { Ok(None) } else { Expr::parse(cut).map(Some) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_view_per_record_in_order() {
        let params = vec![
            HistParams::new("a", "x", "", "x", 10, 0.0, 1.0),
            HistParams::new("b", "y", "y > 0", "y", 20, -1.0, 1.0),
            HistParams::new("c", "x + y", "", "s", 5, 0.0, 5.0),
        ];
        let views = Booker::new().book(&params).unwrap();
        assert_eq!(views.len(), 3);
        assert_eq!(views[0].name, "a");
        assert_eq!(views[1].name, "b");
        assert_eq!(views[2].name, "c");
        assert_eq!(views[1].hist.nbins, 20);
        assert_eq!(views[1].hist.xlow, -1.0);
        assert_eq!(views[1].hist.xup, 1.0);
        assert!(views[0].cut.is_none());
        assert!(views[1].cut.is_some());
    }

    #[test]
    fn identifiers_are_unique_and_sequential() {
        let mut booker = Booker::new();
        let a = booker.book(&[HistParams::new("a", "x", "", "x", 4, 0.0, 1.0)]).unwrap();
        let b = booker.book(&[HistParams::new("b", "x", "", "x", 4, 0.0, 1.0)]).unwrap();
        let p = booker
            .book_profiles(
                &[ProfileParams::new("p", "x", "", "x", 4, 0.0, 1.0, "y", "y", -1.0, 1.0)],
                ErrorMode::Spread,
            )
            .unwrap();
        assert_eq!(a[0].hist.name, "h1_0");
        assert_eq!(b[0].hist.name, "h1_1");
        assert_eq!(p[0].hist.name, "hp1_2");
    }

    #[test]
    fn invalid_record_fails_booking() {
        let err = Booker::new()
            .book(&[HistParams::new("bad", "x", "", "x", 0, 0.0, 1.0)])
            .unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn bad_expression_fails_booking() {
        let err = Booker::new()
            .book(&[HistParams::new("h", "x +", "", "x", 4, 0.0, 1.0)])
            .unwrap_err();
        assert!(err.to_string().contains("expression"));
    }

    #[test]
    fn profile_marker_default() {
        let views = Booker::new()
            .book_profiles(
                &[ProfileParams::new("p", "x", "", "x", 4, 0.0, 1.0, "y", "y", -1.0, 1.0)],
                ErrorMode::Spread,
            )
            .unwrap();
        assert_eq!(views[0].style.marker_size, 1.3);
        assert_eq!(views[0].hist.error_mode, ErrorMode::Spread);
    }

    #[test]
    fn book_2d_roundtrip_ranges() {
        let views = Booker::new()
            .book_2d(&[Hist2dParams::new(
                "h2", "x", "", "x", 10, 0.0, 10.0, "y", "y", 5, 0.0, 5.0,
            )])
            .unwrap();
        let h = &views[0].hist;
        assert_eq!((h.nbinsx, h.xlow, h.xup), (10, 0.0, 10.0));
        assert_eq!((h.nbinsy, h.ylow, h.yup), (5, 0.0, 5.0));
    }

    #[test]
    fn get_maximum_covers_all_views() {
        let mut views = Booker::new()
            .book(&[
                HistParams::new("a", "x", "", "x", 2, 0.0, 2.0),
                HistParams::new("b", "x", "", "x", 2, 0.0, 2.0),
            ])
            .unwrap();
        views[0].hist.fill(0.5);
        for _ in 0..5 {
            views[1].hist.fill(1.5);
        }
        let max = get_maximum(&views);
        assert_eq!(max, 5.0);
        for v in &views {
            assert!(max >= v.max_bin());
        }
    }

    #[test]
    fn view_variant_dispatch() {
        let mut booker = Booker::new();
        let h1 = booker.book(&[HistParams::new("a", "x", "", "x", 2, 0.0, 2.0)]).unwrap();
        let view: View = h1.into_iter().next().unwrap().into();
        assert_eq!(view.name(), "a");
        assert_eq!(view.style().line_width, 2.0);
    }
}
