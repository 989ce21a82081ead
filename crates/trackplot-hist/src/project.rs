//! Projection: fill booked views from a columnar event store.

use std::collections::HashMap;

use crate::booking::{Hist1dView, Hist2dView, ProfileView};
use crate::error::{HistError, Result};
use crate::expr::Expr;

/// In-memory columnar event source: named `f64` columns of equal length.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    columns: HashMap<String, Vec<f64>>,
    rows: usize,
}

impl EventStore {
    /// New empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column. The first column fixes the row count; later columns
    /// must match it.
    pub fn insert(&mut self, name: impl Into<String>, data: Vec<f64>) -> Result<()> {
        if self.columns.is_empty() {
            self.rows = data.len();
        } else if data.len() != self.rows {
            return Err(HistError::Projection(format!(
                "column length mismatch: expected {}, got {}",
                self.rows,
                data.len()
            )));
        }
        self.columns.insert(name.into(), data);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_column(mut self, name: impl Into<String>, data: Vec<f64>) -> Result<Self> {
        self.insert(name, data)?;
        Ok(self)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column data by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// Column slices in the order an expression reads them.
    fn gather(&self, expr: &Expr) -> Result<Vec<&[f64]>> {
        expr.columns
            .iter()
            .map(|name| {
                self.column(name)
                    .ok_or_else(|| HistError::Projection(format!("missing column: '{name}'")))
            })
            .collect()
    }
}

/// Options for 1D projection.
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    /// Rows scanned at most (cap on rows read, not rows accepted).
    pub max_rows: u64,
    /// If set and positive, scale each view so its sum of weights equals
    /// the target.
    pub normalize: Option<f64>,
    /// Fold overflow into the last bin after filling.
    pub fold_overflow: bool,
    /// Fold underflow into the first bin after filling.
    pub fold_underflow: bool,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self { max_rows: u64::MAX, normalize: None, fold_overflow: true, fold_underflow: true }
    }
}

/// Row-wise expression evaluator over gathered column slices.
struct RowEval<'a> {
    expr: &'a Expr,
    cols: Vec<&'a [f64]>,
    buf: Vec<f64>,
    stack: Vec<f64>,
}

impl<'a> RowEval<'a> {
    fn new(store: &'a EventStore, expr: &'a Expr) -> Result<Self> {
        let cols = store.gather(expr)?;
        let buf = vec![0.0; cols.len()];
        Ok(Self { expr, cols, buf, stack: Vec::new() })
    }

    fn eval(&mut self, row: usize) -> f64 {
        for (slot, col) in self.buf.iter_mut().zip(&self.cols) {
            *slot = col[row];
        }
        self.expr.eval_with(&self.buf, &mut self.stack)
    }
}

fn row_limit(store: &EventStore, max_rows: u64) -> usize {
    store.rows().min(usize::try_from(max_rows).unwrap_or(usize::MAX))
}

/// Project the event store into 1D views: evaluate each view's selection
/// and source expression per row, fill, then apply normalization and flow
/// folding per [`ProjectOptions`]. Normalization runs before folding and
/// skips (with a warning) views whose sum of weights is not positive.
pub fn project(
    store: &EventStore,
    views: &mut [Hist1dView],
    opts: &ProjectOptions,
) -> Result<()> {
    let n = row_limit(store, opts.max_rows);
    for view in views.iter_mut() {
        let mut var = RowEval::new(store, &view.expr)?;
        let mut cut = view.cut.as_ref().map(|c| RowEval::new(store, c)).transpose()?;
        for row in 0..n {
            if let Some(c) = cut.as_mut()
                && c.eval(row) <= 0.0
            {
                continue;
            }
            view.hist.fill(var.eval(row));
        }
        if let Some(target) = opts.normalize
            && target > 0.0
        {
            let sumw = view.hist.sum_of_weights();
            if sumw > 0.0 {
                view.hist.scale(target / sumw);
            } else {
                log::warn!("'{}': zero sum of weights, normalization skipped", view.name);
            }
        }
        if opts.fold_overflow {
            view.hist.fold_overflow();
        }
        if opts.fold_underflow {
            view.hist.fold_underflow();
        }
    }
    log::debug!("projected {} 1D views over {} rows", views.len(), n);
    Ok(())
}

/// Project into profile views (no normalization, no folding).
pub fn project_profiles(
    store: &EventStore,
    views: &mut [ProfileView],
    max_rows: u64,
) -> Result<()> {
    let n = row_limit(store, max_rows);
    for view in views.iter_mut() {
        let mut x = RowEval::new(store, &view.expr_x)?;
        let mut y = RowEval::new(store, &view.expr_y)?;
        let mut cut = view.cut.as_ref().map(|c| RowEval::new(store, c)).transpose()?;
        for row in 0..n {
            if let Some(c) = cut.as_mut()
                && c.eval(row) <= 0.0
            {
                continue;
            }
            view.hist.fill(x.eval(row), y.eval(row));
        }
    }
    log::debug!("projected {} profile views over {} rows", views.len(), n);
    Ok(())
}

/// Project into 2D views (no normalization, no folding).
pub fn project_2d(store: &EventStore, views: &mut [Hist2dView], max_rows: u64) -> Result<()> {
    let n = row_limit(store, max_rows);
    for view in views.iter_mut() {
        let mut x = RowEval::new(store, &view.expr_x)?;
        let mut y = RowEval::new(store, &view.expr_y)?;
        let mut cut = view.cut.as_ref().map(|c| RowEval::new(store, c)).transpose()?;
        for row in 0..n {
            if let Some(c) = cut.as_mut()
                && c.eval(row) <= 0.0
            {
                continue;
            }
            view.hist.fill(x.eval(row), y.eval(row));
        }
    }
    log::debug!("projected {} 2D views over {} rows", views.len(), n);
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::booking::Booker;
    use crate::hist::ErrorMode;
    use crate::params::{Hist2dParams, HistParams, ProfileParams};

    fn store() -> EventStore {
        EventStore::new()
            .with_column("pt", vec![1.0, 2.5, 3.5, 0.5, 9.0, 12.0])
            .unwrap()
            .with_column("eta", vec![0.1, -0.3, 0.5, 2.0, -1.2, 0.0])
            .unwrap()
    }

    #[test]
    fn project_with_cut() {
        let mut views = Booker::new()
            .book(&[HistParams::new("pt", "pt", "pt > 2", "p_{T}", 10, 0.0, 10.0)])
            .unwrap();
        project(&store(), &mut views, &ProjectOptions::default()).unwrap();
        // pt > 2 passes 2.5, 3.5, 9.0, 12.0; 12.0 overflows and is folded.
        assert_eq!(views[0].hist.entries, 4.0);
        assert_relative_eq!(views[0].hist.sum_of_weights(), 4.0);
        assert_eq!(views[0].hist.overflow, 0.0);
    }

    #[test]
    fn folding_disabled_keeps_flows() {
        let mut views = Booker::new()
            .book(&[HistParams::new("pt", "pt", "", "p_{T}", 5, 0.0, 10.0)])
            .unwrap();
        let opts =
            ProjectOptions { fold_overflow: false, fold_underflow: false, ..Default::default() };
        project(&store(), &mut views, &opts).unwrap();
        assert_eq!(views[0].hist.overflow, 1.0); // 12.0
        assert_relative_eq!(views[0].hist.sum_of_weights(), 5.0);
    }

    #[test]
    fn normalization_hits_target() {
        let mut views = Booker::new()
            .book(&[HistParams::new("pt", "pt", "", "p_{T}", 10, 0.0, 20.0)])
            .unwrap();
        let opts = ProjectOptions { normalize: Some(1.0), ..Default::default() };
        project(&store(), &mut views, &opts).unwrap();
        assert_relative_eq!(views[0].hist.sum_of_weights(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normalization_skips_empty_view() {
        let mut views = Booker::new()
            .book(&[HistParams::new("none", "pt", "pt > 1000", "p_{T}", 10, 0.0, 20.0)])
            .unwrap();
        let opts = ProjectOptions { normalize: Some(1.0), ..Default::default() };
        project(&store(), &mut views, &opts).unwrap();
        assert_eq!(views[0].hist.sum_of_weights(), 0.0);
    }

    #[test]
    fn row_cap_limits_scan() {
        let mut views = Booker::new()
            .book(&[HistParams::new("pt", "pt", "", "p_{T}", 10, 0.0, 20.0)])
            .unwrap();
        let opts = ProjectOptions { max_rows: 2, ..Default::default() };
        project(&store(), &mut views, &opts).unwrap();
        assert_eq!(views[0].hist.entries, 2.0);
    }

    #[test]
    fn missing_column_is_an_error() {
        let mut views = Booker::new()
            .book(&[HistParams::new("h", "phi", "", "phi", 10, 0.0, 1.0)])
            .unwrap();
        let err = project(&store(), &mut views, &ProjectOptions::default()).unwrap_err();
        assert!(err.to_string().contains("phi"));
    }

    #[test]
    fn profile_projection() {
        let mut views = Booker::new()
            .book_profiles(
                &[ProfileParams::new(
                    "prof", "pt", "", "p_{T}", 4, 0.0, 16.0, "eta", "#eta", -5.0, 5.0,
                )],
                ErrorMode::Spread,
            )
            .unwrap();
        project_profiles(&store(), &mut views, u64::MAX).unwrap();
        // Bin 0 covers pt in [0, 4): eta values 0.1, -0.3, 0.5, 2.0.
        assert_relative_eq!(views[0].hist.bin_mean(0), (0.1 - 0.3 + 0.5 + 2.0) / 4.0);
        assert_eq!(views[0].hist.entries, 6.0);
    }

    #[test]
    fn hist2d_projection_with_expression() {
        let mut views = Booker::new()
            .book_2d(&[Hist2dParams::new(
                "h2",
                "pt",
                "eta > -1",
                "p_{T}",
                4,
                0.0,
                16.0,
                "abs(eta)",
                "|#eta|",
                4,
                0.0,
                4.0,
            )])
            .unwrap();
        project_2d(&store(), &mut views, u64::MAX).unwrap();
        // eta > -1 drops the 9.0 row; remaining rows all land in range.
        assert_eq!(views[0].hist.entries, 5.0);
    }

    #[test]
    fn column_length_mismatch_rejected() {
        let mut s = EventStore::new();
        s.insert("a", vec![1.0, 2.0]).unwrap();
        assert!(s.insert("b", vec![1.0]).is_err());
    }
}
