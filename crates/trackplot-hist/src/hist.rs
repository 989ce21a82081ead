//! Histogram data model: 1D, profile, and 2D accumulators.
//!
//! Uniform binning only. Per-bin sums of weights and squared weights are
//! tracked so statistical errors survive scaling and flow folding.

use serde::{Deserialize, Serialize};

/// A 1D histogram with explicit underflow/overflow accumulators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hist1d {
    /// Internal identifier (unique per booking counter).
    pub name: String,
    /// X-axis title.
    pub xtitle: String,
    /// Y-axis title (set at draw time).
    pub ytitle: String,
    /// Number of in-range bins.
    pub nbins: usize,
    /// Lower edge of the axis.
    pub xlow: f64,
    /// Upper edge of the axis.
    pub xup: f64,
    /// Sum of weights per bin.
    pub content: Vec<f64>,
    /// Sum of squared weights per bin.
    pub sumw2: Vec<f64>,
    /// Sum of weights below the axis range.
    pub underflow: f64,
    /// Sum of weights above the axis range.
    pub overflow: f64,
    /// Sum of squared weights below range.
    pub underflow_sumw2: f64,
    /// Sum of squared weights above range.
    pub overflow_sumw2: f64,
    /// Number of fill calls (flow fills included).
    pub entries: f64,
}

impl Hist1d {
    /// New empty histogram. Binning is assumed validated by the caller.
    pub fn new(name: impl Into<String>, xtitle: impl Into<String>, nbins: usize, xlow: f64, xup: f64) -> Self {
        Self {
            name: name.into(),
            xtitle: xtitle.into(),
            ytitle: String::new(),
            nbins,
            xlow,
            xup,
            content: vec![0.0; nbins],
            sumw2: vec![0.0; nbins],
            underflow: 0.0,
            overflow: 0.0,
            underflow_sumw2: 0.0,
            overflow_sumw2: 0.0,
            entries: 0.0,
        }
    }

    /// Width of one bin.
    pub fn bin_width(&self) -> f64 {
        (self.xup - self.xlow) / self.nbins as f64
    }

    /// Center of bin `i`.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.xlow + (i as f64 + 0.5) * self.bin_width()
    }

    /// Low edge of bin `i` (`i == nbins` gives the upper axis edge).
    pub fn bin_edge(&self, i: usize) -> f64 {
        self.xlow + i as f64 * self.bin_width()
    }

    /// In-range bin index for `x`, or `None` for under/overflow.
    pub fn find_bin(&self, x: f64) -> Option<usize> {
        if !x.is_finite() || x < self.xlow || x >= self.xup {
            return None;
        }
        let i = ((x - self.xlow) / self.bin_width()) as usize;
        Some(i.min(self.nbins - 1))
    }

    /// Fill with unit weight.
    pub fn fill(&mut self, x: f64) {
        self.fill_weighted(x, 1.0);
    }

    /// Fill with weight `w`. Out-of-range values land in the flow
    /// accumulators; every call counts as one entry.
    pub fn fill_weighted(&mut self, x: f64, w: f64) {
        if !x.is_finite() {
            return;
        }
        self.entries += 1.0;
        let w2 = w * w;
        if x < self.xlow {
            self.underflow += w;
            self.underflow_sumw2 += w2;
        } else if x >= self.xup {
            self.overflow += w;
            self.overflow_sumw2 += w2;
        } else if let Some(i) = self.find_bin(x) {
            self.content[i] += w;
            self.sumw2[i] += w2;
        }
    }

    /// Statistical error of bin `i` (`sqrt` of the summed squared weights).
    pub fn bin_error(&self, i: usize) -> f64 {
        self.sumw2[i].sqrt()
    }

    /// Sum of weights over the in-range bins.
    pub fn sum_of_weights(&self) -> f64 {
        self.content.iter().sum()
    }

    /// Largest in-range bin content.
    pub fn maximum(&self) -> f64 {
        self.content.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest positive bin content (log-scale floor); `None` if all bins
    /// are empty or negative.
    pub fn minimum_positive(&self) -> Option<f64> {
        self.content.iter().copied().filter(|&c| c > 0.0).fold(None, |acc, c| {
            Some(match acc {
                Some(m) if m < c => m,
                _ => c,
            })
        })
    }

    /// Scale contents, errors and flow accumulators by `f`.
    pub fn scale(&mut self, f: f64) {
        for c in &mut self.content {
            *c *= f;
        }
        for w2 in &mut self.sumw2 {
            *w2 *= f * f;
        }
        self.underflow *= f;
        self.overflow *= f;
        self.underflow_sumw2 *= f * f;
        self.overflow_sumw2 *= f * f;
    }

    /// Fold positive overflow into the last bin, combining errors in
    /// quadrature, and zero the overflow accumulator. No-op when the
    /// overflow is empty, so repeated folding is idempotent. The entry
    /// count is left untouched.
    pub fn fold_overflow(&mut self) {
        if self.overflow > 0.0 {
            let last = self.nbins - 1;
            self.content[last] += self.overflow;
            self.sumw2[last] += self.overflow_sumw2;
            self.overflow = 0.0;
            self.overflow_sumw2 = 0.0;
        }
    }

    /// Fold positive underflow into the first bin. Symmetric to
    /// [`fold_overflow`](Self::fold_overflow).
    pub fn fold_underflow(&mut self) {
        if self.underflow > 0.0 {
            self.content[0] += self.underflow;
            self.sumw2[0] += self.underflow_sumw2;
            self.underflow = 0.0;
            self.underflow_sumw2 = 0.0;
        }
    }

    /// Weighted mean of the bin centers.
    pub fn mean(&self) -> f64 {
        let sumw = self.sum_of_weights();
        if sumw == 0.0 {
            return 0.0;
        }
        let s: f64 = (0..self.nbins).map(|i| self.bin_center(i) * self.content[i]).sum();
        s / sumw
    }

    /// Weighted standard deviation of the bin centers.
    pub fn std_dev(&self) -> f64 {
        let sumw = self.sum_of_weights();
        if sumw == 0.0 {
            return 0.0;
        }
        let mean = self.mean();
        let s: f64 = (0..self.nbins)
            .map(|i| {
                let d = self.bin_center(i) - mean;
                d * d * self.content[i]
            })
            .sum();
        (s / sumw).max(0.0).sqrt()
    }
}

/// Error convention for profile bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorMode {
    /// Bin error is the spread (standard deviation) of the profiled values.
    #[default]
    Spread,
    /// Bin error is the error on the mean (spread / sqrt(n)).
    MeanError,
}

/// A profile histogram: per x-bin mean and spread of a second quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile1d {
    /// Internal identifier.
    pub name: String,
    /// X-axis title.
    pub xtitle: String,
    /// Y-axis title.
    pub ytitle: String,
    /// Number of x bins.
    pub nbins: usize,
    /// Lower edge of the x axis.
    pub xlow: f64,
    /// Upper edge of the x axis.
    pub xup: f64,
    /// Profiled values below this are ignored.
    pub ylow: f64,
    /// Profiled values above this are ignored.
    pub yup: f64,
    /// Accepted entry count per bin.
    pub count: Vec<f64>,
    /// Sum of profiled values per bin.
    pub sum_y: Vec<f64>,
    /// Sum of squared profiled values per bin.
    pub sum_y2: Vec<f64>,
    /// Total accepted entries.
    pub entries: f64,
    /// Error convention.
    pub error_mode: ErrorMode,
}

impl Profile1d {
    /// New empty profile.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        xtitle: impl Into<String>,
        ytitle: impl Into<String>,
        nbins: usize,
        xlow: f64,
        xup: f64,
        ylow: f64,
        yup: f64,
    ) -> Self {
        Self {
            name: name.into(),
            xtitle: xtitle.into(),
            ytitle: ytitle.into(),
            nbins,
            xlow,
            xup,
            ylow,
            yup,
            count: vec![0.0; nbins],
            sum_y: vec![0.0; nbins],
            sum_y2: vec![0.0; nbins],
            entries: 0.0,
            error_mode: ErrorMode::Spread,
        }
    }

    /// Width of one x bin.
    pub fn bin_width(&self) -> f64 {
        (self.xup - self.xlow) / self.nbins as f64
    }

    /// Center of x bin `i`.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.xlow + (i as f64 + 0.5) * self.bin_width()
    }

    /// Accumulate `(x, y)`. Rows with `x` outside the axis or `y` outside
    /// `[ylow, yup]` are ignored.
    pub fn fill(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() || x < self.xlow || x >= self.xup {
            return;
        }
        if y < self.ylow || y > self.yup {
            return;
        }
        let i = (((x - self.xlow) / self.bin_width()) as usize).min(self.nbins - 1);
        self.count[i] += 1.0;
        self.sum_y[i] += y;
        self.sum_y2[i] += y * y;
        self.entries += 1.0;
    }

    /// Mean of the profiled quantity in bin `i`; 0 for empty bins.
    pub fn bin_mean(&self, i: usize) -> f64 {
        if self.count[i] > 0.0 { self.sum_y[i] / self.count[i] } else { 0.0 }
    }

    /// Spread (standard deviation) of the profiled quantity in bin `i`.
    pub fn bin_spread(&self, i: usize) -> f64 {
        if self.count[i] <= 0.0 {
            return 0.0;
        }
        let mean = self.bin_mean(i);
        (self.sum_y2[i] / self.count[i] - mean * mean).max(0.0).sqrt()
    }

    /// Bin error under the configured [`ErrorMode`].
    pub fn bin_error(&self, i: usize) -> f64 {
        match self.error_mode {
            ErrorMode::Spread => self.bin_spread(i),
            ErrorMode::MeanError => {
                if self.count[i] > 0.0 {
                    self.bin_spread(i) / self.count[i].sqrt()
                } else {
                    0.0
                }
            }
        }
    }

    /// Largest bin mean.
    pub fn maximum(&self) -> f64 {
        (0..self.nbins).map(|i| self.bin_mean(i)).fold(f64::NEG_INFINITY, f64::max)
    }
}

/// A 2D histogram with uniform x/y binning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hist2d {
    /// Internal identifier.
    pub name: String,
    /// X-axis title.
    pub xtitle: String,
    /// Y-axis title.
    pub ytitle: String,
    /// Number of x bins.
    pub nbinsx: usize,
    /// Lower edge of the x axis.
    pub xlow: f64,
    /// Upper edge of the x axis.
    pub xup: f64,
    /// Number of y bins.
    pub nbinsy: usize,
    /// Lower edge of the y axis.
    pub ylow: f64,
    /// Upper edge of the y axis.
    pub yup: f64,
    /// Sum of weights per cell, row-major (`iy * nbinsx + ix`).
    pub content: Vec<f64>,
    /// Accepted entries.
    pub entries: f64,
}

impl Hist2d {
    /// New empty 2D histogram.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        xtitle: impl Into<String>,
        ytitle: impl Into<String>,
        nbinsx: usize,
        xlow: f64,
        xup: f64,
        nbinsy: usize,
        ylow: f64,
        yup: f64,
    ) -> Self {
        Self {
            name: name.into(),
            xtitle: xtitle.into(),
            ytitle: ytitle.into(),
            nbinsx,
            xlow,
            xup,
            nbinsy,
            ylow,
            yup,
            content: vec![0.0; nbinsx * nbinsy],
            entries: 0.0,
        }
    }

    /// Width of one x bin.
    pub fn bin_width_x(&self) -> f64 {
        (self.xup - self.xlow) / self.nbinsx as f64
    }

    /// Width of one y bin.
    pub fn bin_width_y(&self) -> f64 {
        (self.yup - self.ylow) / self.nbinsy as f64
    }

    /// Accumulate `(x, y)` with weight `w`; out-of-range rows are dropped.
    pub fn fill_weighted(&mut self, x: f64, y: f64, w: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        if x < self.xlow || x >= self.xup || y < self.ylow || y >= self.yup {
            return;
        }
        let ix = (((x - self.xlow) / self.bin_width_x()) as usize).min(self.nbinsx - 1);
        let iy = (((y - self.ylow) / self.bin_width_y()) as usize).min(self.nbinsy - 1);
        self.content[iy * self.nbinsx + ix] += w;
        self.entries += 1.0;
    }

    /// Accumulate `(x, y)` with unit weight.
    pub fn fill(&mut self, x: f64, y: f64) {
        self.fill_weighted(x, y, 1.0);
    }

    /// Cell content at `(ix, iy)`.
    pub fn bin_content(&self, ix: usize, iy: usize) -> f64 {
        self.content[iy * self.nbinsx + ix]
    }

    /// Largest cell content.
    pub fn maximum(&self) -> f64 {
        self.content.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest positive cell content; `None` when every cell is empty.
    pub fn minimum_positive(&self) -> Option<f64> {
        self.content.iter().copied().filter(|&c| c > 0.0).fold(None, |acc, c| {
            Some(match acc {
                Some(m) if m < c => m,
                _ => c,
            })
        })
    }

    /// Weighted mean of x bin centers.
    pub fn mean_x(&self) -> f64 {
        self.projected_mean(true)
    }

    /// Weighted mean of y bin centers.
    pub fn mean_y(&self) -> f64 {
        self.projected_mean(false)
    }

    fn projected_mean(&self, along_x: bool) -> f64 {
        let mut sumw = 0.0;
        let mut s = 0.0;
        for iy in 0..self.nbinsy {
            for ix in 0..self.nbinsx {
                let w = self.content[iy * self.nbinsx + ix];
                let c = if along_x {
                    self.xlow + (ix as f64 + 0.5) * self.bin_width_x()
                } else {
                    self.ylow + (iy as f64 + 0.5) * self.bin_width_y()
                };
                sumw += w;
                s += c * w;
            }
        }
        if sumw == 0.0 { 0.0 } else { s / sumw }
    }
}
