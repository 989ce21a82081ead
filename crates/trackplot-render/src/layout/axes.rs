//! Axis tick generation and data→pixel mapping.
//!
//! Histogram axes keep their exact booked range; ticks are placed at nice
//! steps inside it rather than expanding the range to round numbers.

/// An axis with generated ticks.
#[derive(Debug, Clone)]
pub struct Axis {
    /// Lower data bound.
    pub min: f64,
    /// Upper data bound.
    pub max: f64,
    /// Logarithmic mapping.
    pub log: bool,
    /// Axis title.
    pub label: String,
    /// Primary ticks: position and label.
    pub ticks: Vec<(f64, String)>,
    /// Minor tick positions.
    pub minor_ticks: Vec<f64>,
}

impl Axis {
    /// Linear axis over the fixed range `[min, max]` with about
    /// `target_ticks` primary divisions.
    pub fn linear(min: f64, max: f64, target_ticks: usize) -> Self {
        let range = max - min;
        if !(range > 0.0) || !range.is_finite() {
            return Self { min, max, log: false, label: String::new(), ticks: Vec::new(), minor_ticks: Vec::new() };
        }
        let step = nice_step(range / target_ticks.max(2) as f64);
        let mut ticks = Vec::new();
        let mut v = (min / step).ceil() * step;
        let eps = step * 1e-6;
        while v <= max + eps {
            ticks.push((v, format_tick(v, step)));
            v += step;
        }

        let minor_step = step / 5.0;
        let mut minor = Vec::new();
        let mut mv = (min / minor_step).ceil() * minor_step;
        while mv <= max + eps {
            if !ticks.iter().any(|(t, _)| (t - mv).abs() < minor_step * 0.01) {
                minor.push(mv);
            }
            mv += minor_step;
        }

        Self { min, max, log: false, label: String::new(), ticks, minor_ticks: minor }
    }

    /// Logarithmic axis over the fixed range `[min, max]`; `min` must be
    /// positive (callers clamp). Primary ticks at powers of ten, minors at
    /// 2–9 within each decade.
    pub fn log(min: f64, max: f64) -> Self {
        let lo = min.max(1e-300);
        let hi = max.max(lo * 10.0);
        let first = lo.log10().ceil() as i32;
        let last = hi.log10().floor() as i32;

        let mut ticks = Vec::new();
        let mut minor = Vec::new();
        for exp in (first - 1)..=(last + 1) {
            let decade = 10.0_f64.powi(exp);
            if decade >= lo * (1.0 - 1e-9) && decade <= hi * (1.0 + 1e-9) {
                ticks.push((decade, format!("10{}", superscript(exp))));
            }
            for m in 2..=9 {
                let mv = m as f64 * decade;
                if mv > lo && mv < hi {
                    minor.push(mv);
                }
            }
        }

        Self { min: lo, max: hi, log: true, label: String::new(), ticks, minor_ticks: minor }
    }

    /// Attach an axis title.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Map a data value into pixel coordinates spanning `[px_min, px_max]`.
    pub fn data_to_pixel(&self, value: f64, px_min: f64, px_max: f64) -> f64 {
        let frac = if self.log {
            let v = value.max(1e-300).ln();
            let lo = self.min.max(1e-300).ln();
            let hi = self.max.max(1e-300).ln();
            (v - lo) / (hi - lo)
        } else {
            (value - self.min) / (self.max - self.min)
        };
        px_min + frac * (px_max - px_min)
    }
}

/// Pick a step of 1, 2 or 5 times a power of ten near `rough`.
fn nice_step(rough: f64) -> f64 {
    let exp = rough.abs().log10().floor();
    let base = 10.0_f64.powf(exp);
    let frac = rough / base;
    let nice = if frac <= 1.5 {
        1.0
    } else if frac <= 3.5 {
        2.0
    } else if frac <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice * base
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    if decimals == 0 {
        let v = if value.abs() < step * 0.01 { 0.0 } else { value };
        format!("{}", v.round() as i64)
    } else {
        format!("{value:.decimals$}")
    }
}

fn superscript(n: i32) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '-' => '\u{207B}',
            '0' => '\u{2070}',
            '1' => '\u{00B9}',
            '2' => '\u{00B2}',
            '3' => '\u{00B3}',
            '4' => '\u{2074}',
            '5' => '\u{2075}',
            '6' => '\u{2076}',
            '7' => '\u{2077}',
            '8' => '\u{2078}',
            '9' => '\u{2079}',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_keeps_exact_range() {
        let ax = Axis::linear(0.0, 10.0, 5);
        assert_eq!(ax.min, 0.0);
        assert_eq!(ax.max, 10.0);
        assert!(!ax.ticks.is_empty());
        for (t, _) in &ax.ticks {
            assert!(*t >= 0.0 && *t <= 10.0 + 1e-9);
        }
    }

    #[test]
    fn linear_mapping_endpoints() {
        let ax = Axis::linear(0.0, 100.0, 5);
        assert!((ax.data_to_pixel(0.0, 10.0, 110.0) - 10.0).abs() < 1e-9);
        assert!((ax.data_to_pixel(100.0, 10.0, 110.0) - 110.0).abs() < 1e-9);
        assert!((ax.data_to_pixel(50.0, 10.0, 110.0) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn inverted_pixel_range_flips() {
        // y axes map min to the bottom (larger pixel value).
        let ax = Axis::linear(0.0, 1.0, 5);
        let bottom = ax.data_to_pixel(0.0, 200.0, 20.0);
        let top = ax.data_to_pixel(1.0, 200.0, 20.0);
        assert!(bottom > top);
    }

    #[test]
    fn log_ticks_are_decades() {
        let ax = Axis::log(0.5, 2000.0);
        let positions: Vec<f64> = ax.ticks.iter().map(|(t, _)| *t).collect();
        assert!(positions.contains(&1.0));
        assert!(positions.contains(&10.0));
        assert!(positions.contains(&100.0));
        assert!(positions.contains(&1000.0));
    }

    #[test]
    fn log_mapping_is_monotonic() {
        let ax = Axis::log(1.0, 1000.0);
        let a = ax.data_to_pixel(1.0, 0.0, 300.0);
        let b = ax.data_to_pixel(10.0, 0.0, 300.0);
        let c = ax.data_to_pixel(100.0, 0.0, 300.0);
        assert!((b - a - (c - b)).abs() < 1e-9); // equal decade spacing
    }

    #[test]
    fn fractional_tick_labels() {
        let ax = Axis::linear(0.0, 1.0, 5);
        assert!(ax.ticks.iter().any(|(_, l)| l == "0.2" || l == "0.25"));
    }

    #[test]
    fn degenerate_range_has_no_ticks() {
        let ax = Axis::linear(1.0, 1.0, 5);
        assert!(ax.ticks.is_empty());
    }
}
