//! Axis, plot-area and legend layout.

pub mod axes;
pub mod legend;
pub mod margins;
