//! # trackplot-render
//!
//! Drawing layer for `trackplot-hist` views: an SVG canvas, the pad and
//! draw-context objects, the shared cosmetic conventions (axis headroom,
//! experiment label, palette and stat-box placement), and canvas export to
//! PDF/PNG/SVG.

pub mod canvas;
pub mod color;
pub mod config;
pub mod context;
pub mod label;
pub mod layout;
pub mod output;
pub mod pad;
pub mod plots;
pub mod primitives;
pub mod text;

use thiserror::Error;

/// Rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A draw call received no views.
    #[error("nothing to draw: {0}")]
    EmptyDraw(&'static str),
    /// Configuration error (YAML parse, bad values).
    #[error("config error: {0}")]
    Config(String),
    /// I/O error writing output files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// PNG encoding error.
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    Png(String),
    /// PDF conversion error.
    #[cfg(feature = "pdf")]
    #[error("PDF conversion error: {0}")]
    Pdf(String),
}

/// Result alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

pub use config::{PlotConfig, resolve_config};
pub use context::DrawContext;
pub use output::save;
pub use pad::Pad;
pub use plots::hist::{HistDrawOpts, draw_hist, draw_hists};
pub use plots::hist2d::{Hist2dDrawOpts, draw_hist2d};
pub use plots::profile::{ProfileDrawOpts, draw_profile, draw_profiles};
pub use plots::draw_view;
