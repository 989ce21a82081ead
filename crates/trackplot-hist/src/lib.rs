//! # trackplot-hist
//!
//! Histogram booking and projection for track-trigger analysis plots.
//!
//! The typical pipeline: build parameter records ([`HistParams`],
//! [`ProfileParams`], [`Hist2dParams`]), book views through a [`Booker`],
//! fill them from an [`EventStore`] with [`project`], then hand the views to
//! `trackplot-render` for drawing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod booking;
pub mod error;
pub mod expr;
pub mod hist;
pub mod manifest;
pub mod params;
pub mod project;
pub mod style;

pub use booking::{Booker, Hist1dView, Hist2dView, MaxBin, ProfileView, View, get_maximum};
pub use error::{HistError, Result};
pub use expr::Expr;
pub use hist::{ErrorMode, Hist1d, Hist2d, Profile1d};
pub use manifest::read_file_manifest;
pub use params::{Hist2dParams, HistParams, ProfileParams};
pub use project::{EventStore, ProjectOptions, project, project_2d, project_profiles};
pub use style::{Color, DrawStyle, LinePattern, MarkerShape};
