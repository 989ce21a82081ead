//! Plot configuration: figure geometry, fonts, margins, stat box, and the
//! experiment label text. All fields have defaults matching the
//! collaboration drawing conventions; a YAML document can override any
//! subset.

use serde::Deserialize;

/// Top-level plot configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Figure geometry.
    pub figure: FigureConfig,
    /// Font sizes.
    pub font: FontConfig,
    /// Pad margins as fractions of the figure size.
    pub margins: MarginsConfig,
    /// Axis tick settings.
    pub axes: AxesConfig,
    /// Stat-box placement (normalized device coordinates).
    pub stats: StatsConfig,
    /// Experiment label text.
    pub experiment: ExperimentConfig,
    /// Output encoding settings.
    pub output: OutputConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            figure: FigureConfig::default(),
            font: FontConfig::default(),
            margins: MarginsConfig::default(),
            axes: AxesConfig::default(),
            stats: StatsConfig::default(),
            experiment: ExperimentConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Figure geometry in points.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 504.0,  // 7.0" * 72
            height: 432.0, // 6.0" * 72
        }
    }
}

/// Font sizes in points.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// General text.
    pub size: f64,
    /// Axis titles.
    pub label_size: f64,
    /// Tick labels.
    pub tick_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { size: 10.0, label_size: 12.0, tick_size: 9.0 }
    }
}

/// Pad margins as fractions of the canvas.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarginsConfig {
    /// Left margin fraction.
    pub left: f64,
    /// Right margin fraction.
    pub right: f64,
    /// Top margin fraction.
    pub top: f64,
    /// Bottom margin fraction.
    pub bottom: f64,
}

impl Default for MarginsConfig {
    fn default() -> Self {
        Self { left: 0.16, right: 0.05, top: 0.08, bottom: 0.13 }
    }
}

/// Axis tick settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    /// Target number of primary divisions per axis.
    pub divisions: usize,
    /// Primary tick length in points (drawn inward).
    pub tick_length: f64,
    /// Minor tick length in points.
    pub minor_tick_length: f64,
    /// Mirror ticks on the top edge.
    pub show_top_ticks: bool,
    /// Mirror ticks on the right edge.
    pub show_right_ticks: bool,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            divisions: 5,
            tick_length: 5.0,
            minor_tick_length: 3.0,
            show_top_ticks: true,
            show_right_ticks: true,
        }
    }
}

/// Stat-box placement: upper-right corner plus extent, in NDC.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Right edge.
    pub x2: f64,
    /// Top edge.
    pub y2: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self { x2: 0.94, y2: 0.93, w: 0.24, h: 0.20 }
    }
}

/// Experiment label text.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Experiment name, drawn bold.
    pub name: String,
    /// Qualifier after the name, drawn italic.
    pub qualifier: String,
    /// Luminosity text at the top right; empty draws nothing there.
    pub lumi_text: String,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            name: "CMS".into(),
            qualifier: "Preliminary Phase II Simulation".into(),
            lumi_text: String::new(),
        }
    }
}

/// Output encoding settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Raster resolution for PNG export.
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dpi: 220 }
    }
}

/// Resolve a [`PlotConfig`] from an optional YAML document; user values
/// override the defaults field by field.
pub fn resolve_config(user_yaml: Option<&str>) -> crate::Result<PlotConfig> {
    match user_yaml {
        None => Ok(PlotConfig::default()),
        Some(yaml) => {
            serde_yaml_ng::from_str(yaml).map_err(|e| crate::RenderError::Config(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventions() {
        let c = PlotConfig::default();
        assert_eq!(c.margins.right, 0.05);
        assert_eq!(c.stats.x2, 0.94);
        assert_eq!(c.experiment.name, "CMS");
        assert!(c.experiment.lumi_text.is_empty());
    }

    #[test]
    fn yaml_overrides_subset() {
        let yaml = "experiment:\n  name: TRACKER\nmargins:\n  right: 0.10\n";
        let c = resolve_config(Some(yaml)).unwrap();
        assert_eq!(c.experiment.name, "TRACKER");
        assert_eq!(c.margins.right, 0.10);
        // untouched fields keep defaults
        assert_eq!(c.margins.left, 0.16);
        assert_eq!(c.figure.width, 504.0);
    }

    #[test]
    fn bad_yaml_is_config_error() {
        let err = resolve_config(Some("{ unclosed")).unwrap_err();
        assert!(matches!(err, crate::RenderError::Config(_)));
    }
}
