use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::era::EraTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// One step of the span-to-scale function: spans wider than `min_span` years
/// are drawn at `pixels_per_year`. Buckets are checked in order, widest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleBucket {
    pub min_span: i32,
    pub pixels_per_year: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Scale for spans narrower than every bucket.
    pub base_pixels_per_year: f64,
    pub buckets: Vec<ScaleBucket>,
    /// Entries-per-year thresholds above which crowded timelines get more room.
    pub high_density_threshold: f64,
    pub high_density_factor: f64,
    pub medium_density_threshold: f64,
    pub medium_density_factor: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            base_pixels_per_year: 12.0,
            buckets: vec![
                ScaleBucket { min_span: 2000, pixels_per_year: 0.8 },
                ScaleBucket { min_span: 1000, pixels_per_year: 1.2 },
                ScaleBucket { min_span: 500, pixels_per_year: 2.0 },
                ScaleBucket { min_span: 100, pixels_per_year: 4.0 },
                ScaleBucket { min_span: 50, pixels_per_year: 8.0 },
            ],
            high_density_threshold: 1.0,
            high_density_factor: 1.5,
            medium_density_threshold: 0.5,
            medium_density_factor: 1.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Target pixel distance between gridline markers.
    pub target_spacing: f64,
    /// "Nice" year intervals, ascending; the smallest one that still meets
    /// the target spacing wins.
    pub nice_intervals: Vec<i64>,
    /// A marker is flagged `has_events` if an entry starts within this many
    /// years of it.
    pub event_proximity_years: i32,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            target_spacing: 100.0,
            nice_intervals: vec![1, 2, 5, 10, 20, 25, 50, 100, 200, 250, 500, 1000, 2000, 2500, 5000],
            event_proximity_years: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneConfig {
    /// Minimum year separation between same-lane neighbors.
    pub gap_years: i32,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self { gap_years: 5 }
    }
}

/// Vertical sizing of the three stacked bands (eras above the axis, periods
/// in the middle, events below).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandConfig {
    pub era_row_height: f64,
    pub era_padding: f64,
    pub period_row_height: f64,
    pub period_padding: f64,
    pub event_row_height: f64,
    pub event_padding: f64,
    /// Main axis plus outer padding.
    pub base_padding: f64,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            era_row_height: 45.0,
            era_padding: 60.0,
            period_row_height: 35.0,
            period_padding: 40.0,
            event_row_height: 100.0,
            event_padding: 80.0,
            base_padding: 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZoomConfig {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self { min: 0.5, max: 5.0 }
    }
}

impl ZoomConfig {
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_container_width")]
    pub container_width: f64,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub scale: ScaleConfig,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default)]
    pub lanes: LaneConfig,
    #[serde(default)]
    pub bands: BandConfig,
}

fn default_container_width() -> f64 {
    1200.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container_width: default_container_width(),
            zoom: ZoomConfig::default(),
            scale: ScaleConfig::default(),
            markers: MarkerConfig::default(),
            lanes: LaneConfig::default(),
            bands: BandConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub eras: EraTable,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    layout: Option<LayoutConfig>,
    #[serde(default)]
    eras: Option<EraTable>,
}

/// Loads a JSON config file, falling back to defaults for anything the file
/// leaves out. `None` yields the full default config.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(layout) = parsed.layout {
        config.layout = layout;
    }
    if let Some(eras) = parsed.eras {
        config.eras = eras;
    }
    Ok(config)
}
