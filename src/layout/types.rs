use serde::Serialize;

use crate::record::TimelineEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Endpoint,
    Regular,
    Century,
    Epoch,
}

/// A gridline along the horizontal axis.
#[derive(Debug, Clone, Serialize)]
pub struct YearMarker {
    pub year: i32,
    /// Position along the axis, 0–100.
    pub percent: f64,
    pub kind: MarkerKind,
    pub is_important: bool,
    pub has_events: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineMetrics {
    pub width: f64,
    pub year_markers: Vec<YearMarker>,
    pub pixels_per_year: f64,
    pub span: i32,
    pub min_year: i32,
    pub max_year: i32,
}

/// Horizontal placement of one entry, in percent of the axis.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EntryPosition {
    pub start_percent: f64,
    pub end_percent: f64,
    pub width_percent: f64,
}

/// Lanes in use per entry kind; sizes the vertical bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LaneCounts {
    pub eras: usize,
    pub periods: usize,
    pub events: usize,
}

/// Full render-ready output of the layout pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineLayout {
    pub eras: Vec<TimelineEntry>,
    pub periods: Vec<TimelineEntry>,
    pub events: Vec<TimelineEntry>,
    pub metrics: TimelineMetrics,
    pub lane_counts: LaneCounts,
    pub height: f64,
    /// Records dropped at classification.
    pub rejected: usize,
}
