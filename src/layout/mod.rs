mod lanes;
mod metrics;
pub(crate) mod types;

pub use lanes::{assign_lanes, lane_count};
pub use metrics::{compute_metrics, entry_position, timeline_height, year_markers, year_range};
pub use types::*;

use crate::classify::{classify_records, separate_by_kind, sort_entries};
use crate::config::{LayoutConfig, SortDirection};
use crate::era::EraTable;
use crate::record::TimelineRecord;

/// Full pipeline over raw records: classify, partition by kind, sort in the
/// requested direction, assign lanes per partition, then derive the global
/// scale, gridline markers and vertical size. Pure: same records, same
/// config, same output.
pub fn compute_timeline_layout(
    records: &[TimelineRecord],
    eras: &EraTable,
    config: &LayoutConfig,
    zoom: f64,
    direction: SortDirection,
) -> TimelineLayout {
    let (mut entries, rejected) = classify_records(records);
    sort_entries(&mut entries, direction);
    let metrics = compute_metrics(&entries, config, eras, zoom);

    let mut parts = separate_by_kind(entries);
    assign_lanes(&mut parts.eras, config.lanes.gap_years);
    assign_lanes(&mut parts.periods, config.lanes.gap_years);
    assign_lanes(&mut parts.events, config.lanes.gap_years);

    let lane_counts = LaneCounts {
        eras: lane_count(&parts.eras),
        periods: lane_count(&parts.periods),
        events: lane_count(&parts.events),
    };
    let height = timeline_height(lane_counts, &config.bands);

    TimelineLayout {
        eras: parts.eras,
        periods: parts.periods,
        events: parts.events,
        metrics,
        lane_counts,
        height,
        rejected,
    }
}
