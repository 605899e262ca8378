use std::path::Path;

use chronogram::config::SortDirection;
use chronogram::{EraTable, LayoutConfig, TimelineEntry, TimelineLayout, TimelineRecord, compute_timeline_layout};

fn load_fixture(path: &Path) -> Vec<TimelineRecord> {
    let input = std::fs::read_to_string(path).expect("fixture read failed");
    serde_json::from_str(&input).expect("fixture parse failed")
}

fn assert_partition_lanes(entries: &[TimelineEntry], gap: i32, fixture: &str) {
    for (i, a) in entries.iter().enumerate() {
        for b in entries.iter().skip(i + 1) {
            if a.lane != b.lane {
                continue;
            }
            let separated = a.effective_end_year() < b.start_year - gap
                || b.effective_end_year() < a.start_year - gap;
            assert!(
                separated,
                "{fixture}: entries {} and {} share lane {} inside the {gap}-year gap",
                a.id, b.id, a.lane
            );
        }
    }
}

fn assert_valid_layout(layout: &TimelineLayout, config: &LayoutConfig, fixture: &str) {
    let gap = config.lanes.gap_years;
    assert_partition_lanes(&layout.eras, gap, fixture);
    assert_partition_lanes(&layout.periods, gap, fixture);
    assert_partition_lanes(&layout.events, gap, fixture);

    assert!(
        layout.metrics.width >= config.container_width,
        "{fixture}: width shrank below the container"
    );
    let markers = &layout.metrics.year_markers;
    assert!(
        markers.windows(2).all(|pair| pair[0].year <= pair[1].year),
        "{fixture}: markers out of order"
    );
    if !markers.is_empty() {
        assert_eq!(markers.first().unwrap().year, layout.metrics.min_year, "{fixture}");
        assert_eq!(markers.last().unwrap().year, layout.metrics.max_year, "{fixture}");
    }
    for marker in markers {
        assert!(
            (0.0..=100.0).contains(&marker.percent),
            "{fixture}: marker percent out of range"
        );
    }
}

#[test]
fn layout_all_fixtures() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");

    // Keep this list explicit so new fixtures must be added intentionally.
    // (fixture, expected rejected records)
    let candidates = [
        ("basic.json", 0),
        ("overlap.json", 0),
        ("sparse.json", 0),
        ("malformed.json", 3),
        ("negative_years.json", 0),
        ("empty.json", 0),
    ];

    let config = LayoutConfig::default();
    let eras = EraTable::default();

    for (rel, expected_rejected) in candidates {
        let path = root.join(rel);
        assert!(path.exists(), "fixture missing: {rel}");
        let records = load_fixture(&path);
        let layout = compute_timeline_layout(&records, &eras, &config, 1.0, SortDirection::Asc);
        assert_eq!(layout.rejected, expected_rejected, "{rel}: rejected count");
        assert_eq!(
            layout.eras.len() + layout.periods.len() + layout.events.len(),
            records.len() - expected_rejected,
            "{rel}: entry count"
        );
        assert_valid_layout(&layout, &config, rel);
    }
}

#[test]
fn layouts_serialize_to_json() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let records = load_fixture(&root.join("basic.json"));
    let layout = compute_timeline_layout(
        &records,
        &EraTable::default(),
        &LayoutConfig::default(),
        1.0,
        SortDirection::Asc,
    );
    let json = serde_json::to_string_pretty(&layout).expect("layout serialization failed");
    assert!(json.contains("\"year_markers\""));
    assert!(json.contains("\"pixels_per_year\""));
}

#[test]
fn zooming_in_widens_every_fixture_with_entries() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let config = LayoutConfig::default();
    let eras = EraTable::default();
    for rel in ["basic.json", "overlap.json", "negative_years.json"] {
        let records = load_fixture(&root.join(rel));
        let at_1 = compute_timeline_layout(&records, &eras, &config, 1.0, SortDirection::Asc);
        let at_3 = compute_timeline_layout(&records, &eras, &config, 3.0, SortDirection::Asc);
        assert!(
            at_3.metrics.pixels_per_year > at_1.metrics.pixels_per_year,
            "{rel}: zoom did not scale"
        );
        assert!(at_3.metrics.width >= at_1.metrics.width, "{rel}: zoom shrank width");
    }
}
