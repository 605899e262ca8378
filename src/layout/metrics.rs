use std::collections::HashSet;

use crate::config::{BandConfig, LayoutConfig, MarkerConfig, ScaleConfig};
use crate::era::EraTable;
use crate::record::TimelineEntry;

use super::types::{EntryPosition, LaneCounts, MarkerKind, TimelineMetrics, YearMarker};

/// Min/max year across all start and end years; `None` for an empty set.
pub fn year_range(entries: &[TimelineEntry]) -> Option<(i32, i32)> {
    let mut min_year = i32::MAX;
    let mut max_year = i32::MIN;
    for entry in entries {
        min_year = min_year.min(entry.start_year);
        max_year = max_year.max(entry.start_year);
        if let Some(end_year) = entry.end_year {
            min_year = min_year.min(end_year);
            max_year = max_year.max(end_year);
        }
    }
    if min_year > max_year { None } else { Some((min_year, max_year)) }
}

fn base_pixels_per_year(span: i32, scale: &ScaleConfig) -> f64 {
    scale
        .buckets
        .iter()
        .find(|bucket| span > bucket.min_span)
        .map(|bucket| bucket.pixels_per_year)
        .unwrap_or(scale.base_pixels_per_year)
}

/// Global horizontal scale for the whole entry set. Wide spans get fewer
/// pixels per year so the canvas stays manageable; dense timelines get a
/// multiplier so entries keep room; zoom scales the result linearly. The
/// final width never drops below the container width.
pub fn compute_metrics(
    entries: &[TimelineEntry],
    config: &LayoutConfig,
    eras: &EraTable,
    zoom: f64,
) -> TimelineMetrics {
    let Some((min_year, max_year)) = year_range(entries) else {
        return TimelineMetrics {
            width: config.container_width,
            year_markers: Vec::new(),
            pixels_per_year: 1.0,
            span: 0,
            min_year: 0,
            max_year: 0,
        };
    };
    let span = max_year - min_year;

    let mut pixels_per_year = base_pixels_per_year(span, &config.scale);
    let density = entries.len() as f64 / f64::from(span.max(1));
    if density > config.scale.high_density_threshold {
        pixels_per_year *= config.scale.high_density_factor;
    } else if density > config.scale.medium_density_threshold {
        pixels_per_year *= config.scale.medium_density_factor;
    }
    pixels_per_year *= zoom;

    let width = config.container_width.max(f64::from(span) * pixels_per_year);
    let year_markers = year_markers(min_year, max_year, width, entries, &config.markers, eras);

    TimelineMetrics { width, year_markers, pixels_per_year, span, min_year, max_year }
}

fn ceil_to_multiple(value: i64, step: i64) -> i64 {
    let rem = value.rem_euclid(step);
    if rem == 0 { value } else { value - rem + step }
}

/// Gridline markers between `min_year` and `max_year`: endpoints at both
/// extremes, regular markers at every multiple of a "nice" interval chosen
/// to land roughly one marker per `target_spacing` pixels, and century/epoch
/// markers wherever the grid has not already claimed the year.
pub fn year_markers(
    min_year: i32,
    max_year: i32,
    timeline_width: f64,
    entries: &[TimelineEntry],
    config: &MarkerConfig,
    eras: &EraTable,
) -> Vec<YearMarker> {
    let span = i64::from(max_year) - i64::from(min_year);
    let span_divisor = f64::from((max_year - min_year).max(1));
    let mut markers: Vec<YearMarker> = Vec::new();

    let max_markers = ((timeline_width / config.target_spacing).floor() as i64).max(1);
    let raw_interval = span.div_euclid(max_markers)
        + i64::from(span.rem_euclid(max_markers) != 0);
    let interval = config
        .nice_intervals
        .iter()
        .copied()
        .find(|nice| *nice >= raw_interval)
        .unwrap_or(raw_interval)
        .max(1);
    let quarter_interval = interval as f64 / 4.0;

    let event_years: HashSet<i32> = entries.iter().map(|e| e.start_year).collect();
    let near_event = |year: i32| {
        event_years.contains(&year)
            || event_years
                .iter()
                .any(|event_year| (event_year - year).abs() <= config.event_proximity_years)
    };

    // Century turns and era boundaries are anchors the grid should respect.
    let mut important_years: Vec<(i32, MarkerKind)> = Vec::new();
    let mut century = min_year.div_euclid(100) * 100;
    while century <= max_year {
        if century >= min_year {
            important_years.push((century, MarkerKind::Century));
        }
        century += 100;
    }
    for epoch in eras.epoch_years() {
        if epoch >= min_year && epoch <= max_year {
            important_years.push((epoch, MarkerKind::Epoch));
        }
    }

    markers.push(YearMarker {
        year: min_year,
        percent: 0.0,
        kind: MarkerKind::Endpoint,
        is_important: false,
        has_events: false,
    });

    let mut grid_year = ceil_to_multiple(i64::from(min_year), interval);
    while grid_year < i64::from(max_year) {
        let year = grid_year as i32;
        let percent = f64::from(year - min_year) / span_divisor * 100.0;
        let is_important = important_years
            .iter()
            .any(|(important, _)| f64::from((important - year).abs()) <= quarter_interval);
        markers.push(YearMarker {
            year,
            percent,
            kind: MarkerKind::Regular,
            is_important,
            has_events: near_event(year),
        });
        grid_year += interval;
    }

    // Important years off the regular grid still get their own marker.
    for (year, kind) in important_years {
        let claimed = markers
            .iter()
            .any(|marker| f64::from((marker.year - year).abs()) <= quarter_interval);
        if !claimed {
            markers.push(YearMarker {
                year,
                percent: f64::from(year - min_year) / span_divisor * 100.0,
                kind,
                is_important: true,
                has_events: event_years.contains(&year),
            });
        }
    }

    markers.push(YearMarker {
        year: max_year,
        percent: 100.0,
        kind: MarkerKind::Endpoint,
        is_important: false,
        has_events: false,
    });

    markers.sort_by_key(|marker| marker.year);
    markers
}

/// Maps an entry's years into percent of the axis. Point events and very
/// short ranges keep a minimum visible width of 1%.
pub fn entry_position(entry: &TimelineEntry, min_year: i32, span: i32) -> EntryPosition {
    let span_divisor = f64::from(span.max(1));
    let start_percent = f64::from(entry.start_year - min_year) / span_divisor * 100.0;
    let end_percent = match entry.end_year {
        Some(end_year) => f64::from(end_year - min_year) / span_divisor * 100.0,
        None => start_percent,
    };
    EntryPosition {
        start_percent,
        end_percent,
        width_percent: (end_percent - start_percent).max(1.0),
    }
}

/// Vertical size of the canvas: one band per kind, scaled by its lane count,
/// plus the main axis and outer padding.
pub fn timeline_height(counts: LaneCounts, bands: &BandConfig) -> f64 {
    let era_band = counts.eras as f64 * bands.era_row_height + bands.era_padding;
    let period_band = counts.periods as f64 * bands.period_row_height + bands.period_padding;
    let event_band = counts.events as f64 * bands.event_row_height + bands.event_padding;
    era_band + period_band + event_band + bands.base_padding
}
