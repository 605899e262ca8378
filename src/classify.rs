use log::warn;
use thiserror::Error;

use crate::config::SortDirection;
use crate::date::{format_display_date, parse_date};
use crate::record::{EntryKind, TimelineEntry, TimelineRecord};

/// Why a record was excluded from the render set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("no kind flag set (is_era / is_period / is_event)")]
    NoKind,
    #[error("more than one kind flag set")]
    ConflictingKinds,
    #[error("missing {field} for {kind:?} record")]
    MissingDate { kind: EntryKind, field: &'static str },
    #[error("unparseable {field}: {value:?}")]
    UnparseableDate { field: &'static str, value: String },
}

fn record_kind(record: &TimelineRecord) -> Result<EntryKind, RejectReason> {
    match (record.is_era, record.is_period, record.is_event) {
        (true, false, false) => Ok(EntryKind::Era),
        (false, true, false) => Ok(EntryKind::Period),
        (false, false, true) => Ok(EntryKind::Event),
        (false, false, false) => Err(RejectReason::NoKind),
        _ => Err(RejectReason::ConflictingKinds),
    }
}

/// Validating factory: turns a raw record into a `TimelineEntry` or rejects
/// it. Records with zero or multiple kind flags are invalid, as are records
/// whose required date is missing or matches none of the date grammars. An
/// unparseable optional end date is ignored rather than fatal.
pub fn classify_record(record: &TimelineRecord) -> Result<TimelineEntry, RejectReason> {
    let kind = record_kind(record)?;

    let (start_field, start_raw) = match kind {
        EntryKind::Event => ("event_date", record.event_date.as_deref()),
        EntryKind::Era | EntryKind::Period => ("starting_date", record.starting_date.as_deref()),
    };
    let start_raw = start_raw
        .filter(|s| !s.trim().is_empty())
        .ok_or(RejectReason::MissingDate { kind, field: start_field })?;
    let start = parse_date(start_raw).ok_or_else(|| RejectReason::UnparseableDate {
        field: start_field,
        value: start_raw.to_string(),
    })?;

    let end = if kind.is_ranged() {
        record.end_date.as_deref().and_then(parse_date)
    } else {
        None
    };

    let end_year = end.map(|d| d.year);
    let display_date = match (kind.is_ranged(), record.end_date.as_deref(), end) {
        (true, Some(end_raw), Some(_)) => format!(
            "{} - {}",
            format_display_date(start_raw),
            format_display_date(end_raw)
        ),
        _ => format_display_date(start_raw),
    };

    Ok(TimelineEntry {
        id: record.id,
        name: record.name.clone(),
        description: record.description.clone(),
        kind,
        start_year: start.year,
        end_year,
        duration: end_year.map(|end| end - start.year),
        sort_key: start.day_number(),
        display_date,
        lane: 0,
    })
}

/// Classifies a batch of records, dropping the invalid ones. Each drop is
/// logged with the record id and reason; the count comes back so callers can
/// assert on it or surface a diagnostic.
pub fn classify_records(records: &[TimelineRecord]) -> (Vec<TimelineEntry>, usize) {
    let mut entries = Vec::with_capacity(records.len());
    let mut rejected = 0usize;
    for record in records {
        match classify_record(record) {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                warn!(
                    "dropping timeline record {} ({:?}): {}",
                    record.id, record.name, reason
                );
                rejected += 1;
            }
        }
    }
    (entries, rejected)
}

#[derive(Debug, Clone, Default)]
pub struct PartitionedEntries {
    pub eras: Vec<TimelineEntry>,
    pub periods: Vec<TimelineEntry>,
    pub events: Vec<TimelineEntry>,
}

pub fn separate_by_kind(entries: Vec<TimelineEntry>) -> PartitionedEntries {
    let mut parts = PartitionedEntries::default();
    for entry in entries {
        match entry.kind {
            EntryKind::Era => parts.eras.push(entry),
            EntryKind::Period => parts.periods.push(entry),
            EntryKind::Event => parts.events.push(entry),
        }
    }
    parts
}

/// Stable chronological sort; ties keep their arrival order.
pub fn sort_entries(entries: &mut [TimelineEntry], direction: SortDirection) {
    match direction {
        SortDirection::Asc => entries.sort_by_key(|e| e.sort_key),
        SortDirection::Desc => entries.sort_by_key(|e| std::cmp::Reverse(e.sort_key)),
    }
}
