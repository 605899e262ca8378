use serde::{Deserialize, Serialize};

/// A persisted timeline record as fetched from the campaign store. Exactly
/// one of the three kind flags is expected to be true; the date fields are
/// populated according to that kind. The shape is not trusted: classification
/// (`classify.rs`) turns it into a `TimelineEntry` or rejects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineRecord {
    pub id: i64,
    #[serde(default)]
    pub game_id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_era: bool,
    #[serde(default)]
    pub is_period: bool,
    #[serde(default)]
    pub is_event: bool,
    #[serde(default)]
    pub starting_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Era,
    Period,
    Event,
}

impl EntryKind {
    /// Eras and periods span a range of years; events are points in time.
    pub fn is_ranged(self) -> bool {
        !matches!(self, Self::Event)
    }
}

/// A classified, render-ready timeline entry. Immutable after construction
/// except for `lane`, which is populated by the lane-assignment pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub kind: EntryKind,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub duration: Option<i32>,
    /// Civil day number of the earliest relevant date, used for ordering.
    pub sort_key: i64,
    pub display_date: String,
    pub lane: usize,
}

impl TimelineEntry {
    /// End year for overlap checks; point events end where they start.
    pub fn effective_end_year(&self) -> i32 {
        self.end_year.unwrap_or(self.start_year)
    }
}
