pub mod classify;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod date;
pub mod era;
pub mod layout;
pub mod record;
pub mod validate;

pub use classify::{RejectReason, classify_record, classify_records};
pub use config::{Config, LayoutConfig, SortDirection, load_config};
pub use era::{EraDefinition, EraTable};
pub use layout::{TimelineLayout, TimelineMetrics, YearMarker, compute_timeline_layout};
pub use record::{EntryKind, TimelineEntry, TimelineRecord};

#[cfg(feature = "cli")]
pub use cli::run;
