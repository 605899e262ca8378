use once_cell::sync::Lazy;
use regex::Regex;

static ISO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(-?\d{1,4})-(\d{2})-(\d{2})$").unwrap());
static GERMAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(-?\d{1,4})$").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(-?\d{1,4})$").unwrap());

/// A plain calendar date. Years may be negative (in-world pre-epoch years);
/// there is no year-zero special case, it is an ordinary integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Civil day number relative to 1970-01-01, valid across year 0.
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }
}

fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let m = i64::from(month);
    let d = i64::from(day);
    let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Parses one of the three accepted date grammars: ISO `YYYY-MM-DD`,
/// localized `DD.MM.YYYY`, or a bare `YYYY`. Year-only input defaults to
/// January 1st. Returns `None` for anything else; never panics.
pub fn parse_date(value: &str) -> Option<CalendarDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(caps) = ISO_RE.captures(value) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return checked_date(year, month, day);
    }

    if let Some(caps) = GERMAN_RE.captures(value) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        return checked_date(year, month, day);
    }

    if let Some(caps) = YEAR_RE.captures(value) {
        let year: i32 = caps[1].parse().ok()?;
        return Some(CalendarDate { year, month: 1, day: 1 });
    }

    None
}

fn checked_date(year: i32, month: u32, day: u32) -> Option<CalendarDate> {
    if month == 0 || month > 12 || day == 0 || day > 31 {
        return None;
    }
    Some(CalendarDate { year, month, day })
}

/// Renders a parseable date as zero-padded `DD.MM.YYYY`. Unparseable input
/// is returned unchanged (fallback, not an error).
pub fn format_display_date(value: &str) -> String {
    let Some(date) = parse_date(value) else {
        return value.to_string();
    };
    format!("{:02}.{:02}.{}", date.day, date.month, date.year)
}

/// Year component of a date string, or `0` if unparseable.
pub fn extract_year(value: &str) -> i32 {
    parse_date(value).map(|d| d.year).unwrap_or(0)
}

pub fn is_valid_date_string(value: &str) -> bool {
    parse_date(value).is_some()
}

/// Absolute day difference between two date strings; 0 if either fails to parse.
pub fn days_between(start: &str, end: &str) -> i64 {
    match (parse_date(start), parse_date(end)) {
        (Some(a), Some(b)) => (b.day_number() - a.day_number()).abs(),
        _ => 0,
    }
}

/// Absolute year difference between two date strings; 0 if either fails to parse.
pub fn years_between(start: &str, end: &str) -> i32 {
    match (parse_date(start), parse_date(end)) {
        (Some(a), Some(b)) => (b.year - a.year).abs(),
        _ => 0,
    }
}
