use serde::Serialize;

use crate::date::parse_date;
use crate::record::TimelineRecord;

/// Authoring-flow validation result. Unlike classification, which stops at
/// the first problem, this collects every issue so an editor can show all of
/// them at once.
#[derive(Debug, Clone, Serialize)]
pub struct RecordValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub fn validate_record(record: &TimelineRecord) -> RecordValidation {
    let mut errors = Vec::new();

    if record.name.trim().is_empty() {
        errors.push("name is required".to_string());
    }
    if record.description.trim().is_empty() {
        errors.push("description is required".to_string());
    }

    let flags = [record.is_era, record.is_period, record.is_event];
    let active = flags.iter().filter(|f| **f).count();
    if active == 0 {
        errors.push("at least one kind flag (is_era / is_period / is_event) must be set".to_string());
    }
    if active > 1 {
        errors.push("only one kind flag may be set".to_string());
    }

    if record.is_event {
        match record.event_date.as_deref() {
            None | Some("") => errors.push("event_date is required for events".to_string()),
            Some(date) if parse_date(date).is_none() => {
                errors.push("event_date has an invalid format".to_string())
            }
            _ => {}
        }
    }

    if record.is_era || record.is_period {
        match record.starting_date.as_deref() {
            None | Some("") => {
                errors.push("starting_date is required for eras and periods".to_string())
            }
            Some(date) if parse_date(date).is_none() => {
                errors.push("starting_date has an invalid format".to_string())
            }
            _ => {}
        }
        if let Some(end) = record.end_date.as_deref() {
            if !end.is_empty() && parse_date(end).is_none() {
                errors.push("end_date has an invalid format".to_string());
            }
        }
    }

    RecordValidation { is_valid: errors.is_empty(), errors }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvalidRecord {
    pub record: TimelineRecord,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: Vec<TimelineRecord>,
    pub invalid: Vec<InvalidRecord>,
    pub summary: ValidationSummary,
}

pub fn validate_records(records: &[TimelineRecord]) -> ValidationReport {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();
    for record in records {
        let validation = validate_record(record);
        if validation.is_valid {
            valid.push(record.clone());
        } else {
            invalid.push(InvalidRecord { record: record.clone(), errors: validation.errors });
        }
    }
    ValidationReport {
        summary: ValidationSummary {
            total: records.len(),
            valid: valid.len(),
            invalid: invalid.len(),
        },
        valid,
        invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_record() -> TimelineRecord {
        TimelineRecord {
            id: 1,
            game_id: 1,
            created_at: None,
            name: String::new(),
            description: String::new(),
            is_era: false,
            is_period: false,
            is_event: false,
            starting_date: None,
            end_date: None,
            event_date: None,
        }
    }

    #[test]
    fn collects_all_errors_at_once() {
        let validation = validate_record(&blank_record());
        assert!(!validation.is_valid);
        assert_eq!(validation.errors.len(), 3); // name, description, no flag
    }

    #[test]
    fn flags_conflicting_kinds() {
        let mut record = blank_record();
        record.name = "x".to_string();
        record.description = "y".to_string();
        record.is_era = true;
        record.is_event = true;
        let validation = validate_record(&record);
        assert!(validation.errors.iter().any(|e| e.contains("only one kind flag")));
    }

    #[test]
    fn checks_date_formats_per_kind() {
        let mut record = blank_record();
        record.name = "x".to_string();
        record.description = "y".to_string();
        record.is_period = true;
        record.starting_date = Some("1000".to_string());
        record.end_date = Some("whenever".to_string());
        let validation = validate_record(&record);
        assert_eq!(validation.errors, vec!["end_date has an invalid format".to_string()]);
    }

    #[test]
    fn accepts_well_formed_records() {
        let mut record = blank_record();
        record.name = "Founding".to_string();
        record.description = "The city is founded".to_string();
        record.is_event = true;
        record.event_date = Some("1200-05-01".to_string());
        assert!(validate_record(&record).is_valid);
    }

    #[test]
    fn batch_report_counts() {
        let mut good = blank_record();
        good.name = "a".to_string();
        good.description = "b".to_string();
        good.is_event = true;
        good.event_date = Some("1200".to_string());
        let report = validate_records(&[good, blank_record()]);
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.valid, 1);
        assert_eq!(report.summary.invalid, 1);
        assert_eq!(report.invalid[0].errors.len(), 3);
    }
}
