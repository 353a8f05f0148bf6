//! Daily attendance record model.
//!
//! This module defines the [`DailyRecord`] produced by the daily attendance
//! resolver for one employee-day, and the [`AttendanceWarning`] type used to
//! surface non-fatal anomalies.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-fatal anomaly detected during attendance resolution.
///
/// Warnings indicate issues that don't prevent calculation but must be
/// surfaced to the caller rather than silently swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceWarning {
    /// A code identifying the type of warning (e.g. "INCOMPLETE_PAIR").
    pub code: String,
    /// A human-readable description naming the affected source or day.
    pub message: String,
}

impl AttendanceWarning {
    /// Warning for a day whose punch count is odd, meaning the trailing
    /// punch could not be paired and was dropped from hours computation.
    pub fn incomplete_pair(date: NaiveDate, punch_count: usize) -> Self {
        Self {
            code: "INCOMPLETE_PAIR".to_string(),
            message: format!(
                "Day {} has {} punches; only complete in/out pairs count towards hours",
                date, punch_count
            ),
        }
    }

    /// Warning for an employee source that contained no punches at all.
    pub fn empty_punch_set(source_id: &str) -> Self {
        Self {
            code: "EMPTY_PUNCH_SET".to_string(),
            message: format!(
                "Source '{}' contains no punches; zero hours and zero pay recorded",
                source_id
            ),
        }
    }
}

/// The resolver output for one employee-day.
///
/// Created once per calendar day group and immutable after creation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DailyRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = DailyRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     first_punch: NaiveTime::from_hms_opt(14, 10, 0).unwrap(),
///     late_minutes: 10,
///     penalty: Decimal::from_str("50").unwrap(),
///     worked_hours: Decimal::from_str("4.00").unwrap(),
///     warnings: vec![],
/// };
/// assert_eq!(record.late_minutes, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The calendar date this record covers.
    pub date: NaiveDate,
    /// Time of day of the first punch (used for lateness classification).
    pub first_punch: NaiveTime,
    /// Whole minutes late against the shift start, floored. Zero when on time.
    pub late_minutes: u32,
    /// Late penalty deducted for this day.
    pub penalty: Decimal,
    /// Total worked hours for the day, rounded to 2 decimal places.
    pub worked_hours: Decimal,
    /// Anomalies detected while resolving this day (e.g. an unpaired punch).
    #[serde(default)]
    pub warnings: Vec<AttendanceWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_incomplete_pair_warning_names_date_and_count() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let warning = AttendanceWarning::incomplete_pair(date, 3);

        assert_eq!(warning.code, "INCOMPLETE_PAIR");
        assert!(warning.message.contains("2026-01-15"));
        assert!(warning.message.contains("3 punches"));
    }

    #[test]
    fn test_empty_punch_set_warning_names_source() {
        let warning = AttendanceWarning::empty_punch_set("bob.xlsx");

        assert_eq!(warning.code, "EMPTY_PUNCH_SET");
        assert!(warning.message.contains("bob.xlsx"));
    }

    #[test]
    fn test_daily_record_serialization() {
        let record = DailyRecord {
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            first_punch: NaiveTime::from_hms_opt(14, 10, 0).unwrap(),
            late_minutes: 10,
            penalty: dec("50"),
            worked_hours: dec("4.00"),
            warnings: vec![],
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: DailyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_daily_record_deserialization_defaults_warnings() {
        let json = r#"{
            "date": "2026-01-15",
            "first_punch": "14:10:00",
            "late_minutes": 10,
            "penalty": "50",
            "worked_hours": "4.00"
        }"#;

        let record: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.late_minutes, 10);
        assert!(record.warnings.is_empty());
    }
}
