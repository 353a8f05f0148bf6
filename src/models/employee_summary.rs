//! Employee summary model.
//!
//! This module defines the [`EmployeeSummary`] aggregating all daily records
//! for one employee into totals and a net pay figure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceWarning, DailyRecord};

/// Aggregated payroll figures for one employee.
///
/// Net pay may be negative when penalties exceed base pay. That is a valid,
/// reportable outcome, not an error.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeSummary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let summary = EmployeeSummary {
///     source_id: "alice.xlsx".to_string(),
///     total_hours: Decimal::from_str("4.00").unwrap(),
///     base_pay: Decimal::from_str("200.00").unwrap(),
///     total_penalty: Decimal::from_str("50").unwrap(),
///     net_pay: Decimal::from_str("150.00").unwrap(),
///     daily_records: vec![],
///     warnings: vec![],
/// };
/// assert_eq!(summary.net_pay, summary.base_pay - summary.total_penalty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Identifier of the source this summary was computed from.
    pub source_id: String,
    /// Sum of rounded daily worked hours. Not re-rounded after summation.
    pub total_hours: Decimal,
    /// Total hours multiplied by the hourly rate.
    pub base_pay: Decimal,
    /// Sum of daily late penalties.
    pub total_penalty: Decimal,
    /// Base pay minus total penalty. May be negative.
    pub net_pay: Decimal,
    /// Per-day records in date order, for detail display.
    pub daily_records: Vec<DailyRecord>,
    /// Source-level anomalies (e.g. an empty punch set).
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
    fn test_negative_net_pay_is_representable() {
        let summary = EmployeeSummary {
            source_id: "late_worker.xlsx".to_string(),
            total_hours: dec("1.00"),
            base_pay: dec("50.00"),
            total_penalty: dec("450"),
            net_pay: dec("-400.00"),
            daily_records: vec![],
            warnings: vec![],
        };

        assert!(summary.net_pay < Decimal::ZERO);
        assert_eq!(summary.net_pay, summary.base_pay - summary.total_penalty);
    }

    #[test]
    fn test_employee_summary_serialization() {
        let summary = EmployeeSummary {
            source_id: "alice.xlsx".to_string(),
            total_hours: dec("10.5"),
            base_pay: dec("525.0"),
            total_penalty: dec("160"),
            net_pay: dec("365.0"),
            daily_records: vec![],
            warnings: vec![],
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"source_id\":\"alice.xlsx\""));
        assert!(json.contains("\"total_hours\":\"10.5\""));
        assert!(json.contains("\"net_pay\":\"365.0\""));

        let deserialized: EmployeeSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
