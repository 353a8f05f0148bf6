//! Payroll batch summary model.
//!
//! This module defines the [`PayrollSummary`] produced by a payroll run and
//! the [`SkippedSource`] entries recording sources that failed and were
//! excluded from the batch.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeSummary;

/// A source that could not be processed and was skipped.
///
/// One bad source never aborts the batch; it is recorded here with a
/// message naming what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSource {
    /// Identifier of the failing source.
    pub source_id: String,
    /// Why the source was skipped.
    pub message: String,
}

/// The result of aggregating a whole batch of punch sources.
///
/// Owns one [`EmployeeSummary`] per successfully processed source plus the
/// grand total of net pay across the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Per-employee summaries, in input order.
    pub employees: Vec<EmployeeSummary>,
    /// Sources that failed and were excluded from the totals.
    #[serde(default)]
    pub skipped: Vec<SkippedSource>,
    /// Sum of net pay across all employee summaries.
    pub grand_total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn summary(source_id: &str, net_pay: Decimal) -> EmployeeSummary {
        EmployeeSummary {
            source_id: source_id.to_string(),
            total_hours: dec("8.00"),
            base_pay: dec("400.00"),
            total_penalty: Decimal::ZERO,
            net_pay,
            daily_records: vec![],
            warnings: vec![],
        }
    }

    #[test]
    fn test_grand_total_equals_sum_of_net_pay() {
        let employees = vec![
            summary("a.xlsx", dec("150.00")),
            summary("b.xlsx", dec("-20.00")),
            summary("c.xlsx", dec("400.00")),
        ];

        let grand_total: Decimal = employees.iter().map(|e| e.net_pay).sum();
        assert_eq!(grand_total, dec("530.00"));

        let payroll = PayrollSummary {
            employees,
            skipped: vec![],
            grand_total,
        };
        let recomputed: Decimal = payroll.employees.iter().map(|e| e.net_pay).sum();
        assert_eq!(payroll.grand_total, recomputed);
    }

    #[test]
    fn test_payroll_summary_serialization() {
        let payroll = PayrollSummary {
            employees: vec![summary("a.xlsx", dec("150.00"))],
            skipped: vec![SkippedSource {
                source_id: "broken.xlsx".to_string(),
                message: "unparseable timestamp".to_string(),
            }],
            grand_total: dec("150.00"),
        };

        let json = serde_json::to_string(&payroll).unwrap();
        assert!(json.contains("\"employees\":["));
        assert!(json.contains("\"skipped\":["));
        assert!(json.contains("\"grand_total\":\"150.00\""));

        let deserialized: PayrollSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(payroll, deserialized);
    }
}
