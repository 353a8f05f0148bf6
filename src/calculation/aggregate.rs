//! Per-employee and batch payroll aggregation.
//!
//! This module drives the daily attendance resolver over every calendar day
//! of an employee's punches, sums the results into an [`EmployeeSummary`],
//! and combines summaries across sources into a [`PayrollSummary`] with a
//! grand total. Sources are processed independently: a failing source is
//! recorded and skipped, never aborting the batch.

use rust_decimal::Decimal;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceWarning, DailyRecord, EmployeeSummary, PayrollSummary, PunchSource, SkippedSource,
};

use super::daily_attendance::resolve_day;
use super::day_grouping::group_by_day;

/// Aggregates one employee's punches into an [`EmployeeSummary`].
///
/// Punches are sorted, grouped by calendar day, and each group resolved into
/// a [`DailyRecord`]; daily hours and penalties sum into the employee totals
/// and `net_pay = total_hours * hourly_rate - total_penalty`. Total hours
/// accumulate from the rounded daily figures and are not re-rounded.
///
/// An empty punch set is not an error: it yields a zeroed summary carrying
/// an `EMPTY_PUNCH_SET` warning.
///
/// # Arguments
///
/// * `source` - The employee's punches tagged with a source id
/// * `hourly_rate` - Currency units per worked hour; must be positive
/// * `config` - Shift start and penalty tier configuration
///
/// # Returns
///
/// The employee summary with its daily records in date order, or
/// `InvalidHourlyRate` when the rate is zero or negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::aggregate_employee;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::PunchSource;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let p = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let source = PunchSource {
///     source_id: "alice.xlsx".to_string(),
///     punches: vec![p("2026-01-15 14:10:00"), p("2026-01-15 18:10:00")],
/// };
///
/// let summary =
///     aggregate_employee(&source, Decimal::new(50, 0), &ConfigLoader::default()).unwrap();
/// assert_eq!(summary.net_pay, Decimal::new(15000, 2)); // 200 base - 50 penalty
/// ```
pub fn aggregate_employee(
    source: &PunchSource,
    hourly_rate: Decimal,
    config: &ConfigLoader,
) -> EngineResult<EmployeeSummary> {
    if hourly_rate <= Decimal::ZERO {
        return Err(EngineError::InvalidHourlyRate { rate: hourly_rate });
    }

    let mut warnings = Vec::new();
    if source.punches.is_empty() {
        warnings.push(AttendanceWarning::empty_punch_set(&source.source_id));
    }

    let punches = source.sorted_punches();
    let mut daily_records: Vec<DailyRecord> = Vec::new();
    for (date, day_punches) in group_by_day(&punches) {
        daily_records.push(resolve_day(date, &day_punches, config)?);
    }

    let total_hours: Decimal = daily_records.iter().map(|r| r.worked_hours).sum();
    let total_penalty: Decimal = daily_records.iter().map(|r| r.penalty).sum();
    let base_pay = total_hours * hourly_rate;
    let net_pay = base_pay - total_penalty;

    Ok(EmployeeSummary {
        source_id: source.source_id.clone(),
        total_hours,
        base_pay,
        total_penalty,
        net_pay,
        daily_records,
        warnings,
    })
}

/// Aggregates a batch of punch sources into a [`PayrollSummary`].
///
/// Each source is aggregated independently; a source that fails becomes a
/// [`SkippedSource`] entry and the rest of the batch proceeds. The grand
/// total is the plain sum of net pay over the successful summaries, so it
/// does not depend on processing order.
///
/// # Arguments
///
/// * `sources` - One entry per employee/uploaded file
/// * `hourly_rate` - Currency units per worked hour; must be positive
/// * `config` - Shift start and penalty tier configuration
///
/// # Returns
///
/// The batch summary, or `InvalidHourlyRate` when the rate is zero or
/// negative. A bad rate would fail every source identically, so it is
/// rejected up front rather than reported once per source.
pub fn aggregate_all(
    sources: &[PunchSource],
    hourly_rate: Decimal,
    config: &ConfigLoader,
) -> EngineResult<PayrollSummary> {
    if hourly_rate <= Decimal::ZERO {
        return Err(EngineError::InvalidHourlyRate { rate: hourly_rate });
    }

    let mut employees = Vec::new();
    let mut skipped = Vec::new();

    for source in sources {
        match aggregate_employee(source, hourly_rate, config) {
            Ok(summary) => employees.push(summary),
            Err(err) => skipped.push(SkippedSource {
                source_id: source.source_id.clone(),
                message: err.to_string(),
            }),
        }
    }

    let grand_total: Decimal = employees.iter().map(|e| e.net_pay).sum();

    Ok(PayrollSummary {
        employees,
        skipped,
        grand_total,
    })
}
