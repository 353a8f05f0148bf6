//! Daily attendance resolution.
//!
//! This module composes lateness classification and punch pairing into a
//! [`DailyRecord`] for one employee-day. It is a pure function of the day's
//! punches and the configured shift start and penalty tiers.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceWarning, DailyRecord};

use super::late_penalty::{late_minutes, late_penalty};
use super::punch_pairing::pair_punches;

/// Resolves one calendar-day group of punches into a [`DailyRecord`].
///
/// The day's first punch drives lateness: the shift start instant is built
/// from that punch's calendar date at the configured time of day, and a
/// first punch after it (with sub-minute grace) incurs the tiered penalty.
/// Remaining punches pair positionally into worked intervals; an odd punch
/// count drops the trailing punch from hours and attaches a warning, but is
/// not fatal. A single-punch day yields zero hours yet still classifies
/// lateness from that punch.
///
/// # Arguments
///
/// * `date` - The calendar date of this group
/// * `punches` - The group's punches, sorted ascending, all on `date`
/// * `config` - The shift start and penalty tier configuration
///
/// # Returns
///
/// The immutable [`DailyRecord`], or `CalculationError` if the group is
/// empty. Grouping never produces an empty group, so hitting that error
/// indicates a caller bug.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::resolve_day;
/// use payroll_engine::config::ConfigLoader;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let p = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let config = ConfigLoader::default();
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// let record = resolve_day(date, &[p("2026-01-15 14:10:00"), p("2026-01-15 18:10:00")], &config)
///     .unwrap();
///
/// assert_eq!(record.late_minutes, 10);
/// assert_eq!(record.penalty, Decimal::new(50, 0));
/// assert_eq!(record.worked_hours, Decimal::new(400, 2)); // 4.00
/// ```
pub fn resolve_day(
    date: NaiveDate,
    punches: &[NaiveDateTime],
    config: &ConfigLoader,
) -> EngineResult<DailyRecord> {
    let first = punches
        .first()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("empty day group for {}", date),
        })?;

    let minutes = late_minutes(*first, config.shift_start());
    let penalty = late_penalty(minutes, &config.config().penalty);

    let pairing = pair_punches(punches);
    let mut warnings = Vec::new();
    if pairing.unpaired.is_some() {
        warnings.push(AttendanceWarning::incomplete_pair(date, punches.len()));
    }

    Ok(DailyRecord {
        date,
        first_punch: first.time(),
        late_minutes: minutes,
        penalty,
        worked_hours: pairing.worked_hours(),
        warnings,
    })
}
