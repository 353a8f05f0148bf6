//! Lateness classification and tiered penalty calculation.
//!
//! This module computes how many whole minutes late a day's first punch is
//! against the configured shift start, and the deduction that lateness
//! incurs.
//!
//! ## Rate Structure
//!
//! **The late penalty is calculated in two tiers (defaults shown):**
//! - First 30 late minutes: 5 currency units per minute
//! - Beyond 30 minutes: 10 currency units per minute, on top of the full
//!   first-tier cost
//!
//! Lateness is floored to whole minutes, so a first punch up to 59 seconds
//! after the shift start counts as 0 late minutes and incurs no penalty.

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::config::PenaltyTiers;

/// Computes whole minutes of lateness for a day's first punch.
///
/// The shift start instant is built from the first punch's own calendar
/// date at the given time of day. A punch at or before the shift start is
/// not late (strict `>` comparison); afterwards, elapsed seconds are floored
/// to whole minutes.
///
/// # Arguments
///
/// * `first_punch` - The day's earliest punch
/// * `shift_start` - The configured shift start time of day
///
/// # Returns
///
/// The number of whole minutes late, zero when on time.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::late_minutes;
/// use chrono::{NaiveDateTime, NaiveTime};
///
/// let start = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
///
/// // 59 seconds late floors to 0 - the grace policy.
/// let first = NaiveDateTime::parse_from_str("2026-01-15 14:00:59", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(late_minutes(first, start), 0);
///
/// // 60 seconds late is 1 minute.
/// let first = NaiveDateTime::parse_from_str("2026-01-15 14:01:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(late_minutes(first, start), 1);
/// ```
pub fn late_minutes(first_punch: NaiveDateTime, shift_start: NaiveTime) -> u32 {
    let shift_start_instant = first_punch.date().and_time(shift_start);

    if first_punch <= shift_start_instant {
        return 0;
    }

    // num_minutes truncates, which floors a positive delta.
    (first_punch - shift_start_instant).num_minutes() as u32
}

/// Calculates the tiered late penalty for a number of late minutes.
///
/// Minutes up to and including the tier threshold are charged at the
/// first-tier rate; minutes beyond it at the second-tier rate. The tiers
/// are strictly cumulative: once the second tier applies, the full
/// first-tier cost is included as well.
///
/// # Arguments
///
/// * `late_minutes` - Whole minutes late, as computed by [`late_minutes`]
/// * `tiers` - The configured tier threshold and per-minute rates
///
/// # Returns
///
/// The deduction in currency units. Zero when not late.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::late_penalty;
/// use payroll_engine::config::PenaltyTiers;
/// use rust_decimal::Decimal;
///
/// let tiers = PenaltyTiers::default();
/// assert_eq!(late_penalty(10, &tiers), Decimal::new(50, 0));
/// assert_eq!(late_penalty(30, &tiers), Decimal::new(150, 0));
/// // 30 minutes at 5/min plus 30 more at 10/min.
/// assert_eq!(late_penalty(60, &tiers), Decimal::new(450, 0));
/// ```
pub fn late_penalty(late_minutes: u32, tiers: &PenaltyTiers) -> Decimal {
    if late_minutes == 0 {
        return Decimal::ZERO;
    }

    if late_minutes <= tiers.threshold_minutes {
        Decimal::from(late_minutes) * tiers.tier1_per_minute
    } else {
        let tier1 = Decimal::from(tiers.threshold_minutes) * tiers.tier1_per_minute;
        let tier2 =
            Decimal::from(late_minutes - tiers.threshold_minutes) * tiers.tier2_per_minute;
        tier1 + tier2
    }
}
