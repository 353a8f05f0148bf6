//! Calendar-day grouping of punches.
//!
//! This module partitions one employee's punches into per-day groups. The
//! groups are the unit the daily attendance resolver works on; they are
//! derived, not stored, and live for one resolution pass.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Partitions punches into calendar-day groups.
///
/// Punches are sorted ascending first, so each group's internal order is
/// chronological regardless of input order, and groups are emitted in date
/// order. An empty input produces no groups.
///
/// # Arguments
///
/// * `punches` - One employee's punches, in any order
///
/// # Returns
///
/// One `(date, punches)` entry per calendar day that has at least one punch,
/// ordered by date.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::group_by_day;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let punches = vec![
///     NaiveDateTime::parse_from_str("2026-01-16 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-15 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-15 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ];
///
/// let groups = group_by_day(&punches);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].0, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
/// assert_eq!(groups[0].1.len(), 2);
/// ```
pub fn group_by_day(punches: &[NaiveDateTime]) -> Vec<(NaiveDate, Vec<NaiveDateTime>)> {
    let mut sorted = punches.to_vec();
    sorted.sort();

    let mut groups: BTreeMap<NaiveDate, Vec<NaiveDateTime>> = BTreeMap::new();
    for punch in sorted {
        groups.entry(punch.date()).or_default().push(punch);
    }

    groups.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn punch(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_input_produces_no_groups() {
        assert!(group_by_day(&[]).is_empty());
    }

    #[test]
    fn test_single_day_single_group() {
        let punches = vec![punch("2026-01-15 14:00:00"), punch("2026-01-15 18:00:00")];
        let groups = group_by_day(&punches);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, date("2026-01-15"));
        assert_eq!(groups[0].1, punches);
    }

    #[test]
    fn test_groups_emitted_in_date_order() {
        let punches = vec![
            punch("2026-01-17 14:00:00"),
            punch("2026-01-15 14:00:00"),
            punch("2026-01-16 14:00:00"),
        ];
        let groups = group_by_day(&punches);

        let dates: Vec<NaiveDate> = groups.iter().map(|(d, _)| *d).collect();
        assert_eq!(
            dates,
            vec![date("2026-01-15"), date("2026-01-16"), date("2026-01-17")]
        );
    }

    #[test]
    fn test_unsorted_input_sorted_within_group() {
        let punches = vec![
            punch("2026-01-15 22:00:00"),
            punch("2026-01-15 14:00:00"),
            punch("2026-01-15 18:00:00"),
        ];
        let groups = group_by_day(&punches);

        assert_eq!(
            groups[0].1,
            vec![
                punch("2026-01-15 14:00:00"),
                punch("2026-01-15 18:00:00"),
                punch("2026-01-15 22:00:00"),
            ]
        );
    }

    #[test]
    fn test_midnight_punch_belongs_to_its_calendar_date() {
        // Punches after midnight group under the following date; overnight
        // shifts are not treated as one continuous period.
        let punches = vec![punch("2026-01-15 23:30:00"), punch("2026-01-16 00:30:00")];
        let groups = group_by_day(&punches);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, date("2026-01-15"));
        assert_eq!(groups[1].0, date("2026-01-16"));
    }
}
