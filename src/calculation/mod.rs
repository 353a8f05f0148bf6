//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for turning raw
//! punches into pay: grouping punches by calendar day, classifying lateness
//! against the shift start and applying the tiered penalty, pairing punches
//! into worked intervals, resolving one employee-day into a record, and
//! aggregating records into per-employee and batch summaries.

mod aggregate;
mod daily_attendance;
mod day_grouping;
mod late_penalty;
mod punch_pairing;

pub use aggregate::{aggregate_all, aggregate_employee};
pub use daily_attendance::resolve_day;
pub use day_grouping::group_by_day;
pub use late_penalty::{late_minutes, late_penalty};
pub use punch_pairing::{PairingResult, PunchPair, pair_punches};
