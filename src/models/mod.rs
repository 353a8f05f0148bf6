//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod daily_record;
mod employee_summary;
mod payroll_summary;
mod punch;

pub use daily_record::{AttendanceWarning, DailyRecord};
pub use employee_summary::EmployeeSummary;
pub use payroll_summary::{PayrollSummary, SkippedSource};
pub use punch::PunchSource;
