//! Payroll calculation engine for shift workers.
//!
//! This crate derives daily worked hours and late-arrival penalties from raw
//! time-clock punches, then aggregates per-employee summaries into a payroll
//! batch with a grand total.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
