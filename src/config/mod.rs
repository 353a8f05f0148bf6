//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load payroll rules from a YAML
//! file: the shift start time, the tiered late-penalty rates, and the
//! default hourly rate. Every knob defaults to the engine's built-in
//! policy, so a missing or partial file still yields a working config.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Shift starts at {}", loader.shift_start());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, PenaltyTiers, ShiftConfig};
