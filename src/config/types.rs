//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Defaults match the
//! engine's built-in policy: shift start 14:00, 30-minute penalty threshold
//! at 5/minute, 10/minute beyond, hourly rate 50.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The configured start of the (single) shift schedule.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ShiftConfig {
    /// Hour of day the shift starts (0-23).
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    /// Minute the shift starts (0-59).
    #[serde(default = "default_start_minute")]
    pub start_minute: u32,
}

fn default_start_hour() -> u32 {
    14
}

fn default_start_minute() -> u32 {
    0
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            start_minute: default_start_minute(),
        }
    }
}

/// The tiered late-penalty rates.
///
/// Minutes up to and including the threshold are charged at the first-tier
/// rate; minutes beyond it at the second-tier rate. The tiers are
/// cumulative: the full first-tier cost is always included once the second
/// tier applies.
#[derive(Debug, Clone, Deserialize)]
pub struct PenaltyTiers {
    /// Late minutes charged at the first-tier rate.
    #[serde(default = "default_threshold_minutes")]
    pub threshold_minutes: u32,
    /// Currency units deducted per late minute within the threshold.
    #[serde(default = "default_tier1_per_minute")]
    pub tier1_per_minute: Decimal,
    /// Currency units deducted per late minute beyond the threshold.
    #[serde(default = "default_tier2_per_minute")]
    pub tier2_per_minute: Decimal,
}

fn default_threshold_minutes() -> u32 {
    30
}

fn default_tier1_per_minute() -> Decimal {
    Decimal::new(5, 0)
}

fn default_tier2_per_minute() -> Decimal {
    Decimal::new(10, 0)
}

impl Default for PenaltyTiers {
    fn default() -> Self {
        Self {
            threshold_minutes: default_threshold_minutes(),
            tier1_per_minute: default_tier1_per_minute(),
            tier2_per_minute: default_tier2_per_minute(),
        }
    }
}

/// The complete payroll configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Shift start time.
    pub shift: ShiftConfig,
    /// Tiered late-penalty rates.
    pub penalty: PenaltyTiers,
    /// Hourly rate used when a payroll run does not supply one.
    pub default_hourly_rate: Decimal,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            shift: ShiftConfig::default(),
            penalty: PenaltyTiers::default(),
            default_hourly_rate: Decimal::new(50, 0),
        }
    }
}
