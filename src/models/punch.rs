//! Punch source model.
//!
//! This module defines the [`PunchSource`] struct, the engine's input: one
//! employee's raw time-clock punches tagged with a source identifier.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One employee's raw time-clock punches.
///
/// A punch is a bare instant with no inherent in/out meaning; pairing is
/// positional and happens per calendar day during resolution. The punches
/// here may arrive in any order; the aggregator sorts them ascending before
/// grouping, so source order is not meaningful.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PunchSource;
/// use chrono::NaiveDateTime;
///
/// let source = PunchSource {
///     source_id: "alice.xlsx".to_string(),
///     punches: vec![
///         NaiveDateTime::parse_from_str("2026-01-15 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///         NaiveDateTime::parse_from_str("2026-01-15 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     ],
/// };
/// assert_eq!(source.punches.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchSource {
    /// Identifier for the source of these punches (e.g. an uploaded file name).
    pub source_id: String,
    /// The raw punch instants, in no particular order.
    pub punches: Vec<NaiveDateTime>,
}

impl PunchSource {
    /// Returns the punches sorted ascending by instant.
    ///
    /// Grouping and pairing both require the sort invariant, so callers go
    /// through this rather than trusting source order.
    pub fn sorted_punches(&self) -> Vec<NaiveDateTime> {
        let mut punches = self.punches.clone();
        punches.sort();
        punches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn punch(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_sorted_punches_orders_ascending() {
        let source = PunchSource {
            source_id: "emp.xlsx".to_string(),
            punches: vec![
                punch("2026-01-15 18:00:00"),
                punch("2026-01-14 14:00:00"),
                punch("2026-01-15 14:00:00"),
            ],
        };

        let sorted = source.sorted_punches();
        assert_eq!(
            sorted,
            vec![
                punch("2026-01-14 14:00:00"),
                punch("2026-01-15 14:00:00"),
                punch("2026-01-15 18:00:00"),
            ]
        );
    }

    #[test]
    fn test_sorted_punches_leaves_original_untouched() {
        let source = PunchSource {
            source_id: "emp.xlsx".to_string(),
            punches: vec![punch("2026-01-15 18:00:00"), punch("2026-01-15 14:00:00")],
        };

        let _ = source.sorted_punches();
        assert_eq!(source.punches[0], punch("2026-01-15 18:00:00"));
    }

    #[test]
    fn test_punch_source_serialization() {
        let source = PunchSource {
            source_id: "alice.xlsx".to_string(),
            punches: vec![punch("2026-01-15 14:00:00")],
        };

        let json = serde_json::to_string(&source).unwrap();
        let deserialized: PunchSource = serde_json::from_str(&json).unwrap();
        assert_eq!(source, deserialized);
    }
}
