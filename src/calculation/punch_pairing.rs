//! Positional punch pairing.
//!
//! This module interprets a day's punches as alternating in/out pairs by
//! position: indices (0,1), (2,3), (4,5) and so on. Pairing carries no
//! in/out tagging, so a missed or duplicated punch mid-day shifts every
//! subsequent pairing for that day; the only anomaly detection is the
//! odd/even count check.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One clock-in/clock-out interval formed from two consecutive punches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchPair {
    /// The even-indexed punch, interpreted as clock-in.
    pub clock_in: NaiveDateTime,
    /// The odd-indexed punch, interpreted as clock-out.
    pub clock_out: NaiveDateTime,
}

impl PunchPair {
    /// Returns the interval duration in hours.
    pub fn hours(&self) -> Decimal {
        let seconds = (self.clock_out - self.clock_in).num_seconds();
        Decimal::new(seconds, 0) / Decimal::new(3600, 0)
    }
}

/// The result of pairing a day's punches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingResult {
    /// The complete pairs, in chronological order.
    pub pairs: Vec<PunchPair>,
    /// The trailing punch left over when the count is odd.
    pub unpaired: Option<NaiveDateTime>,
}

impl PairingResult {
    /// Sums pair durations and rounds the daily total to 2 decimal places.
    ///
    /// Rounding uses round-half-to-even (the `round_dp` default). Only this
    /// per-day figure is rounded; callers sum the rounded values without
    /// re-rounding.
    pub fn worked_hours(&self) -> Decimal {
        let total: Decimal = self.pairs.iter().map(PunchPair::hours).sum();
        total.round_dp(2)
    }
}

/// Pairs punches positionally into worked intervals.
///
/// # Arguments
///
/// * `punches` - One day's punches, sorted ascending
///
/// # Returns
///
/// A [`PairingResult`] with the complete pairs and, when the count is odd,
/// the dropped trailing punch. The caller surfaces the odd count as a
/// warning; it is an anomaly, not a fatal error.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::pair_punches;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let p = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let result = pair_punches(&[
///     p("2026-01-15 14:00:00"),
///     p("2026-01-15 18:00:00"),
///     p("2026-01-15 19:00:00"),
///     p("2026-01-15 22:00:00"),
/// ]);
///
/// assert_eq!(result.pairs.len(), 2);
/// assert!(result.unpaired.is_none());
/// assert_eq!(result.worked_hours(), Decimal::new(700, 2)); // 7.00
/// ```
pub fn pair_punches(punches: &[NaiveDateTime]) -> PairingResult {
    let pairs = punches
        .chunks_exact(2)
        .map(|chunk| PunchPair {
            clock_in: chunk[0],
            clock_out: chunk[1],
        })
        .collect();

    let unpaired = if punches.len() % 2 != 0 {
        punches.last().copied()
    } else {
        None
    };

    PairingResult { pairs, unpaired }
}
