//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/payroll`
//! endpoint. Punch timestamps arrive as strings and are parsed here, at the
//! boundary: a source whose timestamps do not parse is reported and
//! skipped without touching the rest of the batch.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::PunchSource;

/// Request body for the `/payroll` endpoint.
///
/// Contains one entry per punch source (employee) and an optional hourly
/// rate; when absent, the configured default rate applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Currency units per worked hour. Falls back to the configured default.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// The punch sources to aggregate.
    pub sources: Vec<PunchSourceRequest>,
}

/// One punch source in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchSourceRequest {
    /// Identifier for the source (e.g. the uploaded file name).
    pub source_id: String,
    /// Punch timestamps as strings, `YYYY-MM-DDTHH:MM:SS` or with a space
    /// separator. Order does not matter.
    pub punches: Vec<String>,
}

impl PunchSourceRequest {
    /// Parses the timestamp strings into a domain [`PunchSource`].
    ///
    /// # Returns
    ///
    /// The parsed source, or `MalformedSource` naming this source and the
    /// first value that failed to parse.
    pub fn parse(&self) -> EngineResult<PunchSource> {
        let mut punches = Vec::with_capacity(self.punches.len());
        for raw in &self.punches {
            let parsed = parse_punch(raw).ok_or_else(|| EngineError::MalformedSource {
                source_id: self.source_id.clone(),
                message: format!("unparseable timestamp '{}'", raw),
            })?;
            punches.push(parsed);
        }

        Ok(PunchSource {
            source_id: self.source_id.clone(),
            punches,
        })
    }
}

/// Parses a punch timestamp in either ISO-8601 (`T`) or spreadsheet
/// (space-separated) form, with or without seconds.
fn parse_punch(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
