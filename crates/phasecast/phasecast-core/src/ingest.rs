//! Record ingestion
//!
//! Turns loosely typed input records into three date-aligned phase series.
//! Malformed records are skipped and reported; they never abort the batch.

use chrono::{NaiveDate, NaiveDateTime};
use phasecast_spi::{
    Phase, PhaseSeries, PredictError, RawRecord, RecordParseError, Result, ValidationWarning,
};
use serde_json::Value;
use tracing::{debug, warn};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Outcome of ingesting one batch
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Phase A, B and C series sharing one sorted date axis
    pub series: [PhaseSeries; 3],
    /// Records that passed validation
    pub valid_records: usize,
    /// Records excluded, in input order
    pub skipped: Vec<RecordParseError>,
    pub warnings: Vec<ValidationWarning>,
}

impl IngestReport {
    pub fn series(&self, phase: Phase) -> &PhaseSeries {
        match phase {
            Phase::A => &self.series[0],
            Phase::B => &self.series[1],
            Phase::C => &self.series[2],
        }
    }

    /// Most recent date on the shared axis
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.series[0].last_date()
    }
}

/// Parse a record date; `None` for anything but a recognised date string.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    let raw = value.as_str()?.trim();
    if raw.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Coerce a phase reading to `f64`.
///
/// Null reads as `0.0`. Numbers and numeric strings are accepted when
/// finite; everything else is `None`.
pub fn coerce_reading(value: &Value) -> Option<f64> {
    let reading = match value {
        Value::Null => Some(0.0),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };
    reading.filter(|v| v.is_finite())
}

fn parse_record(
    index: usize,
    record: &RawRecord,
) -> std::result::Result<(NaiveDate, [f64; 3]), RecordParseError> {
    let date = match &record.date {
        Value::Null => return Err(RecordParseError::MissingDate { index }),
        value => parse_date(value).ok_or_else(|| RecordParseError::InvalidDate {
            index,
            raw: value.to_string(),
        })?,
    };

    let mut readings = [0.0; 3];
    for (slot, phase) in readings.iter_mut().zip(Phase::ALL) {
        let value = record.reading(phase);
        *slot = coerce_reading(value).ok_or_else(|| RecordParseError::InvalidReading {
            index,
            field: phase.key(),
            raw: value.to_string(),
        })?;
    }

    Ok((date, readings))
}

fn duplicate_warnings(rows: &[(NaiveDate, [f64; 3])]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut start = 0;
    while start < rows.len() {
        let date = rows[start].0;
        let end = rows[start..]
            .iter()
            .position(|(d, _)| *d != date)
            .map_or(rows.len(), |offset| start + offset);
        if end - start > 1 {
            warnings.push(ValidationWarning::DuplicateDate {
                date,
                occurrences: end - start,
            });
        }
        start = end;
    }
    warnings
}

/// Validate `records` and align them into per-phase series.
///
/// Valid records are sorted by date with a stable sort, so same-date records
/// keep their input order. Duplicate dates are kept and flagged.
///
/// # Errors
///
/// [`PredictError::EmptyInput`] when no record is valid,
/// [`PredictError::InsufficientData`] when fewer than `min_points` are.
pub fn ingest(records: &[RawRecord], min_points: usize) -> Result<IngestReport> {
    let mut rows = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match parse_record(index, record) {
            Ok(row) => rows.push(row),
            Err(error) => {
                warn!(index, reason = %error, "skipping record");
                skipped.push(error);
            }
        }
    }

    if rows.is_empty() {
        return Err(PredictError::EmptyInput);
    }
    if rows.len() < min_points {
        return Err(PredictError::InsufficientData {
            required: min_points,
            actual: rows.len(),
        });
    }

    rows.sort_by_key(|(date, _)| *date);

    let warnings = duplicate_warnings(&rows);
    for warning in &warnings {
        warn!(%warning, "duplicate date in input");
    }

    let dates: Vec<NaiveDate> = rows.iter().map(|(date, _)| *date).collect();
    let column = |i: usize| rows.iter().map(|(_, r)| r[i]).collect::<Vec<f64>>();
    let series = [
        PhaseSeries::new(Phase::A, dates.clone(), column(0))?,
        PhaseSeries::new(Phase::B, dates.clone(), column(1))?,
        PhaseSeries::new(Phase::C, dates, column(2))?,
    ];

    debug!(
        valid = rows.len(),
        skipped = skipped.len(),
        "ingested records"
    );

    Ok(IngestReport {
        series,
        valid_records: rows.len(),
        skipped,
        warnings,
    })
}
