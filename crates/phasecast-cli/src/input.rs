//! Record loading for the `predict` command.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use phasecast_facade::RawRecord;
use serde::Deserialize;
use serde_json::Value;

/// Input encoding of the records file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Array of `{date, phase_a, phase_b, phase_c}` objects
    Json,
    /// `date,phase_a,phase_b,phase_c` with a header row
    Csv,
}

impl InputFormat {
    /// Guess from the file extension, defaulting to JSON
    pub fn detect(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => InputFormat::Csv,
            _ => InputFormat::Json,
        }
    }
}

/// One CSV row; empty cells and missing columns read as null.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    date: Option<String>,
    phase_a: Option<String>,
    phase_b: Option<String>,
    phase_c: Option<String>,
}

impl From<CsvRow> for RawRecord {
    fn from(row: CsvRow) -> Self {
        let cell = |c: Option<String>| c.map_or(Value::Null, Value::String);
        RawRecord::from_values(
            cell(row.date),
            cell(row.phase_a),
            cell(row.phase_b),
            cell(row.phase_c),
        )
    }
}

/// Read a file, or stdin when `path` is `-`
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read records from stdin")?;
        return Ok(content);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to open {}", path.display()))
}

pub fn parse_json(content: &str) -> Result<Vec<RawRecord>> {
    serde_json::from_str(content).context("Failed to parse JSON records")
}

pub fn parse_csv(content: &str) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for (line, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.with_context(|| format!("Failed to read CSV row {}", line + 1))?;
        records.push(row.into());
    }
    Ok(records)
}

/// Load records from `path` in the given (or detected) format
pub fn load_records(path: &Path, format: Option<InputFormat>) -> Result<Vec<RawRecord>> {
    let content = read_source(path)?;
    match format.unwrap_or_else(|| InputFormat::detect(path)) {
        InputFormat::Json => parse_json(&content),
        InputFormat::Csv => parse_csv(&content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_format() {
        assert_eq!(InputFormat::detect(Path::new("readings.CSV")), InputFormat::Csv);
        assert_eq!(InputFormat::detect(Path::new("readings.json")), InputFormat::Json);
        assert_eq!(InputFormat::detect(Path::new("-")), InputFormat::Json);
    }

    #[test]
    fn test_parse_json() {
        let records = parse_json(
            r#"[{"date": "2024-01-01", "phase_a": 1.5, "phase_b": null}]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].phase_a, json!(1.5));
        assert_eq!(records[0].phase_b, Value::Null);
        assert_eq!(records[0].phase_c, Value::Null);
    }

    #[test]
    fn test_parse_json_rejects_non_array() {
        assert!(parse_json(r#"{"date": "2024-01-01"}"#).is_err());
    }

    #[test]
    fn test_parse_csv_empty_cells_are_null() {
        let content = "date,phase_a,phase_b,phase_c\n2024-01-01, 10.5 ,,7\n2024-01-02,11,12,13\n";
        let records = parse_csv(content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, json!("2024-01-01"));
        assert_eq!(records[0].phase_a, json!("10.5"));
        assert_eq!(records[0].phase_b, Value::Null);
        assert_eq!(records[1].phase_c, json!("13"));
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let content = "date,phase_a\n2024-01-01,4\n";
        let records = parse_csv(content).unwrap();
        assert_eq!(records[0].phase_b, Value::Null);
    }
}
