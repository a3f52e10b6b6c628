//! Per-phase time series.

use chrono::NaiveDate;

use super::Phase;
use crate::error::PredictError;

/// Date-ordered consumption values for one phase.
///
/// Built fresh per call by the ingestor. Dates are non-decreasing: duplicate
/// dates are kept (and reported as warnings), never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSeries {
    phase: Phase,
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl PhaseSeries {
    /// Create a series, checking alignment and ordering.
    pub fn new(phase: Phase, dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self, PredictError> {
        if dates.len() != values.len() {
            return Err(PredictError::Unexpected(
                "dates and values must have same length".to_string(),
            ));
        }

        if dates.windows(2).any(|w| w[1] < w[0]) {
            return Err(PredictError::Unexpected(
                "dates must be sorted ascending".to_string(),
            ));
        }

        Ok(Self {
            phase,
            dates,
            values,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent date in the series
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// True when every value is exactly zero (and the series is non-empty)
    pub fn is_all_zero(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(|&v| v == 0.0)
    }

    /// Keep only the most recent `n` points.
    pub fn tail(&self, n: usize) -> PhaseSeries {
        let start = self.len().saturating_sub(n);
        PhaseSeries {
            phase: self.phase,
            dates: self.dates[start..].to_vec(),
            values: self.values[start..].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let series = PhaseSeries::new(Phase::A, vec![day(1), day(2)], vec![10.0, 11.0]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.phase(), Phase::A);
        assert_eq!(series.last_date(), Some(day(2)));
    }

    #[test]
    fn test_length_mismatch() {
        let result = PhaseSeries::new(Phase::A, vec![day(1), day(2)], vec![10.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unsorted_dates_rejected() {
        let result = PhaseSeries::new(Phase::B, vec![day(2), day(1)], vec![1.0, 2.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_dates_allowed() {
        let series = PhaseSeries::new(Phase::C, vec![day(1), day(1)], vec![1.0, 2.0]).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_all_zero() {
        let zeros = PhaseSeries::new(Phase::A, vec![day(1), day(2)], vec![0.0, 0.0]).unwrap();
        assert!(zeros.is_all_zero());

        let mixed = PhaseSeries::new(Phase::A, vec![day(1), day(2)], vec![0.0, 0.1]).unwrap();
        assert!(!mixed.is_all_zero());

        let empty = PhaseSeries::new(Phase::A, vec![], vec![]).unwrap();
        assert!(!empty.is_all_zero());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_tail() {
        let dates: Vec<NaiveDate> = (1..=5).map(day).collect();
        let series = PhaseSeries::new(Phase::A, dates, vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        let tail = series.tail(3);
        assert_eq!(tail.values(), &[3.0, 4.0, 5.0]);
        assert_eq!(tail.dates()[0], day(3));
        assert_eq!(tail.last_date(), Some(day(5)));

        let whole = series.tail(10);
        assert_eq!(whole.len(), 5);
    }
}
