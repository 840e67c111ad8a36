//! Growth summary between the first and last recorded year of a series.

use serde::Serialize;

use crate::dataset::{Dataset, Metric};
use crate::error::ComputeError;

/// Derived first/last snapshot of a series. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStat {
    pub start_year: i32,
    pub start_value: Metric,
    pub end_year: i32,
    pub end_value: Metric,
    /// Relative change in percent, rounded to two decimals.
    pub growth_percent: f64,
}

impl SummaryStat {
    pub fn span_years(&self) -> i32 {
        self.end_year - self.start_year
    }
}

/// Summarize the population series.
///
/// `growth_percent = round((end - start) / start * 100, 2)`. An empty series
/// or a zero baseline is reported as a [`ComputeError`] instead of producing
/// a non-finite number.
pub fn summarize(population: &Dataset) -> Result<SummaryStat, ComputeError> {
    let (first, last) = match (population.first(), population.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ComputeError::EmptyDataset(population.name().to_string())),
    };

    if first.value.is_zero() {
        return Err(ComputeError::ZeroBaseline { year: first.year });
    }

    let start = first.value.as_f64();
    let end = last.value.as_f64();
    let growth_percent = round2((end - start) / start * 100.0);

    Ok(SummaryStat {
        start_year: first.year,
        start_value: first.value,
        end_year: last.year,
        end_value: last.value,
        growth_percent,
    })
}

/// Two decimals, ties to even (`0.125` → `0.12`, `0.375` → `0.38`).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
