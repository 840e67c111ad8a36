use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A numeric cell that keeps the lexical kind it was read with.
///
/// Integer cells stay integers so that counts such as population are never
/// routed through a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Integer(i64),
    Decimal(f64),
}

impl Metric {
    /// Parse a raw CSV cell. Returns `None` for non-numeric or non-finite input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Some(Metric::Integer(value));
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Metric::Decimal)
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Metric::Integer(value) => value as f64,
            Metric::Decimal(value) => value,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Metric::Integer(value) => value == 0,
            Metric::Decimal(value) => value == 0.0,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Integer(value) => write!(f, "{value}"),
            Metric::Decimal(value) => write!(f, "{value}"),
        }
    }
}

/// One row of a dataset: a year and its metric value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub value: Metric,
}

impl Observation {
    pub fn new(year: i32, value: Metric) -> Self {
        Self { year, value }
    }
}

/// A named yearly series.
///
/// Rows are strictly ascending by year; construction rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    name: String,
    year_field: String,
    value_field: String,
    rows: Vec<Observation>,
}

impl Dataset {
    pub fn new(
        name: impl Into<String>,
        year_field: impl Into<String>,
        value_field: impl Into<String>,
        rows: Vec<Observation>,
    ) -> Result<Self> {
        let name = name.into();
        for pair in rows.windows(2) {
            let (prev, next) = (pair[0].year, pair[1].year);
            if next == prev {
                return Err(Error::data_unavailable(
                    name,
                    format!("duplicate year {next}"),
                ));
            }
            if next < prev {
                return Err(Error::data_unavailable(
                    name,
                    format!("years not ascending: {next} follows {prev}"),
                ));
            }
        }
        Ok(Self {
            name,
            year_field: year_field.into(),
            value_field: value_field.into(),
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year_field(&self) -> &str {
        &self.year_field
    }

    pub fn value_field(&self) -> &str {
        &self.value_field
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.rows.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.rows.last()
    }

    /// Values of a column as floats, in row order.
    pub fn column(&self, field: &str) -> Option<Vec<f64>> {
        if field == self.year_field {
            Some(self.rows.iter().map(|row| f64::from(row.year)).collect())
        } else if field == self.value_field {
            Some(self.rows.iter().map(|row| row.value.as_f64()).collect())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(year: i32, value: i64) -> Observation {
        Observation::new(year, Metric::Integer(value))
    }

    #[test]
    fn test_metric_parse_keeps_integers() {
        assert_eq!(Metric::parse("14000000"), Some(Metric::Integer(14_000_000)));
        assert_eq!(Metric::parse(" 42.5 "), Some(Metric::Decimal(42.5)));
        assert_eq!(Metric::parse("n/a"), None);
        assert_eq!(Metric::parse("NaN"), None);
        assert_eq!(Metric::parse(""), None);
    }

    #[test]
    fn test_metric_display_is_verbatim() {
        assert_eq!(Metric::Integer(14_000_000).to_string(), "14000000");
        assert_eq!(Metric::Decimal(37.9).to_string(), "37.9");
    }

    #[test]
    fn test_dataset_accepts_ascending_years() {
        let ds = Dataset::new(
            "Population",
            "Année",
            "Population",
            vec![obs(1960, 2_100_000), obs(1970, 2_700_000)],
        )
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.first().unwrap().year, 1960);
        assert_eq!(ds.last().unwrap().year, 1970);
    }

    #[test]
    fn test_dataset_rejects_duplicate_years() {
        let err = Dataset::new(
            "Population",
            "Année",
            "Population",
            vec![obs(1960, 1), obs(1960, 2)],
        )
        .unwrap_err();
        assert!(matches!(err, Error::DataUnavailable { .. }));
        assert!(err.to_string().contains("duplicate year 1960"));
    }

    #[test]
    fn test_dataset_rejects_descending_years() {
        let err = Dataset::new(
            "PIB",
            "Année",
            "PIB",
            vec![obs(1980, 1), obs(1970, 2)],
        )
        .unwrap_err();
        assert!(err.to_string().contains("1970 follows 1980"));
    }

    #[test]
    fn test_column_lookup() {
        let ds = Dataset::new("PIB", "Année", "PIB", vec![obs(2000, 5), obs(2001, 6)]).unwrap();
        assert_eq!(ds.column("Année"), Some(vec![2000.0, 2001.0]));
        assert_eq!(ds.column("PIB"), Some(vec![5.0, 6.0]));
        assert_eq!(ds.column("Inconnu"), None);
    }
}
