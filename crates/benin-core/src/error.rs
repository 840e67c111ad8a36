//! Unified error types for the dashboard crates
//!
//! [`Error`] is the boundary type every crate converts into. The narrower
//! [`ComputeError`] and [`AssetMissing`] types are returned by the operations
//! that can only fail in one way, and fold into [`Error`] through `?`.
//!
//! # Example
//!
//! ```ignore
//! use benin_core::{summarize, Result};
//!
//! fn home_sentence(catalog: &DatasetCatalog) -> Result<String> {
//!     let population = catalog.get("Population")?;
//!     let stat = summarize(population)?;
//!     Ok(format!("{}%", stat.growth_percent))
//! }
//! ```

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Unified error type for dashboard operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required input file is missing or malformed.
    #[error("dataset {dataset} unavailable: {reason}")]
    DataUnavailable { dataset: String, reason: String },

    /// A project card references an image that does not exist.
    #[error(transparent)]
    AssetMissing(#[from] AssetMissing),

    /// A derived statistic could not be computed.
    #[error(transparent)]
    Compute(#[from] ComputeError),

    /// I/O errors outside of dataset loading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn data_unavailable(dataset: impl Into<String>, reason: impl ToString) -> Self {
        Error::DataUnavailable {
            dataset: dataset.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience type alias for Results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the growth computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    #[error("dataset {0} has no rows")]
    EmptyDataset(String),

    /// Growth relative to a zero baseline is undefined.
    #[error("baseline value for {year} is zero, growth is undefined")]
    ZeroBaseline { year: i32 },
}

/// A referenced image is absent from the assets directory.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("image for project {project} not found at {}", .path.display())]
pub struct AssetMissing {
    pub project: String,
    pub path: PathBuf,
}
