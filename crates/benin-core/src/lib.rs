//! # benin-core
//!
//! Data model for the Benin independence dashboard: yearly [`Dataset`]s, the
//! [`ProjectRecord`] rows behind the infrastructure gallery, the population
//! [`summarize`] calculation and the shared [`Error`] taxonomy.
//!
//! This crate performs no I/O. Loading lives in `benin-io`, rendering in
//! `benin-viz` and `benin-tui`.

pub mod dataset;
pub mod error;
pub mod project;
pub mod summary;

pub use dataset::{Dataset, Metric, Observation};
pub use error::{AssetMissing, ComputeError, Error, Result};
pub use project::ProjectRecord;
pub use summary::{summarize, SummaryStat};
