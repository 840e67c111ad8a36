//! # benin-io
//!
//! Reads the dashboard's CSV inputs.
//!
//! - [`sources`]: the six fixed yearly series and their columns
//! - [`reader`]: CSV parsing into [`benin_core::Dataset`] and
//!   [`benin_core::ProjectRecord`]
//! - [`catalog`]: the process-wide memoized [`DatasetCatalog`]
//!
//! ```rust,no_run
//! fn main() -> benin_core::Result<()> {
//!     let catalog = benin_io::load_all()?;
//!     let population = catalog.get("Population")?;
//!     println!("{} rows", population.len());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod reader;
pub mod sources;

pub use catalog::{load_all, DatasetCatalog, DatasetStore, DEFAULT_DATA_DIR};
pub use reader::{load_dataset, parse_dataset, parse_projects, read_projects};
pub use sources::{DatasetSource, PROJECTS_FILE, SOURCES, YEAR_FIELD};
