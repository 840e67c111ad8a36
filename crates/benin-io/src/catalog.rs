//! Memoized catalog of the six yearly series.
//!
//! Each series sits in its own once-initialized slot: [`DatasetStore::dataset`]
//! reads one file on first use, so a broken file only affects the series it
//! holds. [`DatasetStore::catalog`] is all-or-nothing over the six slots.
//! Concurrent first callers wait on a single load; afterwards reads take no
//! lock. Failures are not cached, so the next call reads the file again.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use benin_core::{Dataset, Error, Result};
use once_cell::sync::{Lazy, OnceCell};
use tracing::{debug, info, warn};

use crate::reader::load_dataset;
use crate::sources::{DatasetSource, SOURCES};

/// Default directory holding the CSV inputs.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Mapping from series name to its parsed table.
#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    datasets: BTreeMap<String, Dataset>,
}

impl DatasetCatalog {
    pub fn from_datasets(datasets: impl IntoIterator<Item = Dataset>) -> Self {
        Self {
            datasets: datasets
                .into_iter()
                .map(|ds| (ds.name().to_string(), ds))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Result<&Dataset> {
        self.datasets
            .get(name)
            .ok_or_else(|| Error::data_unavailable(name, "not part of the catalog"))
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

/// Loads the catalog from a directory at most once.
#[derive(Debug)]
pub struct DatasetStore {
    data_dir: PathBuf,
    series: [OnceCell<Dataset>; SOURCES.len()],
    cache: OnceCell<DatasetCatalog>,
    loads: AtomicUsize,
    reads: AtomicUsize,
}

impl DatasetStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            series: Default::default(),
            cache: OnceCell::new(),
            loads: AtomicUsize::new(0),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// One series, reading its file on first use.
    pub fn dataset(&self, source: &DatasetSource) -> Result<&Dataset> {
        let slot = SOURCES
            .iter()
            .position(|known| known == source)
            .and_then(|idx| self.series.get(idx))
            .ok_or_else(|| Error::data_unavailable(source.name, "not part of the catalog"))?;

        if let Some(dataset) = slot.get() {
            return Ok(dataset);
        }
        slot.get_or_try_init(|| {
            self.reads.fetch_add(1, Ordering::SeqCst);
            load_dataset(&self.data_dir, source).map_err(|err| {
                warn!(dataset = source.name, error = %err, "dataset load failed");
                err
            })
        })
    }

    /// All six series, or the first failure.
    pub fn catalog(&self) -> Result<&DatasetCatalog> {
        if let Some(catalog) = self.cache.get() {
            debug!(dir = %self.data_dir.display(), "dataset catalog cache hit");
            return Ok(catalog);
        }
        self.cache.get_or_try_init(|| self.load_uncached())
    }

    /// Number of attempts at building the full catalog.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of series files actually read.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn load_uncached(&self) -> Result<DatasetCatalog> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        info!(dir = %self.data_dir.display(), "loading datasets");

        let datasets = SOURCES
            .iter()
            .map(|source| self.dataset(source).cloned())
            .collect::<Result<Vec<_>>>()?;

        info!(count = datasets.len(), "datasets loaded");
        Ok(DatasetCatalog::from_datasets(datasets))
    }
}

static DEFAULT_STORE: Lazy<DatasetStore> = Lazy::new(|| DatasetStore::new(DEFAULT_DATA_DIR));

/// Load all six series from [`DEFAULT_DATA_DIR`], memoized for the process.
pub fn load_all() -> Result<&'static DatasetCatalog> {
    DEFAULT_STORE.catalog()
}
