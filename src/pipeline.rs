//! Load-and-process pipeline with a once-only cache.

use crate::data::{DataProcessor, DatasetError, DatasetLoader, DEFAULT_DATASET_PATH};
use crate::tables::{DashboardTables, MonthOrder, TableBuilder};
use once_cell::sync::{Lazy, OnceCell};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Everything the pipeline needs to know about its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetOptions {
    pub path: PathBuf,
    pub month_order: MonthOrder,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
            month_order: MonthOrder::default(),
        }
    }
}

/// Read, clean and derive the five tables. No caching.
#[instrument(level = "info", skip_all, fields(path = %options.path.display()))]
pub fn process_dataset(options: &DatasetOptions) -> Result<DashboardTables, DatasetError> {
    let df = DatasetLoader::new(&options.path).load()?;
    let (frame, cleaning) = DataProcessor::clean(&df)?;
    Ok(TableBuilder::new(&frame, options.month_order).build(cleaning)?)
}

/// Lazily populated holder of one dataset's tables.
///
/// The first successful [`TableCache::get_or_load`] stores the tables; later
/// calls return the same reference without touching the file again. A failed
/// load stores nothing, so the next call retries.
pub struct TableCache {
    options: DatasetOptions,
    cell: OnceCell<DashboardTables>,
}

impl TableCache {
    pub fn new(options: DatasetOptions) -> Self {
        Self {
            options,
            cell: OnceCell::new(),
        }
    }

    pub fn get_or_load(&self) -> Result<&DashboardTables, DatasetError> {
        self.cell.get_or_try_init(|| {
            info!(path = %self.options.path.display(), "loading dataset");
            process_dataset(&self.options)
        })
    }

    /// Tables if they were already loaded.
    pub fn get(&self) -> Option<&DashboardTables> {
        self.cell.get()
    }
}

static DEFAULT_CACHE: Lazy<TableCache> = Lazy::new(|| TableCache::new(DatasetOptions::default()));

/// Tables of the default dataset (`startup_funding.csv` in the working
/// directory), loaded on first call and cached for the process lifetime.
pub fn load_and_process() -> Result<&'static DashboardTables, DatasetError> {
    DEFAULT_CACHE.get_or_load()
}
