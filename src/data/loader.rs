//! Dataset Loader Module
//! Reads the startup-funding CSV with Polars and checks the required columns.

use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Dataset location used when nothing else is configured.
pub const DEFAULT_DATASET_PATH: &str = "startup_funding.csv";

pub const COL_VERTICAL: &str = "IndustryVertical";
pub const COL_CITY: &str = "CityLocation";
pub const COL_INVESTOR: &str = "InvestorsName";
pub const COL_AMOUNT: &str = "AmountInUSD";
pub const COL_DATE: &str = "Date";

/// Columns every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = [COL_VERTICAL, COL_CITY, COL_INVESTOR, COL_AMOUNT, COL_DATE];

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read dataset {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Reads the funding dataset as an all-text DataFrame.
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the CSV file using Polars.
    ///
    /// Every column is read as text (`infer_schema_length = 0`) so that the
    /// comma-grouped amounts and day-first dates reach the cleaner untouched.
    pub fn load(&self) -> Result<DataFrame, DatasetError> {
        if !self.path.is_file() {
            return Err(DatasetError::NotFound(self.path.clone()));
        }

        let df = LazyCsvReader::new(&self.path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|source| DatasetError::Read {
                path: self.path.clone(),
                source,
            })?;

        Self::validate_columns(&df)?;

        info!(
            path = %self.path.display(),
            rows = df.height(),
            columns = df.width(),
            "dataset loaded"
        );
        Ok(df)
    }

    /// Fail with [`DatasetError::MissingColumn`] for the first required column not present.
    pub fn validate_columns(df: &DataFrame) -> Result<(), DatasetError> {
        for required in REQUIRED_COLUMNS {
            if df.get_column_index(required).is_none() {
                debug!(
                    column = required,
                    available = ?df.get_column_names(),
                    "required column absent"
                );
                return Err(DatasetError::MissingColumn(required.to_string()));
            }
        }
        Ok(())
    }
}

/// Borrow a text column from a frame produced by [`DatasetLoader::load`].
pub fn text_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked, DatasetError> {
    let column = df
        .column(name)
        .map_err(|_| DatasetError::MissingColumn(name.to_string()))?;
    Ok(column.str()?)
}
