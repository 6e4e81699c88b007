//! Data module - CSV loading and row cleaning

mod loader;
mod processor;

pub use loader::{
    text_column, DatasetError, DatasetLoader, COL_AMOUNT, COL_CITY, COL_DATE, COL_INVESTOR,
    COL_VERTICAL, DEFAULT_DATASET_PATH, REQUIRED_COLUMNS,
};
pub use processor::{
    clean_amount, month_bucket, month_index, parse_amount_usd, parse_day_first, usd_to_rs_lakh,
    CleaningReport, DataProcessor, COL_AMOUNT_RS_LAKH, COL_MONTH_INDEX, COL_MONTH_YEAR,
    RS_PER_LAKH, USD_TO_RS,
};
