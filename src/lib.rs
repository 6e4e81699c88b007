//! Strategy Tracker - Traditional Companies vs. Startups dashboard
//!
//! Loads the Indian startup-funding dataset, cleans it, derives five small
//! tables and shows them as charts and widgets.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod pipeline;
pub mod stats;
pub mod summary;
pub mod tables;

pub use data::DatasetError;
pub use pipeline::{load_and_process, process_dataset, DatasetOptions, TableCache};
pub use tables::DashboardTables;
