//! Command-line configuration.

use crate::data::DEFAULT_DATASET_PATH;
use crate::pipeline::DatasetOptions;
use crate::tables::MonthOrder;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Open the dashboard window
    Gui,
    /// Print the tables to stdout
    Table,
    /// Print the tables to stdout as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "strategy_tracker")]
#[command(about = "Traditional Companies vs. Startups - Competitive Strategy Tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Startup funding CSV
    #[arg(short, long, env = "STRATEGY_TRACKER_DATA", default_value = DEFAULT_DATASET_PATH)]
    pub data: PathBuf,

    /// Which months the unique-value trend shows
    #[arg(long, value_enum, default_value = "first-seen")]
    pub month_order: MonthOrder,

    /// Where the tables go
    #[arg(short, long, value_enum, default_value = "gui")]
    pub output: OutputMode,
}

impl Cli {
    pub fn dataset_options(&self) -> DatasetOptions {
        DatasetOptions {
            path: self.data.clone(),
            month_order: self.month_order,
        }
    }
}
