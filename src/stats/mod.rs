//! Stats module - grouping and aggregation

mod calculator;

pub use calculator::{GroupTotal, StatsCalculator, Summary, SUM};
