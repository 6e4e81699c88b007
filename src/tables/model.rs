//! Derived table types handed to the presentation layer.
//!
//! Row order and column names follow the dashboard's layout, so consumers
//! that read by position keep working. The named accessors are the
//! preferred way to read single cells.

use crate::data::CleaningReport;
use polars::prelude::*;
use serde::Serialize;

pub const APP_COST: &str = "App Cost (Rs Lakh)";
pub const SALES_GROWTH: &str = "Sales Growth (%)";
pub const CUSTOMER_REACH: &str = "Customer Reach";
pub const POP_UP_SALES: &str = "Pop-Up Sales";

/// Which four month buckets the unique-value table shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MonthOrder {
    /// Order in which months first appear in the file
    #[default]
    FirstSeen,
    /// Alphabetical by label ("Apr 2016" before "Jan 2015")
    Lexical,
    /// Calendar order
    Chronological,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub metric: String,
    pub value: Option<f64>,
}

/// "Go Digital": app cost, assumed sales growth and customer reach.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigitalTable {
    pub rows: Vec<MetricRow>,
}

impl DigitalTable {
    pub const COLUMNS: [&'static str; 2] = ["Metric", "Value"];

    fn value_of(&self, metric: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.metric == metric)
            .and_then(|row| row.value)
    }

    /// Mean funding of tech and e-commerce startups, `None` if there are none.
    pub fn app_cost(&self) -> Option<f64> {
        self.value_of(APP_COST)
    }

    pub fn sales_growth(&self) -> Option<f64> {
        self.value_of(SALES_GROWTH)
    }

    /// Number of tech and e-commerce startups.
    pub fn customer_reach(&self) -> usize {
        self.value_of(CUSTOMER_REACH).map(|v| v as usize).unwrap_or(0)
    }

    /// Rows drawn in the cost vs. growth bar chart.
    pub fn chart_rows(&self) -> impl Iterator<Item = &MetricRow> {
        self.rows.iter().filter(|row| row.metric != CUSTOMER_REACH)
    }

    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let [metric, value] = Self::COLUMNS;
        DataFrame::new(vec![
            Column::new(metric.into(), self.rows.iter().map(|r| r.metric.as_str()).collect::<Vec<_>>()),
            Column::new(value.into(), self.rows.iter().map(|r| r.value).collect::<Vec<_>>()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostRow {
    pub category: String,
    pub savings_pct: f64,
    pub revenue_rs_lakh: Option<f64>,
}

/// "Cut Costs": assumed savings per category plus pop-up sales revenue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostTable {
    pub rows: Vec<CostRow>,
}

impl CostTable {
    pub const COLUMNS: [&'static str; 3] = ["Category", "Cost Savings (%)", "Revenue (Rs Lakh)"];

    /// Mean e-commerce funding shown as pop-up sales revenue.
    pub fn pop_up_revenue(&self) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.category == POP_UP_SALES)
            .and_then(|row| row.revenue_rs_lakh)
    }

    /// Categories with a positive saving, as drawn in the breakdown pie.
    pub fn savings_rows(&self) -> impl Iterator<Item = &CostRow> {
        self.rows.iter().filter(|row| row.savings_pct > 0.0)
    }

    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let [category, savings, revenue] = Self::COLUMNS;
        DataFrame::new(vec![
            Column::new(category.into(), self.rows.iter().map(|r| r.category.as_str()).collect::<Vec<_>>()),
            Column::new(savings.into(), self.rows.iter().map(|r| r.savings_pct).collect::<Vec<_>>()),
            Column::new(revenue.into(), self.rows.iter().map(|r| r.revenue_rs_lakh).collect::<Vec<_>>()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniqueValueRow {
    pub month: String,
    pub retention_pct: f64,
    pub satisfaction: f64,
    /// Total funding of the month.
    pub funding_rs_lakh: f64,
}

/// "Unique Value": simulated retention and satisfaction over four months.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniqueValueTable {
    pub rows: Vec<UniqueValueRow>,
}

impl UniqueValueTable {
    pub const COLUMNS: [&'static str; 4] = [
        "Month",
        "Retention Rate (%)",
        "Satisfaction Score",
        "Funding (Rs Lakh)",
    ];

    /// Satisfaction of the last month shown.
    pub fn latest_satisfaction(&self) -> Option<f64> {
        self.rows.last().map(|row| row.satisfaction)
    }

    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let [month, retention, satisfaction, funding] = Self::COLUMNS;
        DataFrame::new(vec![
            Column::new(month.into(), self.rows.iter().map(|r| r.month.as_str()).collect::<Vec<_>>()),
            Column::new(retention.into(), self.rows.iter().map(|r| r.retention_pct).collect::<Vec<_>>()),
            Column::new(satisfaction.into(), self.rows.iter().map(|r| r.satisfaction).collect::<Vec<_>>()),
            Column::new(funding.into(), self.rows.iter().map(|r| r.funding_rs_lakh).collect::<Vec<_>>()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollabRow {
    pub partner: String,
    pub revenue_share_rs_lakh: f64,
    pub cost_savings_rs_lakh: f64,
}

/// "Collaborate": the two investors with the largest total funding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollabTable {
    pub rows: Vec<CollabRow>,
}

impl CollabTable {
    pub const COLUMNS: [&'static str; 3] = [
        "Partner",
        "Revenue Share (Rs Lakh)",
        "Cost Savings (Rs Lakh)",
    ];

    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let [partner, revenue, savings] = Self::COLUMNS;
        DataFrame::new(vec![
            Column::new(partner.into(), self.rows.iter().map(|r| r.partner.as_str()).collect::<Vec<_>>()),
            Column::new(revenue.into(), self.rows.iter().map(|r| r.revenue_share_rs_lakh).collect::<Vec<_>>()),
            Column::new(savings.into(), self.rows.iter().map(|r| r.cost_savings_rs_lakh).collect::<Vec<_>>()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PilotRow {
    pub city: String,
    pub sales_growth_pct: f64,
    pub pilot_cost_rs_lakh: f64,
}

/// "Start Small": pilot cities with mean funding and assumed growth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PilotTable {
    pub rows: Vec<PilotRow>,
}

impl PilotTable {
    pub const COLUMNS: [&'static str; 3] = ["City", "Sales Growth (%)", "Pilot Cost (Rs Lakh)"];

    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let [city, growth, cost] = Self::COLUMNS;
        DataFrame::new(vec![
            Column::new(city.into(), self.rows.iter().map(|r| r.city.as_str()).collect::<Vec<_>>()),
            Column::new(growth.into(), self.rows.iter().map(|r| r.sales_growth_pct).collect::<Vec<_>>()),
            Column::new(cost.into(), self.rows.iter().map(|r| r.pilot_cost_rs_lakh).collect::<Vec<_>>()),
        ])
    }
}

/// A computed series that did not match the length of its constant series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralMismatch {
    pub table: &'static str,
    pub computed: usize,
    pub expected: usize,
}

/// What went wrong quietly while building the tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    pub cleaning: CleaningReport,
    pub mismatches: Vec<StructuralMismatch>,
}

/// The five derived tables of one dataset load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardTables {
    pub digital: DigitalTable,
    pub cost: CostTable,
    pub unique_value: UniqueValueTable,
    pub collab: CollabTable,
    pub pilot: PilotTable,
    pub report: LoadReport,
}
