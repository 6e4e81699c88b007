//! Builds the five derived tables from the cleaned funding frame.
//!
//! Each table is computed independently: filter the rows, group and
//! aggregate with a Polars query, then splice in the illustrative constants
//! the dataset cannot provide.

use crate::data::{
    CleaningReport, COL_AMOUNT_RS_LAKH, COL_CITY, COL_INVESTOR, COL_MONTH_INDEX, COL_MONTH_YEAR,
    COL_VERTICAL,
};
use crate::stats::StatsCalculator;
use crate::tables::merge::zip_static;
use crate::tables::model::*;
use polars::prelude::*;
use tracing::{debug, info, warn};

/// Lowercase vertical patterns: tech covers e-commerce too.
pub const TECH_VERTICAL_PATTERN: &str = "tech|e-commerce";
pub const ECOMMERCE_VERTICAL_PATTERN: &str = "e-commerce";

pub const ASSUMED_SALES_GROWTH_PCT: f64 = 12.0;

pub const COST_CATEGORIES: [&str; 4] = ["Rent", "Staff", "Inventory", POP_UP_SALES];
pub const COST_SAVINGS_PCT: [f64; 4] = [20.0, 15.0, 10.0, 0.0];

pub const TREND_MONTHS: usize = 4;
pub const RETENTION_PCT: [f64; TREND_MONTHS] = [70.0, 72.0, 75.0, 78.0];
pub const SATISFACTION_SCORE: [f64; TREND_MONTHS] = [4.2, 4.3, 4.5, 4.6];

pub const COLLAB_PARTNERS: usize = 2;
pub const COLLAB_SAVINGS_RATE: f64 = 0.1;

/// Pilot cities and their assumed growth, matched by position.
pub const PILOT_CITIES: [&str; 2] = ["Delhi", "Bangalore"];
pub const PILOT_GROWTH_PCT: [f64; 2] = [15.0, 10.0];

pub struct TableBuilder<'a> {
    frame: &'a DataFrame,
    month_order: MonthOrder,
    mismatches: Vec<StructuralMismatch>,
}

impl<'a> TableBuilder<'a> {
    /// `frame` is the output of [`crate::data::DataProcessor::clean`].
    pub fn new(frame: &'a DataFrame, month_order: MonthOrder) -> Self {
        Self {
            frame,
            month_order,
            mismatches: Vec::new(),
        }
    }

    /// Compute all five tables.
    pub fn build(mut self, cleaning: CleaningReport) -> PolarsResult<DashboardTables> {
        let digital = self.digital()?;
        let cost = self.cost()?;
        let unique_value = self.unique_value()?;
        let collab = self.collab()?;
        let pilot = self.pilot()?;

        info!(
            months = unique_value.rows.len(),
            partners = collab.rows.len(),
            pilot_cities = pilot.rows.len(),
            mismatches = self.mismatches.len(),
            "derived tables built"
        );

        Ok(DashboardTables {
            digital,
            cost,
            unique_value,
            collab,
            pilot,
            report: LoadReport {
                cleaning,
                mismatches: self.mismatches,
            },
        })
    }

    pub fn digital(&self) -> PolarsResult<DigitalTable> {
        let tech = StatsCalculator::summarize(
            self.frame,
            StatsCalculator::text_matches(COL_VERTICAL, TECH_VERTICAL_PATTERN),
            COL_AMOUNT_RS_LAKH,
        )?;
        if tech.mean.is_none() {
            warn!("no tech or e-commerce rows, app cost is undefined");
        }

        Ok(DigitalTable {
            rows: vec![
                MetricRow {
                    metric: APP_COST.to_string(),
                    value: tech.mean,
                },
                MetricRow {
                    metric: SALES_GROWTH.to_string(),
                    value: Some(ASSUMED_SALES_GROWTH_PCT),
                },
                MetricRow {
                    metric: CUSTOMER_REACH.to_string(),
                    value: Some(tech.count as f64),
                },
            ],
        })
    }

    pub fn cost(&self) -> PolarsResult<CostTable> {
        let ecommerce = StatsCalculator::summarize(
            self.frame,
            StatsCalculator::text_matches(COL_VERTICAL, ECOMMERCE_VERTICAL_PATTERN),
            COL_AMOUNT_RS_LAKH,
        )?
        .mean;
        if ecommerce.is_none() {
            warn!("no e-commerce rows, pop-up sales revenue is undefined");
        }

        let rows = COST_CATEGORIES
            .iter()
            .zip(COST_SAVINGS_PCT)
            .map(|(&category, savings_pct)| CostRow {
                category: category.to_string(),
                savings_pct,
                revenue_rs_lakh: if category == POP_UP_SALES {
                    ecommerce
                } else {
                    Some(0.0)
                },
            })
            .collect();

        Ok(CostTable { rows })
    }

    /// Month buckets with their funding totals, ordered per `month_order`,
    /// at most [`TREND_MONTHS`] of them.
    fn months(&self) -> PolarsResult<Vec<(String, f64)>> {
        let grouped = StatsCalculator::group_sums(
            self.frame,
            COL_MONTH_YEAR,
            COL_AMOUNT_RS_LAKH,
            &[COL_MONTH_INDEX],
        );
        let ascending = SortMultipleOptions::default().with_maintain_order(true);
        let ordered = match self.month_order {
            MonthOrder::FirstSeen => grouped,
            MonthOrder::Lexical => grouped.sort([COL_MONTH_YEAR], ascending),
            MonthOrder::Chronological => grouped.sort([COL_MONTH_INDEX], ascending),
        };

        let months = ordered.limit(TREND_MONTHS as IdxSize).collect()?;
        let totals = StatsCalculator::totals(&months, COL_MONTH_YEAR)?;
        debug!(shown = totals.len(), order = ?self.month_order, "month buckets");

        Ok(totals.into_iter().map(|g| (g.key, g.sum)).collect())
    }

    pub fn unique_value(&mut self) -> PolarsResult<UniqueValueTable> {
        let months = self.months()?;

        let simulated: Vec<(f64, f64)> = RETENTION_PCT
            .iter()
            .copied()
            .zip(SATISFACTION_SCORE)
            .collect();
        let (merged, mismatch) = zip_static("unique_value", months, &simulated);
        self.mismatches.extend(mismatch);

        let rows = merged
            .into_iter()
            .map(|((month, funding), (retention, satisfaction))| UniqueValueRow {
                month,
                retention_pct: retention,
                satisfaction,
                funding_rs_lakh: funding,
            })
            .collect();

        Ok(UniqueValueTable { rows })
    }

    pub fn collab(&self) -> PolarsResult<CollabTable> {
        let top = StatsCalculator::top_by_sum(
            self.frame,
            COL_INVESTOR,
            COL_AMOUNT_RS_LAKH,
            COLLAB_PARTNERS,
        )?;

        let rows = top
            .into_iter()
            .map(|g| CollabRow {
                partner: g.key,
                revenue_share_rs_lakh: g.sum,
                cost_savings_rs_lakh: g.sum * COLLAB_SAVINGS_RATE,
            })
            .collect();

        Ok(CollabTable { rows })
    }

    pub fn pilot(&mut self) -> PolarsResult<PilotTable> {
        // Growth is keyed by allowlist position, so an absent city drops its
        // own row without shifting the others.
        let mut rows = Vec::with_capacity(PILOT_CITIES.len());
        for (&city, growth) in PILOT_CITIES.iter().zip(PILOT_GROWTH_PCT) {
            let summary = StatsCalculator::summarize(
                self.frame,
                col(COL_CITY).eq(lit(city)),
                COL_AMOUNT_RS_LAKH,
            )?;
            if let Some(mean) = summary.mean {
                rows.push(PilotRow {
                    city: city.to_string(),
                    sales_growth_pct: growth,
                    pilot_cost_rs_lakh: mean,
                });
            }
        }

        if rows.len() != PILOT_CITIES.len() {
            warn!(
                present = rows.len(),
                expected = PILOT_CITIES.len(),
                "pilot cities missing from dataset"
            );
            self.mismatches.push(StructuralMismatch {
                table: "pilot",
                computed: rows.len(),
                expected: PILOT_CITIES.len(),
            });
        }

        Ok(PilotTable { rows })
    }
}
