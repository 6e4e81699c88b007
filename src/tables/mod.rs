//! Tables module - the five derived dashboard tables

mod builder;
mod merge;
mod model;

pub use builder::{
    TableBuilder, ASSUMED_SALES_GROWTH_PCT, COLLAB_PARTNERS, COLLAB_SAVINGS_RATE,
    COST_CATEGORIES, COST_SAVINGS_PCT, ECOMMERCE_VERTICAL_PATTERN, PILOT_CITIES,
    PILOT_GROWTH_PCT, RETENTION_PCT, SATISFACTION_SCORE, TECH_VERTICAL_PATTERN, TREND_MONTHS,
};
pub use merge::zip_static;
pub use model::{
    CollabRow, CollabTable, CostRow, CostTable, DashboardTables, DigitalTable, LoadReport,
    MetricRow, MonthOrder, PilotRow, PilotTable, StructuralMismatch, UniqueValueRow,
    UniqueValueTable, APP_COST, CUSTOMER_REACH, POP_UP_SALES, SALES_GROWTH,
};
