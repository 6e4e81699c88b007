//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;

pub use app::{run_dashboard, DashboardApp};
pub use chart_viewer::{customer_reach_text, pop_up_revenue_text, ChartViewer, READINESS_SCORE};
pub use control_panel::{ControlPanel, FilterSettings};
