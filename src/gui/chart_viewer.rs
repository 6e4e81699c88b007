//! Chart Viewer Widget
//! Central panel laying out the five strategy sections in a two column grid.

use crate::charts::{ChartPlotter, Slice};
use crate::tables::{CollabTable, DashboardTables, CUSTOMER_REACH};
use egui::{Color32, RichText, ScrollArea};

/// Static expansion readiness shown under "Start Small".
pub const READINESS_SCORE: u8 = 75;

/// Upper end of the satisfaction gauge.
const SATISFACTION_MAX: f64 = 5.0;

const TAKEAWAYS: [(&str, &str); 4] = [
    ("Digital is Key", "Embrace digital tools."),
    ("Unique Value Matters", "Focus on what startups can't offer."),
    ("Start Small", "Test in one city."),
    ("Compete Smart", "Grow without huge funds."),
];

const FOOTER: &str = "Built with Rust by [Your Team Name] | Data as of March 25, 2025 | Source: Indian Startup Funding (Kaggle)";

/// Text shown under the Go Digital chart.
pub fn customer_reach_text(tables: &DashboardTables) -> String {
    format!("{CUSTOMER_REACH}: {} startups", tables.digital.customer_reach())
}

/// Text shown under the Cut Costs chart.
pub fn pop_up_revenue_text(tables: &DashboardTables) -> String {
    match tables.cost.pop_up_revenue() {
        Some(revenue) => format!("Pop-Up Sales Revenue: Rs {revenue:.2} Lakh"),
        None => "Pop-Up Sales Revenue: n/a".to_string(),
    }
}

/// Scrollable dashboard body.
pub struct ChartViewer {
    tables: DashboardTables,
}

impl ChartViewer {
    pub fn new(tables: DashboardTables) -> Self {
        Self { tables }
    }

    fn section_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
        ui.label(RichText::new(title).size(18.0).strong());
        ui.label(RichText::new(subtitle).size(12.0).color(Color32::GRAY));
        ui.add_space(6.0);
    }

    fn chart_title(ui: &mut egui::Ui, title: &str) {
        ui.label(RichText::new(title).size(14.0).strong());
    }

    fn go_digital(&self, ui: &mut egui::Ui) {
        Self::section_header(ui, "1. Go Digital", "Track adoption and impact of digital tools.");
        Self::chart_title(ui, "Cost vs. Sales Growth");
        let bars: Vec<Slice> = self
            .tables
            .digital
            .chart_rows()
            .map(|row| Slice::new(&row.metric, row.value.unwrap_or(0.0)))
            .collect();
        ChartPlotter::draw_bar_chart(ui, "digital_bars", &bars, "Value");
        ui.label(customer_reach_text(&self.tables));
    }

    fn cut_costs(&self, ui: &mut egui::Ui) {
        Self::section_header(ui, "2. Cut Costs", "Monitor cost-saving measures.");
        Self::chart_title(ui, "Cost Savings Breakdown");
        let slices: Vec<Slice> = self
            .tables
            .cost
            .savings_rows()
            .map(|row| Slice::new(&row.category, row.savings_pct))
            .collect();
        ChartPlotter::draw_pie_chart(ui, &slices, 0.0);
        ui.label(pop_up_revenue_text(&self.tables));
    }

    fn unique_value(&self, ui: &mut egui::Ui) {
        Self::section_header(ui, "3. Unique Value", "Measure personalized service impact.");
        Self::chart_title(ui, "Customer Retention Over Time");
        let points: Vec<Slice> = self
            .tables
            .unique_value
            .rows
            .iter()
            .map(|row| Slice::new(&row.month, row.retention_pct))
            .collect();
        ChartPlotter::draw_line_chart(ui, "retention_line", &points, "Retention Rate (%)");

        ui.add_space(8.0);
        match self.tables.unique_value.latest_satisfaction() {
            Some(score) => ChartPlotter::draw_gauge(ui, "Customer Satisfaction (Latest)", score, SATISFACTION_MAX),
            None => {
                ui.label(RichText::new("Customer Satisfaction (Latest): no months in dataset").color(Color32::GRAY));
            }
        }
    }

    fn collaborate(&self, ui: &mut egui::Ui) {
        Self::section_header(ui, "4. Collaborate", "Track partnerships with startups.");
        Self::chart_title(ui, "Revenue Share from Collaborations");
        let collab = &self.tables.collab;
        let slices: Vec<Slice> = collab
            .rows
            .iter()
            .map(|row| Slice::new(&row.partner, row.revenue_share_rs_lakh))
            .collect();
        ChartPlotter::draw_pie_chart(ui, &slices, 0.3);

        ui.add_space(8.0);
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("collab_table")
                    .striped(true)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for header in CollabTable::COLUMNS {
                            ui.label(RichText::new(header).strong().size(11.0));
                        }
                        ui.end_row();

                        for row in &collab.rows {
                            ui.label(RichText::new(&row.partner).size(11.0));
                            ui.label(RichText::new(format!("{:.2}", row.revenue_share_rs_lakh)).size(11.0));
                            ui.label(RichText::new(format!("{:.2}", row.cost_savings_rs_lakh)).size(11.0));
                            ui.end_row();
                        }
                    });
            });
    }

    fn start_small(&self, ui: &mut egui::Ui) {
        Self::section_header(ui, "5. Start Small", "Evaluate pilot projects in one city.");
        ui.columns(2, |columns| {
            Self::chart_title(&mut columns[0], "Sales Growth in Pilot Cities");
            let bars: Vec<Slice> = self
                .tables
                .pilot
                .rows
                .iter()
                .map(|row| Slice::new(&row.city, row.sales_growth_pct))
                .collect();
            ChartPlotter::draw_bar_chart(&mut columns[0], "pilot_bars", &bars, "Sales Growth (%)");

            let ui = &mut columns[1];
            ui.label("Expansion Readiness Score");
            ui.add(egui::ProgressBar::new(f32::from(READINESS_SCORE) / 100.0));
            ui.label(format!("{READINESS_SCORE}% Ready"));
        });
    }

    fn takeaways(ui: &mut egui::Ui) {
        ui.label(RichText::new("Key Takeaways").size(18.0).strong());
        for (headline, detail) in TAKEAWAYS {
            ui.horizontal(|ui| {
                ui.label("•");
                ui.label(RichText::new(format!("{headline}:")).strong());
                ui.label(detail);
            });
        }
    }

    /// Draw the dashboard body
    pub fn show(&self, ui: &mut egui::Ui) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Traditional Companies vs. Startups - Competitive Strategy Tracker")
                        .size(24.0)
                        .strong(),
                );
                ui.label(
                    "Monitor strategies for traditional businesses to compete with startups in India, based on Indian Startup Funding data.",
                );
                ui.add_space(12.0);

                ui.columns(2, |columns| {
                    let (left, right) = columns.split_at_mut(1);
                    self.go_digital(&mut left[0]);
                    self.cut_costs(&mut right[0]);
                    left[0].add_space(16.0);
                    right[0].add_space(16.0);
                    self.unique_value(&mut left[0]);
                    self.collaborate(&mut right[0]);
                });

                ui.add_space(16.0);
                self.start_small(ui);

                ui.add_space(16.0);
                Self::takeaways(ui);

                ui.add_space(12.0);
                ui.separator();
                ui.label(RichText::new(FOOTER).size(11.0).color(Color32::GRAY));
            });
    }
}
