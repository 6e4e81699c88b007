//! Strategy Tracker Main Application
//! Main window with the filter panel and the dashboard body.

use crate::gui::{ChartViewer, ControlPanel};
use crate::tables::DashboardTables;
use egui::SidePanel;

/// Main application window.
pub struct DashboardApp {
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, tables: DashboardTables) -> Self {
        Self {
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(tables),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Filters
        SidePanel::left("control_panel")
            .min_width(200.0)
            .max_width(260.0)
            .show(ctx, |ui| {
                self.control_panel.show(ui);
            });

        // Central panel - Dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

/// Open the dashboard window and block until it is closed.
pub fn run_dashboard(tables: DashboardTables) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Traditional Companies vs. Startups Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Strategy Tracker",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, tables)))),
    )
}
