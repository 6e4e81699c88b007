//! Control Panel Widget
//! Left side panel with the dashboard filters.
//!
//! The filters are placeholders: their selections are kept but nothing
//! reads them when the charts are drawn.

use egui::{Color32, ComboBox, RichText};

pub const TIME_PERIODS: [&str; 2] = ["Monthly", "Quarterly"];
pub const CITIES: [&str; 3] = ["All", "Delhi", "Bangalore"];
pub const INDUSTRIES: [&str; 4] = ["All", "Taxis", "Retail", "Hotels"];

/// Current filter selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSettings {
    pub time_period: &'static str,
    pub city: &'static str,
    pub industry: &'static str,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            time_period: TIME_PERIODS[0],
            city: CITIES[0],
            industry: INDUSTRIES[0],
        }
    }
}

/// Left side filter panel.
#[derive(Default)]
pub struct ControlPanel {
    pub settings: FilterSettings,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    fn select(ui: &mut egui::Ui, id: &str, label: &str, options: &[&'static str], current: &mut &'static str) {
        ui.label(RichText::new(label).size(13.0));
        ComboBox::from_id_salt(id)
            .width(ui.available_width() - 10.0)
            .selected_text(*current)
            .show_ui(ui, |ui| {
                for &option in options {
                    ui.selectable_value(current, option, option);
                }
            });
        ui.add_space(8.0);
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.add_space(5.0);
        ui.label(
            RichText::new("Filters")
                .size(18.0)
                .strong()
                .color(Color32::from_rgb(100, 149, 237)),
        );
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        Self::select(ui, "time_period", "Time Period", &TIME_PERIODS, &mut self.settings.time_period);
        Self::select(ui, "city", "City", &CITIES, &mut self.settings.city);
        Self::select(ui, "industry", "Industry", &INDUSTRIES, &mut self.settings.industry);
    }
}
