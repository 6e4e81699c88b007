//! Chart Plotter Module
//! Bar, line, pie and gauge widgets drawn with egui_plot and the egui painter.

use egui::{Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};
use std::f32::consts::{PI, TAU};

pub const PRIMARY_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const GAUGE_COLOR: Color32 = Color32::from_rgb(0, 0, 139); // Dark blue
pub const TRACK_COLOR: Color32 = Color32::from_rgb(220, 220, 220);

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

/// Largest angle drawn as one convex wedge.
const WEDGE_STEP: f32 = PI / 36.0;

const CHART_HEIGHT: f32 = 240.0;

/// One labelled value of a bar or pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Draws the dashboard charts.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Start angle and sweep (radians, clockwise from 12 o'clock) of each slice.
    ///
    /// Non-positive and non-finite values get no sweep. An all-zero input
    /// yields all-zero sweeps.
    pub fn pie_angles(values: &[f64]) -> Vec<(f32, f32)> {
        let usable = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let total: f64 = values.iter().map(|&v| usable(v)).sum();

        let mut start = 0.0f32;
        values
            .iter()
            .map(|&v| {
                let sweep = if total > 0.0 {
                    (usable(v) / total) as f32 * TAU
                } else {
                    0.0
                };
                let slice = (start, sweep);
                start += sweep;
                slice
            })
            .collect()
    }

    /// Fill level of a gauge in `0.0..=1.0`.
    pub fn gauge_fraction(value: f64, max: f64) -> f32 {
        if !value.is_finite() || max <= 0.0 {
            return 0.0;
        }
        (value / max).clamp(0.0, 1.0) as f32
    }

    /// Point on a circle, angle measured clockwise from 12 o'clock.
    fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
        Pos2::new(center.x + radius * angle.sin(), center.y - radius * angle.cos())
    }

    /// Vertical bar chart with category labels on the x axis.
    pub fn draw_bar_chart(ui: &mut egui::Ui, id: &str, bars: &[Slice], y_label: &str) {
        let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();

        let chart_bars: Vec<Bar> = bars
            .iter()
            .enumerate()
            .map(|(i, slice)| {
                Bar::new(i as f64, slice.value)
                    .name(&slice.label)
                    .width(0.6)
                    .fill(Self::color(i))
            })
            .collect();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .y_axis_label(y_label)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (idx - mark.value).abs() < 1e-6 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(chart_bars).color(PRIMARY_COLOR));
            });
    }

    /// Line chart with one marker per category.
    pub fn draw_line_chart(ui: &mut egui::Ui, id: &str, points: &[Slice], y_label: &str) {
        let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();
        let coords: Vec<[f64; 2]> = points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.value])
            .collect();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .y_axis_label(y_label)
            .legend(Legend::default())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (idx - mark.value).abs() < 1e-6 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(coords.iter().copied()))
                        .color(PRIMARY_COLOR)
                        .width(2.0)
                        .name(y_label),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(coords.iter().copied()))
                        .radius(4.0)
                        .color(PRIMARY_COLOR),
                );
            });
    }

    /// Pie chart with a legend; `hole` > 0 turns it into a donut.
    pub fn draw_pie_chart(ui: &mut egui::Ui, slices: &[Slice], hole: f32) {
        let size = egui::vec2(ui.available_width().min(CHART_HEIGHT), CHART_HEIGHT);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = rect.width().min(rect.height()) / 2.0 - 8.0;

        let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
        let angles = Self::pie_angles(&values);
        let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();

        if total <= 0.0 {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                "No Data",
                FontId::proportional(14.0),
                Color32::GRAY,
            );
            return;
        }

        for (i, &(start, sweep)) in angles.iter().enumerate() {
            if sweep <= 0.0 {
                continue;
            }
            let color = Self::color(i);

            // Split into narrow wedges so each polygon stays convex
            let steps = (sweep / WEDGE_STEP).ceil().max(1.0) as usize;
            let step = sweep / steps as f32;
            for k in 0..steps {
                let a0 = start + k as f32 * step;
                let a1 = a0 + step;
                painter.add(Shape::convex_polygon(
                    vec![
                        center,
                        Self::polar(center, radius, a0),
                        Self::polar(center, radius, a1),
                    ],
                    color,
                    Stroke::NONE,
                ));
            }

            let share = slices[i].value / total * 100.0;
            let label_pos = Self::polar(center, radius * 0.7, start + sweep / 2.0);
            painter.text(
                label_pos,
                Align2::CENTER_CENTER,
                format!("{share:.1}%"),
                FontId::proportional(12.0),
                Color32::WHITE,
            );
        }

        if hole > 0.0 {
            painter.circle_filled(center, radius * hole, ui.visuals().panel_fill);
        }

        ui.horizontal_wrapped(|ui| {
            for (i, slice) in slices.iter().enumerate() {
                let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
                ui.painter().rect_filled(swatch, 2.0, Self::color(i));
                ui.label(RichText::new(&slice.label).size(12.0));
                ui.add_space(8.0);
            }
        });
    }

    /// Half-circle gauge showing `value` on a `0..=max` scale.
    pub fn draw_gauge(ui: &mut egui::Ui, title: &str, value: f64, max: f64) {
        ui.label(RichText::new(title).size(14.0).strong());

        let size = egui::vec2(ui.available_width().min(280.0), 160.0);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;
        let center = Pos2::new(rect.center().x, rect.bottom() - 20.0);
        let radius = (rect.width() / 2.0).min(rect.height() - 30.0) - 10.0;

        let arc = |from: f32, to: f32| -> Vec<Pos2> {
            let steps = 48;
            (0..=steps)
                .map(|k| {
                    let a = from + (to - from) * k as f32 / steps as f32;
                    Self::polar(center, radius, a)
                })
                .collect()
        };

        // The dial runs from 9 o'clock (-90°) to 3 o'clock (+90°).
        let start = -PI / 2.0;
        let fraction = Self::gauge_fraction(value, max);
        painter.add(Shape::line(arc(start, PI / 2.0), Stroke::new(18.0, TRACK_COLOR)));
        if fraction > 0.0 {
            painter.add(Shape::line(
                arc(start, start + PI * fraction),
                Stroke::new(18.0, GAUGE_COLOR),
            ));
        }

        painter.text(
            center,
            Align2::CENTER_BOTTOM,
            format!("{value:.1}"),
            FontId::proportional(26.0),
            ui.visuals().text_color(),
        );
        painter.text(
            Self::polar(center, radius, start) + egui::vec2(0.0, 14.0),
            Align2::CENTER_TOP,
            "0",
            FontId::proportional(11.0),
            Color32::GRAY,
        );
        painter.text(
            Self::polar(center, radius, PI / 2.0) + egui::vec2(0.0, 14.0),
            Align2::CENTER_TOP,
            format!("{max}"),
            FontId::proportional(11.0),
            Color32::GRAY,
        );
    }
}
