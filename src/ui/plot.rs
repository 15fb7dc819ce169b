use std::collections::BTreeMap;

use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use super::pie;
use crate::data::filter::SCATTER_TITLE;
use crate::data::model::LaunchRecord;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 380.0;
const PIE_RADIUS: f64 = 1.0;

// ---------------------------------------------------------------------------
// Success pie chart
// ---------------------------------------------------------------------------

/// Render the success pie for the current site selection.
pub fn success_pie_chart(ui: &mut Ui, state: &AppState) {
    let Some(summary) = &state.pie else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&summary.title);
    });

    let values: Vec<usize> = summary.slices.iter().map(|s| s.value).collect();
    let wedges = pie::layout(&values);

    Plot::new("success-pie-chart")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.2)
        .include_y(1.2)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            if summary.total() == 0 {
                plot_ui.text(
                    Text::new(PlotPoint::new(0.0, 0.0), RichText::new("No data").weak())
                        .anchor(Align2::CENTER_CENTER),
                );
                return;
            }

            for (slice, wedge) in summary.slices.iter().zip(&wedges) {
                let color = state.site_colors.slice_color(&slice.kind);

                // Same name on every piece so the legend shows one entry.
                for poly in wedge.polygons(PIE_RADIUS) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(poly))
                            .name(&slice.label)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );
                }

                if slice.value > 0 {
                    let [x, y] = wedge.label_anchor(PIE_RADIUS * 0.65);
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x, y),
                            RichText::new(slice.value.to_string())
                                .color(Color32::WHITE)
                                .strong(),
                        )
                        .anchor(Align2::CENTER_CENTER),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Payload vs. outcome scatter
// ---------------------------------------------------------------------------

/// Render payload mass (x) against outcome class (y), one series per
/// booster version category.
pub fn payload_scatter_chart(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(SCATTER_TITLE);
    });

    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for rec in &state.scatter_rows {
        by_category
            .entry(rec.booster_version_category.as_str())
            .or_default()
            .push([rec.payload_mass_kg, f64::from(rec.outcome.class())]);
    }

    Plot::new("success-payload-scatter-chart")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(state.payload_range.low)
        .include_x(state.payload_range.high)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in by_category {
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(category)
                        .color(state.category_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(5.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Plotted records table
// ---------------------------------------------------------------------------

/// Table of the launches currently shown in the scatter chart.
pub fn records_table(ui: &mut Ui, rows: &[LaunchRecord]) {
    if rows.is_empty() {
        ui.label("No launches in the selected range.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Flight", "Launch Site", "Outcome", "Payload (kg)", "Booster"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let rec = &rows[row.index()];
                row.col(|ui| {
                    ui.label(rec.flight_number.to_string());
                });
                row.col(|ui| {
                    ui.label(&rec.launch_site);
                });
                row.col(|ui| {
                    ui.label(rec.outcome.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.label(format!(
                        "{} ({})",
                        rec.booster_version, rec.booster_version_category
                    ));
                });
            });
        });
}
