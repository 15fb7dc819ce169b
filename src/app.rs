use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpaceXDashApp {
    pub state: AppState,
}

impl SpaceXDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SpaceXDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: controls and charts, top to bottom ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::header(ui);
                    panels::site_dropdown(ui, &mut self.state);
                    ui.add_space(12.0);

                    plot::success_pie_chart(ui, &self.state);
                    ui.add_space(12.0);

                    panels::payload_slider(ui, &mut self.state);
                    ui.add_space(12.0);

                    plot::payload_scatter_chart(ui, &self.state);

                    egui::CollapsingHeader::new(format!(
                        "Plotted launches ({})",
                        self.state.scatter_rows.len()
                    ))
                    .id_salt("plotted_launches")
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        plot::records_table(ui, &self.state.scatter_rows);
                    });
                });
        });
    }
}
