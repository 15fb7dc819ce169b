use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, TextEdit, Ui};

use crate::color::HEADER_COLOR;
use crate::data::filter::SiteSelection;
use crate::state::{AppState, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};

const CONTROL_WIDTH: f32 = 640.0;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("SpaceX Launch Records Dashboard")
                .size(40.0)
                .color(HEADER_COLOR),
        );
    });
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Site dropdown
// ---------------------------------------------------------------------------

/// Searchable launch-site selector. Defaults to all sites.
pub fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    egui::ComboBox::from_id_salt("site-dropdown")
        .selected_text(state.site.to_string())
        .width(CONTROL_WIDTH)
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                TextEdit::singleline(&mut state.site_search)
                    .hint_text("Select a Launch Site here")
                    .desired_width(f32::INFINITY),
            );
            ui.separator();

            if ui
                .selectable_label(state.site == SiteSelection::All, "All Sites")
                .clicked()
            {
                state.select_site(SiteSelection::All);
            }
            for site in state.site_options() {
                let option = SiteSelection::Site(site);
                if ui
                    .selectable_label(state.site == option, option.to_string())
                    .clicked()
                {
                    state.select_site(option);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Payload range slider
// ---------------------------------------------------------------------------

/// Two-handle payload slider with 1000 kg steps and tick labels below.
pub fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    ui.label("Payload range (Kg):");

    let max = state.slider_max();
    let mut low = state.payload_range.low;
    let mut high = state.payload_range.high;

    ui.scope(|ui: &mut Ui| {
        ui.spacing_mut().slider_width = CONTROL_WIDTH;
        ui.add(
            egui::Slider::new(&mut low, PAYLOAD_SLIDER_MIN..=max)
                .step_by(PAYLOAD_SLIDER_STEP)
                .suffix(" kg")
                .text("from"),
        );
        ui.add(
            egui::Slider::new(&mut high, PAYLOAD_SLIDER_MIN..=max)
                .step_by(PAYLOAD_SLIDER_STEP)
                .suffix(" kg")
                .text("to"),
        );
    });
    tick_marks(ui, max);

    state.set_payload_range(low, high);
}

/// Most tick labels that fit under the slider without overlapping.
const MAX_TICK_LABELS: usize = 11;

/// Payloads (kg) to label under a `0..=max` slider: every step while they
/// fit, otherwise every n-th step. Non-finite or non-positive spans get none.
fn tick_values(max: f64) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 {
        return Vec::new();
    }
    let steps = (max / PAYLOAD_SLIDER_STEP).round() as usize;
    let stride = steps.div_ceil(MAX_TICK_LABELS - 1).max(1);
    (0..=steps)
        .step_by(stride)
        .map(|i| i as f64 * PAYLOAD_SLIDER_STEP)
        .collect()
}

fn tick_marks(ui: &mut Ui, max: f64) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(CONTROL_WIDTH, 16.0), Sense::hover());
    let painter = ui.painter_at(rect.expand(40.0));
    let color = ui.visuals().weak_text_color();

    for kg in tick_values(max) {
        let x = rect.left() + rect.width() * (kg / max) as f32;
        painter.text(
            egui::pos2(x, rect.center().y),
            Align2::CENTER_CENTER,
            format!("{kg} kg"),
            FontId::proportional(10.0),
            color,
        );
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} launches loaded, {} plotted",
                ds.len(),
                state.scatter_rows.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_file(&path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_span_labels_every_step() {
        let ticks = tick_values(10000.0);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&10000.0));
    }

    #[test]
    fn wide_span_thins_labels() {
        let ticks = tick_values(16000.0);
        assert!(ticks.len() <= MAX_TICK_LABELS);
        assert_eq!(ticks, vec![0.0, 2000.0, 4000.0, 6000.0, 8000.0, 10000.0, 12000.0, 14000.0, 16000.0]);
    }

    #[test]
    fn degenerate_spans_have_no_labels() {
        assert!(tick_values(f64::INFINITY).is_empty());
        assert!(tick_values(f64::NAN).is_empty());
        assert!(tick_values(0.0).is_empty());
    }
}
