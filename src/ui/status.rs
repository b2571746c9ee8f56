//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Receivers: {} | Markers: {}",
                state.receiver_count(),
                state.marker_count()
            ));

            ui.separator();

            if let Some(bg_map) = state.dialog.preview.background() {
                let filename = std::path::Path::new(bg_map.source_label())
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                let (w, h) = bg_map.dimensions();
                ui.label(format!("Background: {} ({}x{})", filename, w, h));
            } else {
                ui.label("Background: None");
            }

            if let Some(message) = &state.ui.status_message {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, message);
                if ui.small_button("✖").clicked() {
                    events.push(AppIntent::StatusMessageDismissed);
                }
            }
        });
    });

    events
}
