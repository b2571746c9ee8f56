//! Top-Menü (File, View).

use crate::app::{AppIntent, AppState};
use crate::core::MapContainer;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Load Receivers...").clicked() {
                    events.push(AppIntent::ReceiverFileSelectionRequested);
                    ui.close();
                }

                ui.separator();

                let has_background = state.dialog.preview.has_background_surface();
                let background_label = if has_background {
                    "Change Background Map..."
                } else {
                    "Load Background Map..."
                };

                if ui.button(background_label).clicked() {
                    events.push(AppIntent::BackgroundMapSelectionRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_background, egui::Button::new("Clear Background Map"))
                    .clicked()
                {
                    events.push(AppIntent::BackgroundMapCleared);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                let mut opacity = state.options.background_opacity;
                if ui
                    .add(egui::Slider::new(&mut opacity, 0.0..=1.0).text("Background Opacity"))
                    .changed()
                {
                    events.push(AppIntent::SetBackgroundOpacity { opacity });
                }
            });
        });
    });

    events
}
