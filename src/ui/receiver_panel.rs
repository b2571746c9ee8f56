//! Seitenpanel mit einem Receiver-Button pro Empfänger.

use super::MarkerIcons;
use crate::app::{AppIntent, AppState, ReceiverButton};
use crate::core::{MapContainer, MarkerState};

/// Zeichnet einen Receiver-Button (Glyph + Empfänger-ID).
pub fn receiver_button_widget(
    ui: &mut egui::Ui,
    button: &ReceiverButton,
    icons: &MarkerIcons,
) -> egui::Response {
    let face = button.face();
    let texture = icons.texture(face.icon);
    let image = egui::Image::new(egui::load::SizedTexture::from_handle(texture));

    let hover = match button.state() {
        MarkerState::Add => format!("{} zur Karte hinzufügen", button.receiver().display_name()),
        MarkerState::Remove => format!("{} von der Karte entfernen", button.receiver().display_name()),
    };

    ui.add(egui::Button::image_and_text(image, face.text.as_str()))
        .on_hover_text(hover)
}

/// Rendert das Empfänger-Panel und gibt erzeugte Events zurück.
pub fn render_receiver_panel(
    ctx: &egui::Context,
    state: &AppState,
    icons: &MarkerIcons,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("receiver_panel")
        .default_width(state.options.receiver_panel_width)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Empfänger");
            ui.separator();

            if state.dialog.buttons.is_empty() {
                ui.label("Keine Empfänger geladen.");
                if ui.button("Empfänger laden...").clicked() {
                    events.push(AppIntent::ReceiverFileSelectionRequested);
                }
                return;
            }

            if !state.dialog.preview.has_background_surface() {
                ui.weak("Erst ein Hintergrundbild laden, um Marker zu platzieren.");
                ui.add_space(4.0);
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for button in &state.dialog.buttons {
                    ui.horizontal(|ui| {
                        if receiver_button_widget(ui, button, icons).clicked() {
                            events.push(AppIntent::ReceiverButtonClicked {
                                receiver_id: button.receiver().id(),
                            });
                        }
                        ui.label(button.receiver().name());
                    });
                }
            });
        });

    events
}
