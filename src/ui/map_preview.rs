//! Karten-Vorschau: Hintergrundbild mit verschiebbaren Empfänger-Markern.

use super::{color32, PreviewTextures};
use crate::app::{AppIntent, AppState};
use glam::Vec2;

/// Größtes Rechteck mit Seitenverhältnis `aspect`, zentriert in `available`.
pub fn fit_rect(available: egui::Rect, aspect: f32) -> egui::Rect {
    let avail = available.size();
    if avail.x <= 0.0 || avail.y <= 0.0 || aspect <= 0.0 {
        return egui::Rect::from_center_size(available.center(), egui::Vec2::ZERO);
    }
    let size = if avail.x / avail.y > aspect {
        egui::vec2(avail.y * aspect, avail.y)
    } else {
        egui::vec2(avail.x, avail.x / aspect)
    };
    egui::Rect::from_center_size(available.center(), size)
}

/// Normierte Bildposition -> Bildschirmposition.
pub fn to_screen(image_rect: egui::Rect, position: Vec2) -> egui::Pos2 {
    image_rect.min + egui::vec2(position.x, position.y) * image_rect.size()
}

/// Bildschirmposition -> normierte Bildposition (ungeklemmt).
pub fn to_normalized(image_rect: egui::Rect, pos: egui::Pos2) -> Vec2 {
    let rel = (pos - image_rect.min) / image_rect.size();
    Vec2::new(rel.x, rel.y)
}

/// Rendert die Karten-Vorschau im zentralen Panel.
pub fn render_map_preview(
    ctx: &egui::Context,
    state: &AppState,
    textures: &PreviewTextures,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();

        let (Some(bg_map), Some(texture)) =
            (state.dialog.preview.background(), textures.background())
        else {
            ui.painter().text(
                available.center(),
                egui::Align2::CENTER_CENTER,
                "Kein Hintergrundbild geladen. File → Load Background Map",
                egui::FontId::proportional(20.0),
                egui::Color32::WHITE,
            );
            return;
        };

        let image_rect = fit_rect(available, bg_map.aspect_ratio());
        let opacity = (state.options.background_opacity.clamp(0.0, 1.0) * 255.0) as u8;
        let painter = ui.painter_at(available);
        painter.image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::from_white_alpha(opacity),
        );

        let radius = state.options.marker_radius_px;
        let fill = color32(state.options.marker_color);
        let outline = egui::Stroke::new(2.0, color32(state.options.marker_outline_color));
        let label_color = color32(state.options.marker_label_color);

        for marker in state.dialog.preview.markers() {
            let center = to_screen(image_rect, marker.position);
            let hit_rect = egui::Rect::from_center_size(center, egui::Vec2::splat(radius * 2.0));
            let response = ui.interact(
                hit_rect,
                ui.id().with(("receiver_marker", marker.receiver_id)),
                egui::Sense::drag(),
            );

            if response.dragged() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    events.push(AppIntent::MarkerDragged {
                        receiver_id: marker.receiver_id,
                        position: to_normalized(image_rect, pointer),
                    });
                }
            }

            painter.circle(center, radius, fill, outline);
            painter.text(
                center + egui::vec2(0.0, -radius - 2.0),
                egui::Align2::CENTER_BOTTOM,
                marker.receiver_id.to_string(),
                egui::FontId::proportional(13.0),
                label_color,
            );

            if let Some(receiver) = state.dialog.receiver(marker.receiver_id) {
                response.on_hover_text(receiver.display_name());
            }
        }
    });

    events
}
