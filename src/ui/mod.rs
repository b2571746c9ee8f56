//! UI-Komponenten: Menü, Empfänger-Panel, Karten-Vorschau, Dialoge.

pub mod dialogs;
pub mod icons;
/// UI-Layer mit egui
///
/// Die UI liest nur den AppState und liefert `AppIntent`s zurück,
/// Mutationen laufen ausschließlich über den Controller.
pub mod map_preview;
pub mod menu;
pub mod receiver_panel;
pub mod status;

pub use dialogs::handle_file_dialogs;
pub use icons::{MarkerIcons, PreviewTextures};
pub use map_preview::render_map_preview;
pub use menu::render_menu;
pub use receiver_panel::render_receiver_panel;
pub use status::render_status_bar;

use crate::shared::rgba_to_u8;

/// Wandelt eine RGBA-Float-Farbe aus den Optionen in eine egui-Farbe um.
pub(crate) fn color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba_to_u8(color);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
