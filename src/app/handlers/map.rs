//! Handler für Background-Map und Empfänger-Marker.

use crate::app::use_cases;
use crate::app::{Activation, AppState};

/// Lädt eine Background-Map.
pub fn load_background_map(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::background_map::load_background_map(state, path)
}

/// Entfernt die Background-Map und alle Marker.
pub fn clear_background_map(state: &mut AppState) {
    use_cases::background_map::clear_background_map(state);
}

/// Setzt die Background-Opacity.
pub fn set_background_opacity(state: &mut AppState, opacity: f32) {
    use_cases::background_map::set_background_opacity(state, opacity);
}

/// Schaltet den Marker eines Empfängers um.
pub fn toggle_receiver_marker(state: &mut AppState, receiver_id: u32) -> anyhow::Result<()> {
    match use_cases::markers::toggle_receiver_marker(state, receiver_id)? {
        Activation::Added => log::debug!("Receiver-Button {}: Zustand Remove", receiver_id),
        Activation::Removed => log::debug!("Receiver-Button {}: Zustand Add", receiver_id),
        Activation::Skipped => {}
    }
    Ok(())
}

/// Verschiebt einen Marker.
pub fn move_marker(
    state: &mut AppState,
    receiver_id: u32,
    position: glam::Vec2,
) -> anyhow::Result<()> {
    use_cases::markers::move_marker(state, receiver_id, position)
}
