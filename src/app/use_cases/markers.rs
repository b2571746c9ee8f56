//! Use-Cases für Empfänger-Marker auf der Karten-Vorschau.

use crate::app::{Activation, AppState};
use anyhow::Result;

/// Aktiviert den Receiver-Button des Empfängers.
///
/// Ohne Hintergrundbild bleibt ein `Add`-Klick folgenlos.
pub fn toggle_receiver_marker(state: &mut AppState, receiver_id: u32) -> Result<Activation> {
    let dialog = &mut state.dialog;
    let Some(button) = dialog
        .buttons
        .iter_mut()
        .find(|b| b.receiver().id() == receiver_id)
    else {
        anyhow::bail!("Unbekannter Empfänger: {}", receiver_id);
    };

    button.activate(&mut dialog.preview)
}

/// Verschiebt den Marker eines Empfängers auf eine normierte Bildposition.
pub fn move_marker(state: &mut AppState, receiver_id: u32, position: glam::Vec2) -> Result<()> {
    state.dialog.preview.move_marker(receiver_id, position)
}
