//! Use-Cases für die Empfängerliste.

use crate::app::AppState;
use crate::core::load_receivers_from_file;
use anyhow::Result;

/// Öffnet den Empfänger-Datei-Dialog.
pub fn request_receiver_file_dialog(state: &mut AppState) {
    state.ui.show_receiver_file_dialog = true;
}

/// Lädt eine neue Empfängerliste.
///
/// Marker der bisherigen Empfänger werden entfernt, der Hintergrund bleibt.
pub fn load_receivers(state: &mut AppState, path: String) -> Result<()> {
    let receivers = load_receivers_from_file(&path)?;

    let removed = state.dialog.preview.clear_markers();
    if !removed.is_empty() {
        log::info!("{} Marker der alten Empfängerliste entfernt", removed.len());
    }

    state.dialog.set_receivers(receivers);
    state.ui.receiver_file_path = Some(path);
    Ok(())
}
