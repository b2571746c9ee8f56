//! Use-Case-Funktionen für Background-Map-Verwaltung.

use crate::app::AppState;
use crate::core::BackgroundMap;
use anyhow::Result;
use std::sync::Arc;

/// Öffnet den Background-Map-Auswahl-Dialog.
pub fn request_background_map_dialog(state: &mut AppState) {
    state.ui.show_background_map_dialog = true;
}

/// Lädt eine Background-Map von einem Dateipfad.
///
/// Bereits platzierte Marker behalten ihre normierte Position.
pub fn load_background_map(state: &mut AppState, path: String) -> Result<()> {
    log::info!("Lade Background-Map: {}", path);

    let bg_map = BackgroundMap::load_from_file(&path)?;

    let (width, height) = bg_map.dimensions();
    log::info!(
        "Background-Map erfolgreich geladen: {}x{} Pixel",
        width,
        height
    );

    state.dialog.preview.set_background(Arc::new(bg_map));
    state.dialog.background_dirty = true;

    Ok(())
}

/// Entfernt die Background-Map samt aller Marker und zieht die Buttons nach.
pub fn clear_background_map(state: &mut AppState) {
    let removed = state.dialog.preview.clear_background();
    for id in &removed {
        if let Some(receiver) = state.dialog.receiver(*id) {
            receiver.set_on_map(false);
        }
    }
    state.dialog.resync_buttons();
    state.dialog.background_dirty = true;
    log::info!("Background-Map entfernt ({} Marker entfernt)", removed.len());
}

/// Setzt die Deckkraft des Hintergrundbilds (0.0 bis 1.0) und persistiert die Optionen.
///
/// Ein Speicherfehler wird nur geloggt, der neue Wert bleibt aktiv.
pub fn set_background_opacity(state: &mut AppState, opacity: f32) {
    state.options.background_opacity = opacity.clamp(0.0, 1.0);
    if let Err(e) = state.options.save_to_file(&state.options_path) {
        log::warn!(
            "Optionen konnten nicht gespeichert werden ({}): {:#}",
            state.options_path.display(),
            e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::EditorOptions;

    #[test]
    fn test_opacity_change_is_saved_to_options_file() {
        let path = std::env::temp_dir().join("test_receiver_map_editor_opacity.toml");
        let mut state = AppState::new();
        state.options_path = path.clone();

        set_background_opacity(&mut state, 0.4);
        let reloaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(state.options.background_opacity, 0.4);
        assert_eq!(reloaded.background_opacity, 0.4);
    }

    #[test]
    fn test_unwritable_options_path_keeps_new_opacity() {
        let mut state = AppState::new();
        state.options_path = "/nonexistent/dir/receiver_map_editor.toml".into();

        set_background_opacity(&mut state, -0.5);

        assert_eq!(state.options.background_opacity, 0.0);
    }
}
