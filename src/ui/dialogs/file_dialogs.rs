use crate::app::{AppIntent, UiState};
use crate::core::IMAGE_EXTENSIONS;

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Background-Map-Auswahl-Dialog
    if ui_state.show_background_map_dialog {
        ui_state.show_background_map_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Map Background", IMAGE_EXTENSIONS)
            .pick_file()
        {
            events.push(AppIntent::BackgroundMapSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Empfänger-Datei-Dialog
    if ui_state.show_receiver_file_dialog {
        ui_state.show_receiver_file_dialog = false;

        let mut dialog = rfd::FileDialog::new().add_filter("Receiver List", &["json"]);
        if let Some(dir) = ui_state
            .receiver_file_path
            .as_ref()
            .and_then(|p| std::path::Path::new(p).parent())
        {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            events.push(AppIntent::ReceiverFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
