//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Background-Map-Dateidialog.
pub fn request_background_map_dialog(state: &mut AppState) {
    use_cases::background_map::request_background_map_dialog(state);
}

/// Öffnet den Empfänger-Dateidialog.
pub fn request_receiver_file_dialog(state: &mut AppState) {
    use_cases::receivers::request_receiver_file_dialog(state);
}

/// Entfernt die Statusmeldung.
pub fn dismiss_status_message(state: &mut AppState) {
    state.ui.status_message = None;
}
