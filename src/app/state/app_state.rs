use super::{AddMapDialogState, UiState};
use crate::app::CommandLog;
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Add-Map-Dialog (Empfänger, Buttons, Vorschau)
    pub dialog: AddMapDialogState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Icons)
    pub options: EditorOptions,
    /// Zieldatei beim Speichern geänderter Optionen
    pub options_path: PathBuf,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            dialog: AddMapDialogState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            options_path: EditorOptions::config_path(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Empfänger zurück (für UI-Anzeige)
    pub fn receiver_count(&self) -> usize {
        self.dialog.receivers.len()
    }

    /// Gibt die Anzahl platzierter Marker zurück (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.dialog.preview.marker_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
