/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Background-Map-Auswahl-Dialog geöffnet werden soll
    pub show_background_map_dialog: bool,
    /// Ob der Empfänger-Datei-Dialog geöffnet werden soll
    pub show_receiver_file_dialog: bool,
    /// Pfad der aktuell geladenen Empfänger-Datei
    pub receiver_file_path: Option<String>,
    /// Temporäre Statusnachricht (z.B. Fehler beim Laden)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_background_map_dialog: false,
            show_receiver_file_dialog: false,
            receiver_file_path: None,
            status_message: None,
        }
    }
}
