/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Background-Map-Auswahldialog öffnen
    BackgroundMapSelectionRequested,
    /// Background-Map wurde im Dialog ausgewählt
    BackgroundMapSelected { path: String },
    /// Background-Map entfernen (entfernt auch alle Marker)
    BackgroundMapCleared,
    /// Background-Opacity ändern
    SetBackgroundOpacity { opacity: f32 },
    /// Empfänger-Datei-Auswahldialog öffnen
    ReceiverFileSelectionRequested,
    /// Empfänger-Datei wurde im Dialog ausgewählt
    ReceiverFileSelected { path: String },
    /// Receiver-Button wurde geklickt
    ReceiverButtonClicked { receiver_id: u32 },
    /// Marker wurde in der Vorschau gezogen (normierte Bildposition)
    MarkerDragged {
        receiver_id: u32,
        position: glam::Vec2,
    },
    /// Statusmeldung schließen
    StatusMessageDismissed,
}
