/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Background-Map-Dateidialog öffnen
    RequestBackgroundMapDialog,
    /// Background-Map von Dateipfad laden
    LoadBackgroundMap { path: String },
    /// Background-Map und alle Marker entfernen
    ClearBackgroundMap,
    /// Background-Opacity setzen
    SetBackgroundOpacity { opacity: f32 },
    /// Empfänger-Dateidialog öffnen
    RequestReceiverFileDialog,
    /// Empfängerliste aus Datei laden
    LoadReceivers { path: String },
    /// Marker eines Empfängers umschalten (Receiver-Button-Aktivierung)
    ToggleReceiverMarker { receiver_id: u32 },
    /// Marker auf normierte Bildposition verschieben
    MoveMarker {
        receiver_id: u32,
        position: glam::Vec2,
    },
    /// Statusmeldung entfernen
    DismissStatusMessage,
}
