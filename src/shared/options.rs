//! Zentrale Konfiguration für den Receiver Map Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Marker-Rendering ───────────────────────────────────────────────

/// Marker-Radius in Screen-Pixeln.
pub const MARKER_RADIUS_PX: f32 = 8.0;
/// Füllfarbe der Marker (RGBA: Rot).
pub const MARKER_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Outline-Farbe der Marker (RGBA: Dunkelrot).
pub const MARKER_OUTLINE_COLOR: [f32; 4] = [0.6, 0.0, 0.0, 1.0];
/// Textfarbe der Marker-Beschriftung (RGBA: Weiß).
pub const MARKER_LABEL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Receiver-Buttons ────────────────────────────────────────────────

/// Kantenlänge der '+'/'-'-Glyphen in Pixeln.
pub const ICON_SIZE_PX: u32 = 16;
/// Farbe der generierten Glyphen (RGBA: Grau).
pub const ICON_COLOR: [f32; 4] = [0.85, 0.85, 0.85, 1.0];
/// Breite des Empfänger-Panels in Pixeln.
pub const RECEIVER_PANEL_WIDTH: f32 = 180.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `receiver_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Marker ──────────────────────────────────────────────────
    /// Marker-Radius in Screen-Pixeln
    pub marker_radius_px: f32,
    /// Füllfarbe der Marker
    pub marker_color: [f32; 4],
    /// Outline-Farbe der Marker
    pub marker_outline_color: [f32; 4],
    /// Textfarbe der Marker-Beschriftung
    pub marker_label_color: [f32; 4],

    // ── Buttons ─────────────────────────────────────────────────
    /// Kantenlänge der Button-Glyphen in Pixeln
    pub icon_size_px: u32,
    /// Farbe der generierten Glyphen
    pub icon_color: [f32; 4],
    /// Optionaler Pfad zum '+'-Bild (sonst generiert)
    #[serde(default)]
    pub add_icon_path: Option<String>,
    /// Optionaler Pfad zum '-'-Bild (sonst generiert)
    #[serde(default)]
    pub remove_icon_path: Option<String>,
    /// Breite des Empfänger-Panels
    #[serde(default = "default_receiver_panel_width")]
    pub receiver_panel_width: f32,

    // ── Hintergrund ─────────────────────────────────────────────
    /// Deckungs-Niveau des Hintergrundbilds
    pub background_opacity: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            marker_radius_px: MARKER_RADIUS_PX,
            marker_color: MARKER_COLOR,
            marker_outline_color: MARKER_OUTLINE_COLOR,
            marker_label_color: MARKER_LABEL_COLOR,

            icon_size_px: ICON_SIZE_PX,
            icon_color: ICON_COLOR,
            add_icon_path: None,
            remove_icon_path: None,
            receiver_panel_width: RECEIVER_PANEL_WIDTH,

            background_opacity: 1.0,
        }
    }
}

/// Serde-Default für `receiver_panel_width` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_receiver_panel_width() -> f32 {
    RECEIVER_PANEL_WIDTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("receiver_map_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("receiver_map_editor.toml")
    }
}

/// Wandelt eine RGBA-Float-Farbe in 8-Bit-Kanäle um.
pub fn rgba_to_u8(color: [f32; 4]) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}
