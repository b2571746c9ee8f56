//! Empfänger-Modell und Laden der Empfängerliste.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::cell::Cell;
use std::collections::HashSet;

/// Ein Empfänger, der als Marker auf der Hintergrundkarte platziert werden kann.
///
/// Wird per `Rc` zwischen Dialog-Zustand und Receiver-Buttons geteilt.
/// Die Platzierung liegt in einer `Cell`, weil alle Zugriffe im UI-Thread
/// stattfinden und nur die `MapPreview` sie ändert.
#[derive(Debug)]
pub struct Receiver {
    id: u32,
    name: String,
    on_map: Cell<bool>,
}

impl Receiver {
    /// Erstellt einen neuen Empfänger.
    pub fn new(id: u32, name: impl Into<String>, on_map: bool) -> Self {
        Self {
            id,
            name: name.into(),
            on_map: Cell::new(on_map),
        }
    }

    /// Empfänger-ID
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Anzeigename (kann leer sein)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name für Listen und Tooltips, fällt auf `Receiver <id>` zurück.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Receiver {}", self.id)
        } else {
            self.name.clone()
        }
    }

    /// Ob der Empfänger aktuell auf der Karte platziert ist.
    pub fn is_on_map(&self) -> bool {
        self.on_map.get()
    }

    /// Setzt das Platzierungs-Flag.
    pub fn set_on_map(&self, on_map: bool) {
        self.on_map.set(on_map);
    }
}

/// Eintrag der Empfänger-Datei (JSON-Array).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReceiverEntry {
    /// Empfänger-ID
    pub id: u32,
    /// Optionaler Anzeigename
    #[serde(default)]
    pub name: String,
}

/// Wandelt Datei-Einträge in Empfänger um (nach ID sortiert, nicht platziert).
///
/// Doppelte IDs werden abgelehnt.
pub fn receivers_from_entries(entries: Vec<ReceiverEntry>) -> Result<Vec<Receiver>> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in &entries {
        if !seen.insert(entry.id) {
            anyhow::bail!("Doppelte Empfänger-ID in Empfängerliste: {}", entry.id);
        }
    }

    let mut receivers: Vec<Receiver> = entries
        .into_iter()
        .map(|e| Receiver::new(e.id, e.name, false))
        .collect();
    receivers.sort_by_key(Receiver::id);
    Ok(receivers)
}

/// Lädt eine Empfängerliste aus einer JSON-Datei.
///
/// Format: `[{"id": 7, "name": "Nord"}, {"id": 8}]`
pub fn load_receivers_from_file(path: &str) -> Result<Vec<Receiver>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Empfänger-Datei nicht lesbar: {}", path))?;
    let entries: Vec<ReceiverEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Empfänger-Datei fehlerhaft: {}", path))?;

    let receivers = receivers_from_entries(entries)?;
    log::info!("{} Empfänger geladen aus: {}", receivers.len(), path);
    Ok(receivers)
}
