//! Zwei-Zustands-Modell der Receiver-Buttons und zugehörige Icons.

/// Zustand eines Receiver-Buttons.
///
/// - `Add`: Empfänger ist nicht auf der Karte, Button zeigt '+'.
/// - `Remove`: Empfänger ist auf der Karte, Button zeigt '-'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerState {
    /// Empfänger kann hinzugefügt werden
    Add,
    /// Empfänger kann entfernt werden
    Remove,
}

impl MarkerState {
    /// Leitet den Zustand aus der Platzierung ab.
    pub fn from_on_map(on_map: bool) -> Self {
        if on_map {
            Self::Remove
        } else {
            Self::Add
        }
    }

    /// Gegenzustand
    pub fn toggled(self) -> Self {
        match self {
            Self::Add => Self::Remove,
            Self::Remove => Self::Add,
        }
    }

    /// Icon, das zu diesem Zustand gehört
    pub fn icon(self) -> MarkerIcon {
        match self {
            Self::Add => MarkerIcon::Add,
            Self::Remove => MarkerIcon::Remove,
        }
    }
}

/// Die beiden Button-Glyphen ('+' und '-').
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerIcon {
    /// Plus-Glyph
    Add,
    /// Minus-Glyph
    Remove,
}
