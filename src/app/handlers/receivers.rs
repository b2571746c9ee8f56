//! Handler für die Empfängerliste.

use crate::app::use_cases;
use crate::app::AppState;

/// Lädt eine Empfängerliste aus einer JSON-Datei.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::receivers::load_receivers(state, path)
}
