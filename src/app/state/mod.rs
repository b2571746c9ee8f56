//! Application State — zentrale Datenhaltung.

mod app_state;
mod dialog;
mod ui;

pub use app_state::AppState;
pub use dialog::AddMapDialogState;
pub use ui::UiState;
