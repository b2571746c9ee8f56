//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod receiver_button;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Empfänger, Vorschau, Dialoge).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use receiver_button::{Activation, ButtonFace, ReceiverButton};
pub use state::{AddMapDialogState, AppState, UiState};
