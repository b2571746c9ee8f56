//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Verarbeitet alle Intents eines Frames.
    ///
    /// Fehler brechen nur den jeweiligen Intent ab: sie werden geloggt und
    /// als Statusmeldung angezeigt.
    pub fn process_intents(&mut self, state: &mut AppState, intents: Vec<AppIntent>) {
        for intent in intents {
            if let Err(e) = self.handle_intent(state, intent) {
                log::error!("Event handling failed: {:#}", e);
                state.ui.status_message = Some(format!("{:#}", e));
            }
        }
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Background-Map ===
            AppCommand::LoadBackgroundMap { path } => handlers::map::load_background_map(state, path)?,
            AppCommand::ClearBackgroundMap => handlers::map::clear_background_map(state),
            AppCommand::SetBackgroundOpacity { opacity } => {
                handlers::map::set_background_opacity(state, opacity)
            }

            // === Marker ===
            AppCommand::ToggleReceiverMarker { receiver_id } => {
                handlers::map::toggle_receiver_marker(state, receiver_id)?
            }
            AppCommand::MoveMarker {
                receiver_id,
                position,
            } => handlers::map::move_marker(state, receiver_id, position)?,

            // === Empfänger ===
            AppCommand::LoadReceivers { path } => handlers::receivers::load(state, path)?,

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::RequestBackgroundMapDialog => {
                handlers::dialog::request_background_map_dialog(state)
            }
            AppCommand::RequestReceiverFileDialog => {
                handlers::dialog::request_receiver_file_dialog(state)
            }
            AppCommand::DismissStatusMessage => handlers::dialog::dismiss_status_message(state),
        }

        Ok(())
    }
}
