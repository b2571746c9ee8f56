//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::MapContainer;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::BackgroundMapSelectionRequested => vec![AppCommand::RequestBackgroundMapDialog],
        AppIntent::BackgroundMapSelected { path } => vec![AppCommand::LoadBackgroundMap { path }],
        AppIntent::BackgroundMapCleared => {
            if state.dialog.preview.has_background_surface() {
                vec![AppCommand::ClearBackgroundMap]
            } else {
                vec![]
            }
        }
        AppIntent::SetBackgroundOpacity { opacity } => {
            vec![AppCommand::SetBackgroundOpacity { opacity }]
        }
        AppIntent::ReceiverFileSelectionRequested => vec![AppCommand::RequestReceiverFileDialog],
        AppIntent::ReceiverFileSelected { path } => vec![AppCommand::LoadReceivers { path }],
        AppIntent::ReceiverButtonClicked { receiver_id } => {
            vec![AppCommand::ToggleReceiverMarker { receiver_id }]
        }
        AppIntent::MarkerDragged {
            receiver_id,
            position,
        } => {
            if state.dialog.preview.has_marker(receiver_id) {
                vec![AppCommand::MoveMarker {
                    receiver_id,
                    position,
                }]
            } else {
                vec![]
            }
        }
        AppIntent::StatusMessageDismissed => vec![AppCommand::DismissStatusMessage],
    }
}
