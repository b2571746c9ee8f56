use crate::app::ReceiverButton;
use crate::core::{MapPreview, MarkerState, Receiver};
use std::rc::Rc;

/// Zustand des Add-Map-Dialogs: Empfänger, ihre Buttons und die Karten-Vorschau.
#[derive(Default)]
pub struct AddMapDialogState {
    /// Alle bekannten Empfänger (geteilt mit den Buttons)
    pub receivers: Vec<Rc<Receiver>>,
    /// Ein Button pro Empfänger, gleiche Reihenfolge wie `receivers`
    pub buttons: Vec<ReceiverButton>,
    /// Karten-Vorschau (Container der Marker)
    pub preview: MapPreview,
    /// Signalisiert, dass die Background-Textur neu hochgeladen werden muss
    pub background_dirty: bool,
}

impl AddMapDialogState {
    /// Erstellt einen leeren Dialog-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ersetzt die Empfängerliste und baut alle Buttons neu auf.
    pub fn set_receivers(&mut self, receivers: Vec<Receiver>) {
        self.receivers = receivers.into_iter().map(Rc::new).collect();
        self.buttons = self
            .receivers
            .iter()
            .map(|r| ReceiverButton::new(Rc::clone(r)))
            .collect();
    }

    /// Button eines Empfängers
    pub fn button(&self, receiver_id: u32) -> Option<&ReceiverButton> {
        self.buttons
            .iter()
            .find(|b| b.receiver().id() == receiver_id)
    }

    /// Empfänger per ID
    pub fn receiver(&self, receiver_id: u32) -> Option<&Rc<Receiver>> {
        self.receivers.iter().find(|r| r.id() == receiver_id)
    }

    /// Gleicht alle Buttons mit der aktuellen Platzierung der Empfänger ab.
    ///
    /// Nötig, wenn Marker an den Buttons vorbei entfernt wurden.
    pub fn resync_buttons(&mut self) {
        for button in &mut self.buttons {
            let state = MarkerState::from_on_map(button.receiver().is_on_map());
            if button.state() != state {
                button.set_state(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_receivers_builds_one_button_per_receiver() {
        let mut dialog = AddMapDialogState::new();
        dialog.set_receivers(vec![
            Receiver::new(1, "A", false),
            Receiver::new(2, "B", true),
        ]);

        assert_eq!(dialog.buttons.len(), 2);
        assert_eq!(dialog.button(1).unwrap().state(), MarkerState::Add);
        assert_eq!(dialog.button(2).unwrap().state(), MarkerState::Remove);
        assert!(dialog.button(3).is_none());
    }

    #[test]
    fn test_buttons_share_receivers_with_dialog() {
        let mut dialog = AddMapDialogState::new();
        dialog.set_receivers(vec![Receiver::new(4, "", false)]);

        let receiver = dialog.receiver(4).unwrap();
        assert!(Rc::ptr_eq(receiver, dialog.button(4).unwrap().receiver()));
    }

    #[test]
    fn test_resync_buttons_follows_receiver_flags() {
        let mut dialog = AddMapDialogState::new();
        dialog.set_receivers(vec![Receiver::new(5, "", true)]);
        assert_eq!(dialog.button(5).unwrap().state(), MarkerState::Remove);

        dialog.receiver(5).unwrap().set_on_map(false);
        dialog.resync_buttons();

        assert_eq!(dialog.button(5).unwrap().state(), MarkerState::Add);
    }
}
