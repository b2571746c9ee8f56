//! Receiver-Button: Zwei-Zustands-Schalter zum Platzieren/Entfernen eines Markers.

use crate::core::{MapContainer, MarkerIcon, MarkerState, Receiver};
use anyhow::Result;
use std::rc::Rc;

/// Darstellung eines Receiver-Buttons (Text + Icon).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonFace {
    /// Beschriftung (Empfänger-ID)
    pub text: String,
    /// Glyph passend zum Zustand
    pub icon: MarkerIcon,
}

impl ButtonFace {
    /// Reine Funktion aus Zustand und Empfänger-ID.
    pub fn for_state(state: MarkerState, receiver_id: u32) -> Self {
        Self {
            text: receiver_id.to_string(),
            icon: state.icon(),
        }
    }
}

/// Ergebnis einer Button-Aktivierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Marker wurde platziert, Zustand ist jetzt `Remove`
    Added,
    /// Marker wurde entfernt, Zustand ist jetzt `Add`
    Removed,
    /// Kein Hintergrundbild geladen, nichts passiert
    Skipped,
}

/// Schaltet den Marker eines Empfängers auf der Karten-Vorschau an und aus.
///
/// Der Zustand wird einmalig beim Erstellen aus `Receiver::is_on_map()`
/// abgeleitet und danach nur über [`activate`](Self::activate) oder
/// [`set_state`](Self::set_state) geändert.
#[derive(Debug)]
pub struct ReceiverButton {
    receiver: Rc<Receiver>,
    state: MarkerState,
    face: ButtonFace,
}

impl ReceiverButton {
    /// Erstellt einen Button für den Empfänger.
    pub fn new(receiver: Rc<Receiver>) -> Self {
        let state = MarkerState::from_on_map(receiver.is_on_map());
        let face = ButtonFace::for_state(state, receiver.id());
        Self {
            receiver,
            state,
            face,
        }
    }

    /// Zugehöriger Empfänger
    pub fn receiver(&self) -> &Rc<Receiver> {
        &self.receiver
    }

    /// Aktueller Zustand
    pub fn state(&self) -> MarkerState {
        self.state
    }

    /// Aktuelle Darstellung
    pub fn face(&self) -> &ButtonFace {
        &self.face
    }

    /// Setzt den Zustand und zeichnet Text/Icon neu.
    pub fn set_state(&mut self, state: MarkerState) {
        self.state = state;
        self.refresh_face();
    }

    /// Reagiert auf einen Klick.
    ///
    /// Im Zustand `Add` ohne Hintergrundbild passiert nichts. Schlägt der
    /// Container-Aufruf fehl, bleibt der Zustand unverändert.
    pub fn activate(&mut self, container: &mut dyn MapContainer) -> Result<Activation> {
        let activation = match self.state {
            MarkerState::Add => {
                if !container.has_background_surface() {
                    return Ok(Activation::Skipped);
                }
                container.add_marker(&self.receiver)?;
                Activation::Added
            }
            MarkerState::Remove => {
                container.remove_marker(&self.receiver)?;
                Activation::Removed
            }
        };

        self.set_state(self.state.toggled());
        Ok(activation)
    }

    fn refresh_face(&mut self) {
        self.face = ButtonFace::for_state(self.state, self.receiver.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Container-Attrappe, die Aufrufe mitzählt.
    #[derive(Default)]
    struct RecordingContainer {
        surface: bool,
        fail: bool,
        added: Vec<u32>,
        removed: Vec<u32>,
    }

    impl MapContainer for RecordingContainer {
        fn has_background_surface(&self) -> bool {
            self.surface
        }

        fn add_marker(&mut self, receiver: &Receiver) -> Result<()> {
            if self.fail {
                anyhow::bail!("add fehlgeschlagen");
            }
            self.added.push(receiver.id());
            Ok(())
        }

        fn remove_marker(&mut self, receiver: &Receiver) -> Result<()> {
            if self.fail {
                anyhow::bail!("remove fehlgeschlagen");
            }
            self.removed.push(receiver.id());
            Ok(())
        }
    }

    fn button(id: u32, on_map: bool) -> ReceiverButton {
        ReceiverButton::new(Rc::new(Receiver::new(id, "", on_map)))
    }

    #[test]
    fn test_new_button_on_map_starts_in_remove() {
        for id in [0, 1, 42, u32::MAX] {
            let b = button(id, true);
            assert_eq!(b.state(), MarkerState::Remove);
            assert_eq!(b.face().icon, MarkerIcon::Remove);
            assert_eq!(b.face().text, id.to_string());
        }
    }

    #[test]
    fn test_new_button_off_map_starts_in_add() {
        for id in [0, 3, 999] {
            let b = button(id, false);
            assert_eq!(b.state(), MarkerState::Add);
            assert_eq!(b.face().icon, MarkerIcon::Add);
        }
    }

    #[test]
    fn test_set_state_is_idempotent() {
        let mut b = button(5, false);

        b.set_state(MarkerState::Remove);
        let once = b.face().clone();
        b.set_state(MarkerState::Remove);

        assert_eq!(b.face(), &once);
        assert_eq!(b.face(), &ButtonFace::for_state(MarkerState::Remove, 5));
    }

    #[test]
    fn test_activate_add_without_surface_is_noop() {
        let mut b = button(1, false);
        let mut container = RecordingContainer::default();

        let result = b.activate(&mut container).unwrap();

        assert_eq!(result, Activation::Skipped);
        assert_eq!(b.state(), MarkerState::Add);
        assert!(container.added.is_empty());
        assert!(container.removed.is_empty());
    }

    #[test]
    fn test_activate_add_with_surface_adds_once() {
        let mut b = button(1, false);
        let mut container = RecordingContainer {
            surface: true,
            ..Default::default()
        };

        let result = b.activate(&mut container).unwrap();

        assert_eq!(result, Activation::Added);
        assert_eq!(container.added, vec![1]);
        assert!(container.removed.is_empty());
        assert_eq!(b.state(), MarkerState::Remove);
        assert_eq!(b.face().icon, MarkerIcon::Remove);
    }

    #[test]
    fn test_activate_remove_ignores_surface() {
        for surface in [false, true] {
            let mut b = button(8, true);
            let mut container = RecordingContainer {
                surface,
                ..Default::default()
            };

            let result = b.activate(&mut container).unwrap();

            assert_eq!(result, Activation::Removed);
            assert_eq!(container.removed, vec![8]);
            assert!(container.added.is_empty());
            assert_eq!(b.state(), MarkerState::Add);
            assert_eq!(b.face().icon, MarkerIcon::Add);
        }
    }

    #[test]
    fn test_failed_container_call_keeps_state() {
        let mut b = button(2, false);
        let mut container = RecordingContainer {
            surface: true,
            fail: true,
            ..Default::default()
        };

        assert!(b.activate(&mut container).is_err());
        assert_eq!(b.state(), MarkerState::Add);
        assert_eq!(b.face().icon, MarkerIcon::Add);

        b.set_state(MarkerState::Remove);
        assert!(b.activate(&mut container).is_err());
        assert_eq!(b.state(), MarkerState::Remove);
    }

    #[test]
    fn test_scenario_receiver_seven() {
        let mut b = button(7, false);
        assert_eq!(b.state(), MarkerState::Add);
        assert_eq!(b.face().text, "7");
        assert_eq!(b.face().icon, MarkerIcon::Add);

        let mut container = RecordingContainer::default();
        assert_eq!(b.activate(&mut container).unwrap(), Activation::Skipped);
        assert_eq!(b.state(), MarkerState::Add);
        assert!(container.added.is_empty() && container.removed.is_empty());

        container.surface = true;
        assert_eq!(b.activate(&mut container).unwrap(), Activation::Added);
        assert_eq!(container.added, vec![7]);
        assert_eq!(b.state(), MarkerState::Remove);
        assert_eq!(b.face().icon, MarkerIcon::Remove);

        assert_eq!(b.activate(&mut container).unwrap(), Activation::Removed);
        assert_eq!(container.removed, vec![7]);
        assert_eq!(container.added, vec![7]);
        assert_eq!(b.state(), MarkerState::Add);
        assert_eq!(b.face().icon, MarkerIcon::Add);
    }
}
