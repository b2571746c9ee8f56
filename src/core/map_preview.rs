//! Karten-Vorschau: Hintergrundbild plus platzierte Empfänger-Marker.

use super::{BackgroundMap, Receiver};
use anyhow::Result;
use glam::Vec2;
use indexmap::IndexMap;
use std::sync::Arc;

/// Schnittstelle zwischen Receiver-Button und seinem Container.
///
/// Der Button besitzt den Container nie, er bekommt ihn pro Aktivierung geliehen.
pub trait MapContainer {
    /// Ob ein Hintergrundbild geladen ist.
    fn has_background_surface(&self) -> bool;
    /// Platziert den Marker des Empfängers.
    fn add_marker(&mut self, receiver: &Receiver) -> Result<()>;
    /// Entfernt den Marker des Empfängers.
    fn remove_marker(&mut self, receiver: &Receiver) -> Result<()>;
}

/// Abstand zwischen Default-Positionen neuer Marker (normiert).
const SLOT_SPACING: f32 = 0.06;
/// Goldener Winkel in Radiant für die Spiral-Anordnung.
const GOLDEN_ANGLE: f32 = 2.399_963;
/// Ab diesem Abstand gilt ein Slot als frei.
const SLOT_OCCUPIED_EPS: f32 = 1e-4;

/// Ein platzierter Marker in normierten Bildkoordinaten (0..=1, Ursprung oben links).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedMarker {
    /// ID des zugehörigen Empfängers
    pub receiver_id: u32,
    /// Position relativ zur Bildgröße
    pub position: Vec2,
}

/// Vorschau-Panel-Modell des Add-Map-Dialogs.
#[derive(Default)]
pub struct MapPreview {
    background: Option<Arc<BackgroundMap>>,
    markers: IndexMap<u32, PlacedMarker>,
}

impl MapPreview {
    /// Erstellt eine leere Vorschau ohne Hintergrund.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt ein neues Hintergrundbild. Bestehende Marker bleiben erhalten.
    pub fn set_background(&mut self, background: Arc<BackgroundMap>) {
        self.background = Some(background);
    }

    /// Entfernt Hintergrund und alle Marker.
    ///
    /// Gibt die IDs der entfernten Marker zurück, damit der Aufrufer
    /// Empfänger und Buttons nachziehen kann.
    pub fn clear_background(&mut self) -> Vec<u32> {
        self.background = None;
        self.clear_markers()
    }

    /// Entfernt alle Marker, der Hintergrund bleibt.
    pub fn clear_markers(&mut self) -> Vec<u32> {
        self.markers.drain(..).map(|(id, _)| id).collect()
    }

    /// Aktuelles Hintergrundbild
    pub fn background(&self) -> Option<&Arc<BackgroundMap>> {
        self.background.as_ref()
    }

    /// Verschiebt einen platzierten Marker (Position wird auf 0..=1 begrenzt).
    pub fn move_marker(&mut self, receiver_id: u32, position: Vec2) -> Result<()> {
        let Some(marker) = self.markers.get_mut(&receiver_id) else {
            anyhow::bail!("Empfänger {} ist nicht auf der Karte", receiver_id);
        };
        marker.position = position.clamp(Vec2::ZERO, Vec2::ONE);
        Ok(())
    }

    /// Marker eines Empfängers
    pub fn marker(&self, receiver_id: u32) -> Option<&PlacedMarker> {
        self.markers.get(&receiver_id)
    }

    /// Alle Marker in Platzierungsreihenfolge
    pub fn markers(&self) -> impl Iterator<Item = &PlacedMarker> {
        self.markers.values()
    }

    /// Anzahl platzierter Marker
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Ob der Empfänger einen Marker hat
    pub fn has_marker(&self, receiver_id: u32) -> bool {
        self.markers.contains_key(&receiver_id)
    }

    /// Default-Position für den n-ten Marker: Spirale um die Bildmitte.
    fn default_slot(index: usize) -> Vec2 {
        let center = Vec2::splat(0.5);
        if index == 0 {
            return center;
        }
        let n = index as f32;
        let angle = n * GOLDEN_ANGLE;
        let radius = SLOT_SPACING * n.sqrt();
        (center + Vec2::new(angle.cos(), angle.sin()) * radius).clamp(Vec2::ZERO, Vec2::ONE)
    }

    /// Erster Spiral-Slot, auf dem kein Marker liegt.
    fn next_free_slot(&self) -> Vec2 {
        let mut index = 0;
        loop {
            let slot = Self::default_slot(index);
            let occupied = self
                .markers
                .values()
                .any(|m| m.position.distance(slot) < SLOT_OCCUPIED_EPS);
            if !occupied {
                return slot;
            }
            index += 1;
        }
    }
}

impl MapContainer for MapPreview {
    fn has_background_surface(&self) -> bool {
        self.background.is_some()
    }

    fn add_marker(&mut self, receiver: &Receiver) -> Result<()> {
        if !self.has_background_surface() {
            anyhow::bail!(
                "Empfänger {} kann ohne Hintergrundbild nicht platziert werden",
                receiver.id()
            );
        }
        if self.markers.contains_key(&receiver.id()) {
            anyhow::bail!("Empfänger {} ist bereits auf der Karte", receiver.id());
        }

        let position = self.next_free_slot();
        self.markers.insert(
            receiver.id(),
            PlacedMarker {
                receiver_id: receiver.id(),
                position,
            },
        );
        receiver.set_on_map(true);
        log::info!(
            "Empfänger {} platziert bei ({:.3}, {:.3})",
            receiver.id(),
            position.x,
            position.y
        );
        Ok(())
    }

    fn remove_marker(&mut self, receiver: &Receiver) -> Result<()> {
        if self.markers.shift_remove(&receiver.id()).is_none() {
            anyhow::bail!("Empfänger {} ist nicht auf der Karte", receiver.id());
        }
        receiver.set_on_map(false);
        log::info!("Empfänger {} von der Karte entfernt", receiver.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::DynamicImage;

    fn preview_with_background() -> MapPreview {
        let mut preview = MapPreview::new();
        let bg = BackgroundMap::from_image(DynamicImage::new_rgb8(16, 16), "test").unwrap();
        preview.set_background(Arc::new(bg));
        preview
    }

    #[test]
    fn test_add_marker_requires_background() {
        let mut preview = MapPreview::new();
        let receiver = Receiver::new(1, "", false);

        assert!(preview.add_marker(&receiver).is_err());
        assert!(!receiver.is_on_map());
        assert_eq!(preview.marker_count(), 0);
    }

    #[test]
    fn test_add_and_remove_marker_syncs_receiver_flag() {
        let mut preview = preview_with_background();
        let receiver = Receiver::new(7, "", false);

        preview.add_marker(&receiver).unwrap();
        assert!(receiver.is_on_map());
        assert!(preview.has_marker(7));

        preview.remove_marker(&receiver).unwrap();
        assert!(!receiver.is_on_map());
        assert!(!preview.has_marker(7));
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut preview = preview_with_background();
        let receiver = Receiver::new(2, "", false);

        preview.add_marker(&receiver).unwrap();
        assert!(preview.add_marker(&receiver).is_err());
        assert_eq!(preview.marker_count(), 1);
    }

    #[test]
    fn test_remove_unplaced_marker_is_rejected() {
        let mut preview = preview_with_background();
        let receiver = Receiver::new(2, "", false);

        assert!(preview.remove_marker(&receiver).is_err());
    }

    #[test]
    fn test_first_marker_lands_in_center_and_others_spread() {
        let mut preview = preview_with_background();
        let a = Receiver::new(1, "", false);
        let b = Receiver::new(2, "", false);
        preview.add_marker(&a).unwrap();
        preview.add_marker(&b).unwrap();

        let first = preview.marker(1).unwrap().position;
        let second = preview.marker(2).unwrap().position;
        assert_relative_eq!(first.x, 0.5);
        assert_relative_eq!(first.y, 0.5);
        assert!(first.distance(second) > 0.01);
    }

    #[test]
    fn test_marker_added_after_removal_does_not_cover_existing_one() {
        let mut preview = preview_with_background();
        let receivers: Vec<Receiver> = (1..=4).map(|id| Receiver::new(id, "", false)).collect();
        for r in &receivers[..3] {
            preview.add_marker(r).unwrap();
        }

        preview.remove_marker(&receivers[0]).unwrap();
        preview.add_marker(&receivers[3]).unwrap();

        let fourth = preview.marker(4).unwrap().position;
        for id in [2, 3] {
            let other = preview.marker(id).unwrap().position;
            assert!(
                fourth.distance(other) > 0.01,
                "Marker 4 liegt auf Marker {}",
                id
            );
        }
        // Der freigewordene Mittel-Slot wird wiederverwendet
        assert_relative_eq!(fourth.x, 0.5);
        assert_relative_eq!(fourth.y, 0.5);
    }

    #[test]
    fn test_dragged_marker_frees_its_slot() {
        let mut preview = preview_with_background();
        let a = Receiver::new(1, "", false);
        let b = Receiver::new(2, "", false);
        preview.add_marker(&a).unwrap();
        preview.move_marker(1, Vec2::new(0.1, 0.1)).unwrap();

        preview.add_marker(&b).unwrap();

        let pos = preview.marker(2).unwrap().position;
        assert_relative_eq!(pos.x, 0.5);
        assert_relative_eq!(pos.y, 0.5);
    }

    #[test]
    fn test_move_marker_clamps_to_image() {
        let mut preview = preview_with_background();
        let receiver = Receiver::new(5, "", false);
        preview.add_marker(&receiver).unwrap();

        preview.move_marker(5, Vec2::new(1.4, -0.2)).unwrap();

        let pos = preview.marker(5).unwrap().position;
        assert_relative_eq!(pos.x, 1.0);
        assert_relative_eq!(pos.y, 0.0);
        assert!(preview.move_marker(99, Vec2::ZERO).is_err());
    }

    #[test]
    fn test_clear_background_removes_all_markers() {
        let mut preview = preview_with_background();
        let a = Receiver::new(1, "", false);
        let b = Receiver::new(4, "", false);
        preview.add_marker(&a).unwrap();
        preview.add_marker(&b).unwrap();

        let removed = preview.clear_background();

        assert_eq!(removed, vec![1, 4]);
        assert!(!preview.has_background_surface());
        assert_eq!(preview.marker_count(), 0);
    }

    #[test]
    fn test_markers_keep_placement_order_after_removal() {
        let mut preview = preview_with_background();
        let receivers: Vec<Receiver> = (1..=3).map(|id| Receiver::new(id, "", false)).collect();
        for r in &receivers {
            preview.add_marker(r).unwrap();
        }

        preview.remove_marker(&receivers[1]).unwrap();

        let ids: Vec<u32> = preview.markers().map(|m| m.receiver_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
