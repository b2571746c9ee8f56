//! Core-Domänentypen: Empfänger, Hintergrundbild, Karten-Vorschau.

pub mod background_map;
pub mod map_preview;
pub mod marker_state;
pub mod receiver;

pub use background_map::{BackgroundMap, IMAGE_EXTENSIONS};
pub use map_preview::{MapContainer, MapPreview, PlacedMarker};
pub use marker_state::{MarkerIcon, MarkerState};
pub use receiver::{load_receivers_from_file, receivers_from_entries, Receiver, ReceiverEntry};
