//! Receiver Map Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    Activation, AddMapDialogState, AppCommand, AppController, AppIntent, AppState, ButtonFace,
    ReceiverButton, UiState,
};
pub use core::{
    load_receivers_from_file, BackgroundMap, MapContainer, MapPreview, MarkerIcon, MarkerState,
    PlacedMarker, Receiver, ReceiverEntry,
};
pub use shared::EditorOptions;
