//! Use-Cases: fachliche Operationen auf dem AppState.

pub mod background_map;
pub mod markers;
pub mod receivers;
