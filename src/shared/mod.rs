//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und Glyphen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod glyphs;
pub mod options;

pub use glyphs::{load_or_render_glyph, render_glyph};
pub use options::{rgba_to_u8, EditorOptions};
