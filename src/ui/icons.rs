//! GPU-Texturen für Button-Glyphen und Hintergrundbild.

use crate::app::AddMapDialogState;
use crate::core::MarkerIcon;
use crate::shared::{load_or_render_glyph, rgba_to_u8, EditorOptions};
use image::RgbaImage;

/// Die beiden Receiver-Button-Glyphen.
///
/// Wird einmal beim Start erzeugt und per Referenz an alle Buttons gereicht.
pub struct MarkerIcons {
    add: egui::TextureHandle,
    remove: egui::TextureHandle,
}

impl MarkerIcons {
    /// Lädt (oder generiert) beide Glyphen und lädt sie als Texturen hoch.
    pub fn load(ctx: &egui::Context, options: &EditorOptions) -> Self {
        let color = rgba_to_u8(options.icon_color);
        let size = options.icon_size_px;

        let add = load_or_render_glyph(
            MarkerIcon::Add,
            options.add_icon_path.as_deref(),
            size,
            color,
        );
        let remove = load_or_render_glyph(
            MarkerIcon::Remove,
            options.remove_icon_path.as_deref(),
            size,
            color,
        );

        Self {
            add: upload(ctx, "receiver_icon_add", &add),
            remove: upload(ctx, "receiver_icon_remove", &remove),
        }
    }

    /// Textur zur Glyphe
    pub fn texture(&self, icon: MarkerIcon) -> &egui::TextureHandle {
        match icon {
            MarkerIcon::Add => &self.add,
            MarkerIcon::Remove => &self.remove,
        }
    }
}

/// Textur des aktuellen Hintergrundbilds.
#[derive(Default)]
pub struct PreviewTextures {
    background: Option<egui::TextureHandle>,
}

impl PreviewTextures {
    /// Erstellt einen leeren Textur-Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Hintergrund-Textur
    pub fn background(&self) -> Option<&egui::TextureHandle> {
        self.background.as_ref()
    }

    /// Lädt die Hintergrund-Textur neu, wenn der Dialog-State das verlangt.
    pub fn sync(&mut self, ctx: &egui::Context, dialog: &mut AddMapDialogState) {
        if !dialog.background_dirty {
            return;
        }
        dialog.background_dirty = false;

        if let Some(bg_map) = dialog.preview.background() {
            let rgba = bg_map.image_data().to_rgba8();
            self.background = Some(upload(ctx, "background_map", &rgba));
            log::info!("Background-Map als Textur hochgeladen");
        } else {
            self.background = None;
            log::info!("Background-Textur entfernt");
        }
    }
}

fn upload(ctx: &egui::Context, name: &str, image: &RgbaImage) -> egui::TextureHandle {
    let size = [image.width() as usize, image.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
    ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR)
}
