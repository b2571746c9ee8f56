//! Background-Map-Loader für die Karten-Vorschau.

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::io::BufReader;

/// Bekannte Bild-Endungen für den Dateidialog
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Hintergrundbild der Karten-Vorschau
pub struct BackgroundMap {
    /// Dekodierte Bilddaten
    image_data: DynamicImage,
    /// Herkunft (Dateipfad) für Status-Anzeige
    source_label: String,
}

impl BackgroundMap {
    /// Lädt eine Background-Map aus einer Datei
    ///
    /// Unterstützte Formate: PNG, JPG, JPEG
    pub fn load_from_file(path: &str) -> Result<Self> {
        // Zuerst via Dateiendung, danach via Magic Bytes im Dateiinhalt.
        let image = match image::open(path) {
            Ok(img) => img,
            Err(ext_err) => {
                log::warn!(
                    "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}. Versuche Erkennung via Dateiinhalt...",
                    path, ext_err
                );
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Datei nicht gefunden: {}", path))?;
                let reader = ImageReader::new(BufReader::new(file))
                    .with_guessed_format()
                    .with_context(|| format!("Format-Erkennung fehlgeschlagen für: {}", path))?;
                if let Some(fmt) = reader.format() {
                    log::info!("Tatsächliches Bildformat erkannt: {:?} für '{}'", fmt, path);
                }
                reader.decode().with_context(|| {
                    format!("Fehler beim Dekodieren der Background-Map: {}", path)
                })?
            }
        };

        Self::from_image(image, path)
    }

    /// Erstellt eine BackgroundMap aus einem bereits dekodierten Bild.
    ///
    /// Leere Bilder (0 Pixel Breite oder Höhe) werden abgelehnt.
    pub fn from_image(image: DynamicImage, source_label: &str) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            anyhow::bail!("Background-Map '{}' hat keine Pixel", source_label);
        }

        log::info!(
            "Background-Map geladen: {}x{} Pixel von '{}'",
            width,
            height,
            source_label
        );

        Ok(Self {
            image_data: image,
            source_label: source_label.to_string(),
        })
    }

    /// Gibt die Bilddaten zurück
    pub fn image_data(&self) -> &DynamicImage {
        &self.image_data
    }

    /// Herkunft des Bildes (Dateipfad oder Label)
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// Gibt die Dimensionen des Bildes zurück
    pub fn dimensions(&self) -> (u32, u32) {
        self.image_data.dimensions()
    }

    /// Seitenverhältnis Breite/Höhe
    pub fn aspect_ratio(&self) -> f32 {
        let (w, h) = self.dimensions();
        w as f32 / h as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_image_is_rejected() {
        assert!(BackgroundMap::from_image(DynamicImage::new_rgb8(0, 4), "leer").is_err());
    }

    #[test]
    fn test_aspect_ratio() {
        let map = BackgroundMap::from_image(DynamicImage::new_rgb8(400, 200), "breit").unwrap();
        assert_eq!(map.dimensions(), (400, 200));
        assert_eq!(map.aspect_ratio(), 2.0);
        assert_eq!(map.source_label(), "breit");
    }

    #[test]
    fn test_load_png_from_file() {
        let path = std::env::temp_dir().join("test_receiver_map_editor_bg.png");
        DynamicImage::new_rgba8(8, 4).save(&path).unwrap();

        let map = BackgroundMap::load_from_file(path.to_str().unwrap()).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(map.dimensions(), (8, 4));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(BackgroundMap::load_from_file("/nonexistent/map.png").is_err());
    }
}
