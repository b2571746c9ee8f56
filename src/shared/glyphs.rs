//! Erzeugung und Laden der '+'/'-'-Glyphen für Receiver-Buttons.

use crate::core::MarkerIcon;
use anyhow::{Context, Result};
use image::{imageops::FilterType, Rgba, RgbaImage};

/// Zeichnet eine quadratische Glyphe (transparenter Hintergrund).
///
/// `Add` ist ein Plus, `Remove` ein Minus. Die Balken sind ein Fünftel
/// der Kantenlänge dick und halten einen Rand von einem Sechstel.
pub fn render_glyph(icon: MarkerIcon, size: u32, color: [u8; 4]) -> RgbaImage {
    let size = size.max(3);
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    let thickness = (size / 5).max(1);
    let margin = size / 6;
    let bar_start = (size - thickness) / 2;
    let bar_end = bar_start + thickness;
    let pixel = Rgba(color);

    for y in 0..size {
        for x in 0..size {
            let in_span = |v: u32| v >= margin && v < size - margin;
            let horizontal = y >= bar_start && y < bar_end && in_span(x);
            let vertical = x >= bar_start && x < bar_end && in_span(y);
            let hit = match icon {
                MarkerIcon::Add => horizontal || vertical,
                MarkerIcon::Remove => horizontal,
            };
            if hit {
                img.put_pixel(x, y, pixel);
            }
        }
    }

    img
}

/// Lädt eine Glyphe aus einer Bilddatei und skaliert sie auf `size`.
pub fn load_glyph(path: &str, size: u32) -> Result<RgbaImage> {
    let image = image::open(path).with_context(|| format!("Icon nicht ladbar: {}", path))?;
    Ok(image
        .resize_exact(size, size, FilterType::Triangle)
        .into_rgba8())
}

/// Lädt die Glyphe aus `path`, bei Fehler oder ohne Pfad wird sie generiert.
pub fn load_or_render_glyph(
    icon: MarkerIcon,
    path: Option<&str>,
    size: u32,
    color: [u8; 4],
) -> RgbaImage {
    if let Some(path) = path {
        match load_glyph(path, size) {
            Ok(img) => {
                log::info!("Icon {:?} geladen aus: {}", icon, path);
                return img;
            }
            Err(e) => log::warn!("{:#}, verwende generierte Glyphe", e),
        }
    }
    render_glyph(icon, size, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    #[test]
    fn test_plus_has_vertical_bar_minus_does_not() {
        let plus = render_glyph(MarkerIcon::Add, 15, WHITE);
        let minus = render_glyph(MarkerIcon::Remove, 15, WHITE);

        // Mitte der oberen Hälfte: nur beim Plus gefüllt
        assert_eq!(plus.get_pixel(7, 4).0, WHITE);
        assert_eq!(minus.get_pixel(7, 4).0[3], 0);

        // Mittelpunkt: beide gefüllt
        assert_eq!(plus.get_pixel(7, 7).0, WHITE);
        assert_eq!(minus.get_pixel(7, 7).0, WHITE);
    }

    #[test]
    fn test_corners_stay_transparent() {
        let plus = render_glyph(MarkerIcon::Add, 16, WHITE);
        for (x, y) in [(0, 0), (15, 0), (0, 15), (15, 15)] {
            assert_eq!(plus.get_pixel(x, y).0[3], 0);
        }
    }

    #[test]
    fn test_tiny_size_is_raised() {
        let img = render_glyph(MarkerIcon::Remove, 0, WHITE);
        assert_eq!(img.dimensions(), (3, 3));
    }

    #[test]
    fn test_missing_icon_file_falls_back_to_generated() {
        let img = load_or_render_glyph(MarkerIcon::Add, Some("/nonexistent/plus.png"), 12, WHITE);
        assert_eq!(img, render_glyph(MarkerIcon::Add, 12, WHITE));
    }

    #[test]
    fn test_icon_file_is_scaled() {
        let path = std::env::temp_dir().join("test_receiver_map_editor_minus.png");
        RgbaImage::from_pixel(32, 32, Rgba(WHITE)).save(&path).unwrap();

        let img = load_or_render_glyph(MarkerIcon::Remove, path.to_str(), 10, WHITE);
        let _ = std::fs::remove_file(&path);

        assert_eq!(img.dimensions(), (10, 10));
        assert_eq!(img.get_pixel(0, 0).0, WHITE);
    }
}
