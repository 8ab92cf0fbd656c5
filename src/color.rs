use std::str::FromStr;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Fixed colours for the first two samples: blue for the earlier year and
/// red for the later one.
const SAMPLE_HEX: [&str; 2] = ["#0066FF", "#CC0000"];

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

fn from_hex(hex: &str) -> Option<Color32> {
    let rgb = Srgb::<u8>::from_str(hex).ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Colour per sample, in sample order: the two fixed colours first, then
/// evenly spaced hues for any further series.
pub fn sample_colors(n: usize) -> Vec<Color32> {
    let mut colors: Vec<Color32> = SAMPLE_HEX.iter().take(n).filter_map(|h| from_hex(h)).collect();
    let extra = n - colors.len();
    colors.extend(generate_palette(extra));
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_two_samples_use_fixed_colors() {
        let colors = sample_colors(2);
        assert_eq!(colors, vec![Color32::from_rgb(0x00, 0x66, 0xFF), Color32::from_rgb(0xCC, 0x00, 0x00)]);
    }

    #[test]
    fn extra_samples_get_distinct_colors() {
        let colors = sample_colors(4);
        assert_eq!(colors.len(), 4);
        assert_ne!(colors[2], colors[3]);
        assert!(generate_palette(0).is_empty());
    }
}
