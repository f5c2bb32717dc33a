use palette::white_point::D65;
use palette::{FromColor, Hsluv, Srgb};

const HUE_OFFSET: f64 = 0.01;
const SATURATION: f64 = 0.9;
const LIGHTNESS: f64 = 0.65;

/// `n` evenly spaced HUSL hues at fixed saturation and lightness, as `#rrggbb`
pub fn husl_palette(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let hue = ((i as f64 / n as f64) + HUE_OFFSET) % 1.0 * 359.0;
            let husl = Hsluv::<D65, f64>::new(hue, SATURATION * 99.0, LIGHTNESS * 99.0);
            srgb_to_hex(&Srgb::<f64>::from_color(husl))
        })
        .collect()
}

fn srgb_to_hex(color: &Srgb<f64>) -> String {
    let r = (color.red.clamp(0.0, 1.0) * 255.0).round() as u8;
    let g = (color.green.clamp(0.0, 1.0) * 255.0).round() as u8;
    let b = (color.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
