//! Pixel brightness estimation.

use crate::loader::Pixel;

/// Formula used to collapse an RGB triple into a single brightness value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrightnessMode {
    /// Plain channel average: round((r+g+b)/3)
    Average,
    /// HSL-style lightness: round((max+min)/2)
    Lightness,
    /// Perceptual luminosity: round(0.21r + 0.72g + 0.07b)
    #[default]
    Luminosity,
}

impl BrightnessMode {
    /// Compute the brightness of a pixel with this formula.
    /// The result is always in [0, 255].
    pub fn brightness(&self, pixel: Pixel) -> u8 {
        match self {
            BrightnessMode::Average => average(pixel.r, pixel.g, pixel.b),
            BrightnessMode::Lightness => lightness(pixel.r, pixel.g, pixel.b),
            BrightnessMode::Luminosity => luminosity(pixel.r, pixel.g, pixel.b),
        }
    }

    /// Get a human-readable name for the formula.
    pub fn name(&self) -> &'static str {
        match self {
            BrightnessMode::Average => "average",
            BrightnessMode::Lightness => "lightness",
            BrightnessMode::Luminosity => "luminosity",
        }
    }
}

/// Channel average, rounded to the nearest integer.
pub fn average(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u32 + g as u32 + b as u32;
    // Integer rounding of sum/3
    ((sum + 1) / 3).min(255) as u8
}

/// HSL-style lightness: midpoint of the brightest and darkest channel.
pub fn lightness(r: u8, g: u8, b: u8) -> u8 {
    let max = r.max(g).max(b) as u32;
    let min = r.min(g).min(b) as u32;
    ((max + min + 1) / 2) as u8
}

/// Perceptual luminosity with green weighted heaviest.
pub fn luminosity(r: u8, g: u8, b: u8) -> u8 {
    let lum = 0.21 * r as f32 + 0.72 * g as f32 + 0.07 * b as f32;
    lum.round().min(255.0) as u8
}
