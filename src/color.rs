//! Terminal color selection.
//!
//! Two independent mechanisms:
//! - a whole-image foreground color chosen on the command line, and
//! - paint mode, which picks a color per pixel from its hue and saturation.
//!
//! The per-pixel decision is a declarative rule table: first the two
//! achromatic guards (washed-out and near-black pixels), then hue buckets
//! evaluated top to bottom, each split into a light and a saturated variant
//! by a bucket-specific saturation threshold.

use palette::{Hsv, IntoColor, Srgb};

use crate::loader::Pixel;

/// ANSI foreground color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color beige (xterm 223), for washed-out warm tones
    Beige,
    /// 256-color orange (xterm 202)
    Orange,
    /// Return to the default foreground (SGR 39)
    Reset,
}

impl TermColor {
    /// The escape sequence that switches the terminal to this color.
    pub fn code(&self) -> &'static str {
        match self {
            TermColor::Black => "\x1b[30m",
            TermColor::Red => "\x1b[31m",
            TermColor::Green => "\x1b[32m",
            TermColor::Yellow => "\x1b[33m",
            TermColor::Blue => "\x1b[34m",
            TermColor::Magenta => "\x1b[35m",
            TermColor::Cyan => "\x1b[36m",
            TermColor::White => "\x1b[37m",
            TermColor::BrightRed => "\x1b[91m",
            TermColor::BrightGreen => "\x1b[92m",
            TermColor::BrightYellow => "\x1b[93m",
            TermColor::BrightBlue => "\x1b[94m",
            TermColor::BrightMagenta => "\x1b[95m",
            TermColor::BrightCyan => "\x1b[96m",
            TermColor::BrightWhite => "\x1b[97m",
            TermColor::Beige => "\x1b[38;5;223m",
            TermColor::Orange => "\x1b[38;5;202m",
            TermColor::Reset => "\x1b[39m",
        }
    }
}

/// Saturation at or below which a pixel is treated as washed-out white.
const WHITE_SATURATION: f32 = 0.11;

/// Value at or below which a pixel is treated as black.
const BLACK_VALUE: f32 = 0.05;

/// One hue bucket: pixels with hue in `(lo, hi]` degrees pick `light` when
/// their saturation is below `light_below`, otherwise `saturated`.
struct HueRule {
    lo: f32,
    hi: f32,
    light_below: f32,
    light: TermColor,
    saturated: TermColor,
}

/// Hue buckets evaluated top to bottom. Red appears twice to cover the
/// wrap-around at 0°/360°. Hues between 350° and 355° fall through to the
/// reset token.
const HUE_RULES: &[HueRule] = &[
    HueRule {
        lo: 0.0,
        hi: 12.0,
        light_below: 0.3,
        light: TermColor::BrightRed,
        saturated: TermColor::Red,
    },
    HueRule {
        lo: 355.0,
        hi: 360.0,
        light_below: 0.3,
        light: TermColor::BrightRed,
        saturated: TermColor::Red,
    },
    HueRule {
        lo: 12.0,
        hi: 30.0,
        light_below: 0.7,
        light: TermColor::Beige,
        saturated: TermColor::Orange,
    },
    HueRule {
        lo: 30.0,
        hi: 75.0,
        light_below: 0.4,
        light: TermColor::BrightYellow,
        saturated: TermColor::Yellow,
    },
    HueRule {
        lo: 75.0,
        hi: 140.0,
        light_below: 0.6,
        light: TermColor::BrightGreen,
        saturated: TermColor::Green,
    },
    HueRule {
        lo: 140.0,
        hi: 170.0,
        light_below: 0.5,
        light: TermColor::BrightCyan,
        saturated: TermColor::Cyan,
    },
    HueRule {
        lo: 170.0,
        hi: 270.0,
        light_below: 0.7,
        light: TermColor::BrightBlue,
        saturated: TermColor::Blue,
    },
    HueRule {
        lo: 270.0,
        hi: 350.0,
        light_below: 0.8,
        light: TermColor::BrightMagenta,
        saturated: TermColor::Magenta,
    },
];

/// Pick the display color for one pixel in paint mode.
pub fn pixel_color(pixel: Pixel) -> TermColor {
    let hsv: Hsv = Srgb::new(
        pixel.r as f32 / 255.0,
        pixel.g as f32 / 255.0,
        pixel.b as f32 / 255.0,
    )
    .into_color();

    let hue = hsv.hue.into_positive_degrees();
    let saturation = hsv.saturation;
    let value = hsv.value;

    if saturation <= WHITE_SATURATION {
        return TermColor::BrightWhite;
    }
    if value <= BLACK_VALUE {
        return TermColor::Black;
    }

    for rule in HUE_RULES {
        if hue >= rule.lo && hue <= rule.hi {
            return if saturation < rule.light_below {
                rule.light
            } else {
                rule.saturated
            };
        }
    }

    TermColor::Reset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r, g, b }
    }

    #[test]
    fn test_washed_out_pixels_are_bright_white() {
        assert_eq!(pixel_color(px(128, 128, 128)), TermColor::BrightWhite);
        assert_eq!(pixel_color(px(255, 255, 255)), TermColor::BrightWhite);
        // Low saturation wins even over the black guard
        assert_eq!(pixel_color(px(0, 0, 0)), TermColor::BrightWhite);
    }

    #[test]
    fn test_near_black_saturated_pixel() {
        // Fully saturated but almost no value: 10/255 = 0.039
        assert_eq!(pixel_color(px(10, 0, 0)), TermColor::Black);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(pixel_color(px(255, 0, 0)), TermColor::Red);
        assert_eq!(pixel_color(px(0, 255, 0)), TermColor::Green);
        assert_eq!(pixel_color(px(255, 255, 0)), TermColor::Yellow);
        assert_eq!(pixel_color(px(255, 0, 255)), TermColor::Magenta);
    }

    #[test]
    fn test_pure_blue_and_deep_blue() {
        // Hue 240 sits in the wide blue bucket
        assert_eq!(pixel_color(px(0, 0, 255)), TermColor::Blue);
        // So does hue 180: the cyan bucket stops at 170
        assert_eq!(pixel_color(px(0, 255, 255)), TermColor::Blue);
    }

    #[test]
    fn test_cyan_bucket() {
        // Hue 160, full saturation
        assert_eq!(pixel_color(px(0, 255, 170)), TermColor::Cyan);
    }

    #[test]
    fn test_light_variants() {
        // Pale red: hue 0, saturation (255-200)/255 = 0.22
        assert_eq!(pixel_color(px(255, 200, 200)), TermColor::BrightRed);
        // Pale green: saturation ~0.5, below the 0.6 threshold
        assert_eq!(pixel_color(px(128, 255, 128)), TermColor::BrightGreen);
        // Pale blue: saturation ~0.5, below the 0.7 threshold
        assert_eq!(pixel_color(px(128, 128, 255)), TermColor::BrightBlue);
    }

    #[test]
    fn test_orange_bucket() {
        // Hue ~23.5, full saturation
        assert_eq!(pixel_color(px(255, 100, 0)), TermColor::Orange);
        // Hue 20, saturation ~0.26: the washed-out warm tone
        assert_eq!(pixel_color(px(230, 190, 170)), TermColor::Beige);
    }

    #[test]
    fn test_codes_are_escape_sequences() {
        assert_eq!(TermColor::Red.code(), "\x1b[31m");
        assert_eq!(TermColor::Reset.code(), "\x1b[39m");
        assert_eq!(TermColor::Beige.code(), "\x1b[38;5;223m");
        for c in [TermColor::Black, TermColor::BrightWhite, TermColor::Orange] {
            assert!(c.code().starts_with('\x1b'));
        }
    }
}
