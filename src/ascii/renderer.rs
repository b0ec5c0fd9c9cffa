//! Row-major assembly of the final artwork text.

use crate::ascii::brightness::BrightnessMode;
use crate::ascii::charset::CharSet;
use crate::ascii::mapping::brightness_to_chars;
use crate::color::{pixel_color, TermColor};
use crate::loader::PixelGrid;

/// Immutable rendering configuration for one run.
///
/// Every knob is an explicit value held here; nothing is read from ambient
/// state during rendering.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    charset: CharSet,
    mode: BrightnessMode,
    invert: bool,
    repeat: u8,
    paint: bool,
    color: Option<TermColor>,
}

impl Renderer {
    pub fn new(charset: CharSet, mode: BrightnessMode) -> Self {
        Self {
            charset,
            mode,
            invert: false,
            repeat: 2,
            paint: false,
            color: None,
        }
    }

    /// Invert brightness before mapping (for light terminals or print).
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Number of copies of each pixel's character (1-3).
    pub fn with_repeat(mut self, repeat: u8) -> Self {
        self.repeat = repeat;
        self
    }

    /// Enable per-pixel coloring from the hue/saturation rule table.
    pub fn with_paint(mut self, paint: bool) -> Self {
        self.paint = paint;
        self
    }

    /// Whole-image foreground color.
    pub fn with_color(mut self, color: Option<TermColor>) -> Self {
        self.color = color;
        self
    }

    /// Render the pixel grid into the artwork text.
    ///
    /// One output line per grid row, each terminated with `\n`. Without
    /// paint mode the whole-image color (when set) prefixes each line once;
    /// with paint mode every pixel's characters are wrapped in its own color
    /// token and a trailing main-or-reset token.
    pub fn render(&self, grid: &PixelGrid) -> String {
        let chars = self.charset.chars();
        // Painted pixels return to the whole-image color when one is set,
        // otherwise to the default foreground.
        let trail = self.color.unwrap_or(TermColor::Reset);

        let mut art = String::new();
        for row in grid {
            if !self.paint {
                if let Some(color) = self.color {
                    art.push_str(color.code());
                }
            }
            for &pixel in row {
                let b = self.mode.brightness(pixel);
                let glyphs = brightness_to_chars(b, chars, self.invert, self.repeat);
                if self.paint {
                    art.push_str(pixel_color(pixel).code());
                    art.push_str(&glyphs);
                    art.push_str(trail.code());
                } else {
                    art.push_str(&glyphs);
                }
            }
            art.push('\n');
        }
        art
    }
}
