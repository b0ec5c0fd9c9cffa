//! CLI enum types for brightness, color, and ramp options.

use clap::ValueEnum;

use crate::ascii::{BrightnessMode, CharSet};
use crate::color::TermColor;

/// Brightness formula selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BrightnessArg {
    Average,
    Lightness,
    #[default]
    Luminosity,
}

impl From<BrightnessArg> for BrightnessMode {
    fn from(b: BrightnessArg) -> Self {
        match b {
            BrightnessArg::Average => BrightnessMode::Average,
            BrightnessArg::Lightness => BrightnessMode::Lightness,
            BrightnessArg::Luminosity => BrightnessMode::Luminosity,
        }
    }
}

/// Whole-image output color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputColor {
    Black,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
}

impl From<OutputColor> for TermColor {
    fn from(c: OutputColor) -> Self {
        match c {
            OutputColor::Black => TermColor::Black,
            OutputColor::Blue => TermColor::Blue,
            OutputColor::Cyan => TermColor::Cyan,
            OutputColor::Green => TermColor::Green,
            OutputColor::Magenta => TermColor::Magenta,
            OutputColor::Red => TermColor::Red,
            OutputColor::White => TermColor::White,
            OutputColor::Yellow => TermColor::Yellow,
        }
    }
}

/// Character ramp selection, numbered as on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterMap {
    /// Sparse ASCII ramp (66 levels)
    #[value(name = "1")]
    Sparse,
    /// Dense ASCII ramp (70 levels)
    #[value(name = "2")]
    Dense,
    /// Symbol ramp (12 levels)
    #[default]
    #[value(name = "3")]
    Symbol,
    /// Classic density ramp (10 levels)
    #[value(name = "4")]
    Classic,
}

impl From<CharacterMap> for CharSet {
    fn from(m: CharacterMap) -> Self {
        match m {
            CharacterMap::Sparse => CharSet::Sparse,
            CharacterMap::Dense => CharSet::Dense,
            CharacterMap::Symbol => CharSet::Symbol,
            CharacterMap::Classic => CharSet::Classic,
        }
    }
}
