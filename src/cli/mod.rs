//! Command-line interface: argument struct and option enums.

pub mod args;
pub mod enums;

pub use args::Args;
pub use enums::{BrightnessArg, CharacterMap, OutputColor};
