//! ASCII conversion pipeline: brightness estimation, character mapping,
//! and row-major rendering.

pub mod brightness;
pub mod charset;
pub mod mapping;
pub mod renderer;

pub use brightness::BrightnessMode;
pub use charset::{
    CharSet, CLASSIC_CHARSET, DENSE_CHARSET, SPARSE_CHARSET, SYMBOL_CHARSET,
};
pub use mapping::{brightness_to_chars, invert, ramp_index};
pub use renderer::Renderer;
