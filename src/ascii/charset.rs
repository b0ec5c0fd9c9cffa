//! Character ramp definitions for ASCII rendering.

/// Sparse ASCII ramp (66 levels).
/// Characters ordered from darkest (space) to brightest ($).
#[rustfmt::skip]
pub const SPARSE_CHARSET: &[char] = &[
    ' ', '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '~', '+', '_',
    '-', '?', ']', '[', '}', '{', '1', ')', '(', '|', '\\', '/', 't', 'f',
    'j', 'r', 'x', 'n', 'u', 'v', 'c', 'z', 'X', 'Y', 'U', 'J', 'C', 'L',
    'Q', '0', 'O', 'Z', 'm', 'w', 'q', 'p', 'd', 'b', 'k', 'h', 'a', 'o',
    '*', '#', 'M', 'W', '&', '8', '%', 'B', '@', '$',
];

/// Dense ASCII ramp (70 levels).
/// The sparse ramp plus a few extra low-density glyphs for smoother
/// gradients in photographic input.
#[rustfmt::skip]
pub const DENSE_CHARSET: &[char] = &[
    ' ', '.', '\'', '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '>',
    '<', '~', '+', '_', '-', '?', ']', '[', '}', '{', '1', ')', '(', '|',
    '\\', '/', 't', 'f', 'j', 'r', 'x', 'n', 'u', 'v', 'c', 'z', 'X', 'Y',
    'U', 'J', 'C', 'L', 'Q', '0', 'O', 'Z', 'm', 'w', 'q', 'p', 'd', 'b',
    'k', 'h', 'a', 'o', '*', '#', 'M', 'W', '&', '8', '%', 'B', '@', '$',
];

/// Symbol ramp (12 levels). The default.
pub const SYMBOL_CHARSET: &[char] =
    &[' ', '.', ':', '¬', '=', '+', '*', 'x', '#', '%', '@', '$'];

/// Classic 10-level density ramp.
pub const CLASSIC_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Character ramp used to approximate brightness levels in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Sparse ASCII ramp (66 levels)
    Sparse,
    /// Dense ASCII ramp (70 levels)
    Dense,
    /// Symbol ramp (12 levels)
    #[default]
    Symbol,
    /// Classic density ramp (10 levels)
    Classic,
}

impl CharSet {
    /// Get the character slice for this ramp, ordered darkest to brightest.
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Sparse => SPARSE_CHARSET,
            CharSet::Dense => DENSE_CHARSET,
            CharSet::Symbol => SYMBOL_CHARSET,
            CharSet::Classic => CLASSIC_CHARSET,
        }
    }

    /// Get a human-readable name for the ramp.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Sparse => "sparse",
            CharSet::Dense => "dense",
            CharSet::Symbol => "symbol",
            CharSet::Classic => "classic",
        }
    }
}
