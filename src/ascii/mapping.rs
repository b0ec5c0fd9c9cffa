//! Brightness to character mapping.

/// Invert a brightness value (dark terminals vs. printed output).
#[inline]
pub fn invert(b: u8) -> u8 {
    255 - b
}

/// Map a brightness value to an index into a ramp of `levels` characters.
///
/// Uses nearest rounding: `round((levels - 1) * b / 255)`. For any `b` in
/// [0, 255] the result stays within `[0, levels - 1]`.
#[inline]
pub fn ramp_index(b: u8, levels: usize) -> usize {
    if b == 0 || levels <= 1 {
        return 0;
    }
    ((levels - 1) as f32 * b as f32 / 255.0).round() as usize
}

/// Map a brightness value to its ramp character, repeated `repeat` times.
///
/// `repeat` compensates for the ~2:1 height/width aspect of terminal cells;
/// two copies of each character roughly squares the output.
pub fn brightness_to_chars(b: u8, charset: &[char], invert_brightness: bool, repeat: u8) -> String {
    let b = if invert_brightness { invert(b) } else { b };
    let ch = charset[ramp_index(b, charset.len())];
    let mut s = String::with_capacity(repeat as usize * ch.len_utf8());
    for _ in 0..repeat {
        s.push(ch);
    }
    s
}
