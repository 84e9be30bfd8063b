//! Conversions between UTF-16 code-unit offsets (what browser text areas
//! report) and the byte offsets the engine works with.

/// Byte offset of UTF-16 offset `units` in `text`.
///
/// Offsets past the end clamp to `text.len()`. An offset that splits a
/// surrogate pair rounds up to the end of that character.
pub fn utf16_to_byte(text: &str, units: usize) -> usize {
    let mut seen = 0;
    for (byte, ch) in text.char_indices() {
        if seen >= units {
            return byte;
        }
        seen += ch.len_utf16();
    }
    text.len()
}

/// UTF-16 offset of byte offset `byte` in `text`.
///
/// `byte` is clamped to the text and rounded down to a `char` boundary.
pub fn byte_to_utf16(text: &str, byte: usize) -> usize {
    let mut byte = byte.min(text.len());
    while !text.is_char_boundary(byte) {
        byte -= 1;
    }
    text[..byte].encode_utf16().count()
}
