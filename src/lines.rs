//! Line and block boundaries within a buffer.
//!
//! All offsets are byte offsets; the only bytes inspected are ASCII line
//! terminators, so callers may pass any `char` boundary.

/// Offset of the first byte of the line containing `index`.
pub fn get_line_start(text: &str, index: usize) -> usize {
    text[..index].rfind('\n').map_or(0, |i| i + 1)
}

/// Offset of the terminator (`\n` or `\r`) ending the line at `index`, or
/// the end of the text.
pub fn get_line_end(text: &str, index: usize) -> usize {
    text[index..]
        .find(['\n', '\r'])
        .map_or(text.len(), |i| index + i)
}

/// End of the last line touched by a selection ending at `index`.
///
/// A selection ending exactly at the start of a line does not pull that line
/// into the block.
pub fn get_block_line_end(text: &str, index: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = index;
    if i > 0 && bytes[i - 1] == b'\n' {
        i -= 1;
        if i > 0 && bytes[i - 1] == b'\r' {
            i -= 1;
        }
    }
    get_line_end(text, i)
}

/// True when a non-empty selection runs from a line start to a line end.
pub fn both_ends_selected(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    start != end
        && (start == 0 || bytes[start - 1] == b'\n')
        && (end == bytes.len() || matches!(bytes[end], b'\n' | b'\r'))
}

pub(crate) fn is_line_start(text: &str, index: usize) -> bool {
    index == 0 || text.as_bytes()[index - 1] == b'\n'
}
