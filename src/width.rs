//! Visual column arithmetic under a configurable tab size.
//!
//! Columns are counted in grapheme clusters; a tab advances to the next tab
//! stop and always occupies at least one column.

use unicode_segmentation::UnicodeSegmentation;

use crate::lines::get_line_start;

/// Rounds `width` down to a multiple of `tab_size`. A zero tab size counts
/// as 1.
pub fn floor_tab(width: usize, tab_size: usize) -> usize {
    match tab_size {
        0 | 1 => width,
        2 => width & !1,
        4 => width & !3,
        8 => width & !7,
        _ => width / tab_size * tab_size,
    }
}

/// Rounds `width` up to a multiple of `tab_size`. A zero tab size counts
/// as 1.
pub fn ceil_tab(width: usize, tab_size: usize) -> usize {
    match tab_size {
        0 | 1 => width,
        2 => (width + 1) & !1,
        4 => (width + 3) & !3,
        8 => (width + 7) & !7,
        _ => width.div_ceil(tab_size) * tab_size,
    }
}

/// Visual column of byte `offset`, measured from `left`.
///
/// `left` defaults to the start of the line containing `offset`. Returns the
/// visual width and the number of bytes between `left` and `offset`.
pub fn visible_width_from_left(
    content: &str,
    offset: usize,
    tab_size: usize,
    left: Option<usize>,
) -> (usize, usize) {
    let left = left.unwrap_or_else(|| get_line_start(content, offset));
    let width = content[left..offset]
        .graphemes(true)
        .fold(0, |width, g| match g {
            "\t" => ceil_tab(width + 1, tab_size),
            _ => width + 1,
        });
    (width, offset - left)
}

/// Visual width of the run of spaces and tabs at the start of `line`.
///
/// Returns the width and the byte length of the run.
pub fn visible_width_leading_space(line: &str, tab_size: usize) -> (usize, usize) {
    let mut width = 0;
    for (i, b) in line.bytes().enumerate() {
        match b {
            b' ' => width += 1,
            b'\t' => width = ceil_tab(width + 1, tab_size),
            _ => return (width, i),
        }
    }
    (width, line.len())
}
