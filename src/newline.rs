//! Enter and Backspace behaviour inside indentation.

use crate::lines::{get_line_start, is_line_start};
use crate::types::{Action, IndentOptions, InputState, PatchMode};
use crate::width::{ceil_tab, floor_tab, visible_width_leading_space};

fn matching_bracket(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

/// Handles Enter: carries the current line's indentation onto the new line.
///
/// After an opening bracket the new line is indented one level deeper, and
/// when the caret sits inside an empty bracket pair the closing bracket is
/// moved onto its own line at the original indentation.
pub fn enter(state: &InputState, options: &IndentOptions) -> Action {
    let value = state.value.as_str();
    let caret = state.selection_start;
    if !state.is_collapsed() || is_line_start(value, caret) {
        return Action::none();
    }

    let line_start = get_line_start(value, caret);
    let (width, _) = visible_width_leading_space(&value[line_start..], options.tab_size);
    let base = floor_tab(width, options.tab_size);

    let close = value[..caret].chars().next_back().and_then(matching_bracket);
    let inner = match close {
        Some(_) => base + options.tab_size.max(1),
        None => base,
    };

    let mut text = String::from("\n");
    text.push_str(&options.make_indent(inner));

    let next = value[caret..].chars().next();
    if close.is_some() && next == close {
        let new_caret = caret + text.len();
        text.push('\n');
        text.push_str(&options.make_indent(base));
        return Action::patch(text, caret, caret, PatchMode::End).and_select(
            new_caret,
            new_caret,
            state.selection_direction,
        );
    }

    Action::patch(text, caret, caret, PatchMode::End)
}

/// Handles Backspace inside indentation.
///
/// When only whitespace precedes the caret and the previous character is a
/// space, selects back to the previous tab stop so the host's native delete
/// removes a whole indentation level. Tabs are never crossed.
pub fn backspace(state: &InputState, options: &IndentOptions) -> Action {
    let value = state.value.as_str();
    let caret = state.selection_start;
    let bytes = value.as_bytes();
    if !state.is_collapsed() || caret == 0 || bytes[caret - 1] != b' ' {
        return Action::none();
    }

    let line_start = get_line_start(value, caret);
    let mut width = 0;
    for &b in &bytes[line_start..caret] {
        match b {
            b' ' => width += 1,
            b'\t' => width = ceil_tab(width + 1, options.tab_size),
            _ => return Action::none(),
        }
    }

    let target = floor_tab(width - 1, options.tab_size);
    let mut from = caret;
    while from > line_start && bytes[from - 1] == b' ' && width > target {
        from -= 1;
        width -= 1;
    }

    Action::select(from, caret, state.selection_direction)
}
