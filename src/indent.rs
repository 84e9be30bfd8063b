//! Tab / Shift+Tab handling.
//!
//! A caret (or a selection inside one line) gets a single indentation unit.
//! Anything spanning lines is treated as a block: every line's leading
//! whitespace is re-materialized at the next (or previous) tab stop, and the
//! selection is carried along with the text it was attached to.

use crate::lines::{both_ends_selected, get_block_line_end, get_line_start};
use crate::types::{Action, IndentOptions, InputState, PatchMode};
use crate::width::{ceil_tab, floor_tab, visible_width_from_left, visible_width_leading_space};

/// Leading-whitespace bookkeeping for one line of a rewritten block.
#[derive(Debug, Clone, Copy)]
struct LineEdit {
    /// Offset of the line in the original buffer.
    start: usize,
    old_lead: usize,
    new_lead: usize,
}

impl LineEdit {
    fn shift(&self) -> isize {
        self.new_lead as isize - self.old_lead as isize
    }

    /// Maps a caret on this line into the rewritten line starting at
    /// `new_start`.
    ///
    /// A caret touching content keeps its distance from that content. A caret
    /// inside the old indentation (or at the start of an unindented line)
    /// keeps its column, clamped to the end of the new indentation.
    fn remap(&self, caret: usize, new_start: usize) -> usize {
        let old_ws_end = self.start + self.old_lead;
        if caret > old_ws_end || (caret == old_ws_end && caret > self.start) {
            new_start + self.new_lead + (caret - old_ws_end)
        } else {
            new_start + (caret - self.start).min(self.new_lead)
        }
    }
}

/// Handles Tab.
pub fn indent_text(state: &InputState, options: &IndentOptions) -> Action {
    let value = state.value.as_str();
    let (start, end) = (state.selection_start, state.selection_end);

    if start != end && (both_ends_selected(value, start, end) || value[start..end].contains('\n'))
    {
        let block_start = get_line_start(value, start);
        let block_end = get_block_line_end(value, end).max(block_start);
        let tab_size = options.tab_size;
        return reindent_block(state, options, block_start, block_end, true, |width| {
            ceil_tab(width + 1, tab_size)
        });
    }

    let indent = if options.insert_spaces {
        let (width, _) = visible_width_from_left(value, start, options.tab_size, None);
        " ".repeat(ceil_tab(width + 1, options.tab_size) - width)
    } else {
        "\t".to_string()
    };
    Action::patch(indent, start, end, PatchMode::End)
}

/// Handles Shift+Tab. Always operates on whole lines, including the caret's
/// own line when nothing is selected.
pub fn outdent_text(state: &InputState, options: &IndentOptions) -> Action {
    let value = state.value.as_str();
    let (start, end) = (state.selection_start, state.selection_end);

    let block_start = get_line_start(value, start);
    // step past the caret's own character so a caret at a line start keeps
    // its line
    let after_caret = value[start..]
        .chars()
        .next()
        .map_or(start, |c| start + c.len_utf8());
    let probe = end.max(after_caret);
    let block_end = get_block_line_end(value, probe).max(block_start);
    let tab_size = options.tab_size;
    reindent_block(state, options, block_start, block_end, false, |width| {
        if width == 0 {
            0
        } else {
            floor_tab(width - 1, tab_size)
        }
    })
}

fn reindent_block(
    state: &InputState,
    options: &IndentOptions,
    block_start: usize,
    block_end: usize,
    skip_blank: bool,
    new_width: impl Fn(usize) -> usize,
) -> Action {
    let block = &state.value[block_start..block_end];
    let mut replacement = String::with_capacity(block.len() + options.tab_size * 4);
    let mut edits = Vec::new();
    let mut line_start = block_start;

    for (i, line) in block.split('\n').enumerate() {
        if i > 0 {
            replacement.push('\n');
        }
        let (width, lead) = visible_width_leading_space(line, options.tab_size);
        let untouched =
            skip_blank && (line.is_empty() || line == "\r" || line_start + lead == block_end);
        let indent = if untouched {
            line[..lead].to_string()
        } else {
            options.make_indent(new_width(width))
        };
        replacement.push_str(&indent);
        replacement.push_str(&line[lead..]);
        edits.push(LineEdit {
            start: line_start,
            old_lead: lead,
            new_lead: indent.len(),
        });
        line_start += line.len() + 1;
    }

    if replacement == block {
        return Action::none();
    }

    let delta = replacement.len() as isize - block.len() as isize;
    let (first, last) = match (edits.first(), edits.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Action::none(),
    };

    let start = first.remap(state.selection_start, block_start);
    let mut end = state.selection_end.saturating_add_signed(delta);
    if state.selection_end <= block_end {
        let shift_before: isize = edits[..edits.len() - 1].iter().map(LineEdit::shift).sum();
        end = last.remap(state.selection_end, last.start.saturating_add_signed(shift_before));
    }

    Action::patch(replacement, block_start, block_end, PatchMode::End).and_select(
        start,
        end,
        state.selection_direction,
    )
}
