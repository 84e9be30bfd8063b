//! Line and block comment toggling.
//!
//! Whether the selection is already commented is recomputed from the buffer
//! on every call, so toggling twice restores the original text.

use serde::{Deserialize, Serialize};

use crate::lines::{get_block_line_end, get_line_end, get_line_start};
use crate::types::{Action, InputState, PatchMode};

/// Comment tokens for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRule {
    #[serde(default)]
    pub line_comment: Option<String>,
    #[serde(default)]
    pub block_comment: Option<(String, String)>,
    /// Put a single space between the tokens and the commented text.
    #[serde(default = "default_insert_space")]
    pub insert_space: bool,
}

pub(crate) fn default_insert_space() -> bool {
    true
}

impl CommentRule {
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line_comment: Some(token.into()),
            block_comment: None,
            insert_space: true,
        }
    }

    pub fn block(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            line_comment: None,
            block_comment: Some((open.into(), close.into())),
            insert_space: true,
        }
    }

    pub fn with_block(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.block_comment = Some((open.into(), close.into()));
        self
    }

    pub fn with_insert_space(mut self, insert_space: bool) -> Self {
        self.insert_space = insert_space;
        self
    }

    /// Toggles line comments when the language has them, block comments
    /// otherwise.
    pub fn toggle(&self, state: &InputState) -> Action {
        match (&self.line_comment, &self.block_comment) {
            (Some(token), _) => toggle_line_comment(state, token, self.insert_space),
            (None, Some(_)) => self.toggle_block(state),
            (None, None) => Action::none(),
        }
    }

    /// Toggles block comments regardless of any line comment token.
    pub fn toggle_block(&self, state: &InputState) -> Action {
        match &self.block_comment {
            Some((open, close)) => toggle_block_comment(state, (open, close), self.insert_space),
            None => Action::none(),
        }
    }
}

struct CommentLine<'a> {
    /// Offset of the first non-whitespace byte.
    content_at: usize,
    content: &'a str,
}

impl CommentLine<'_> {
    fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Bytes to strip when the line is commented.
    fn commented_len(&self, token: &str, insert_space: bool) -> Option<usize> {
        let rest = self.content.strip_prefix(token)?;
        let space = usize::from(insert_space && rest.starts_with(' '));
        Some(token.len() + space)
    }
}

struct Edit {
    at: usize,
    removed: usize,
    inserted: usize,
}

/// Maps a pre-edit offset through `edits` (sorted, non-overlapping).
///
/// Offsets at or past an insertion point move with it; offsets inside a
/// removed range collapse onto its start.
fn map_offset(pos: usize, edits: &[Edit]) -> usize {
    let mut shift = 0isize;
    for edit in edits {
        if edit.removed == 0 {
            if pos < edit.at {
                break;
            }
            shift += edit.inserted as isize;
        } else if pos >= edit.at + edit.removed {
            shift -= edit.removed as isize;
        } else if pos > edit.at {
            return edit.at.saturating_add_signed(shift);
        } else {
            break;
        }
    }
    pos.saturating_add_signed(shift)
}

/// Toggles `token` at the start of every line touched by the selection.
///
/// A caret toggles its own line, blank or not. A selection ignores blank
/// lines: it uncomments when every other line is commented and comments
/// every non-blank line otherwise.
pub fn toggle_line_comment(state: &InputState, token: &str, insert_space: bool) -> Action {
    if token.is_empty() {
        return Action::none();
    }
    let value = state.value.as_str();
    let (start, end) = (state.selection_start, state.selection_end);
    let collapsed = start == end;

    let block_start = get_line_start(value, start);
    let block_end = if collapsed {
        get_line_end(value, start)
    } else {
        get_block_line_end(value, end).max(block_start)
    };
    let block = &value[block_start..block_end];

    let mut line_start = block_start;
    let mut lines = Vec::new();
    for line in block.split('\n') {
        let lead = line.len() - line.trim_start_matches([' ', '\t']).len();
        lines.push(CommentLine {
            content_at: line_start + lead,
            content: &line[lead..],
        });
        line_start += line.len() + 1;
    }
    lines.retain(|line| collapsed || !line.is_blank());
    if lines.is_empty() {
        return Action::none();
    }

    let uncomment = lines
        .iter()
        .all(|line| line.commented_len(token, insert_space).is_some());
    let prefix = if insert_space {
        format!("{token} ")
    } else {
        token.to_string()
    };
    let edits: Vec<Edit> = lines
        .iter()
        .map(|line| match line.commented_len(token, insert_space) {
            Some(removed) if uncomment => Edit {
                at: line.content_at,
                removed,
                inserted: 0,
            },
            _ => Edit {
                at: line.content_at,
                removed: 0,
                inserted: prefix.len(),
            },
        })
        .collect();

    let mut replacement = String::with_capacity(block.len() + edits.len() * prefix.len());
    let mut copied = block_start;
    for edit in &edits {
        replacement.push_str(&value[copied..edit.at]);
        if edit.inserted > 0 {
            replacement.push_str(&prefix);
        }
        copied = edit.at + edit.removed;
    }
    replacement.push_str(&value[copied..block_end]);

    Action::patch(replacement, block_start, block_end, PatchMode::End).and_select(
        map_offset(start, &edits),
        map_offset(end, &edits),
        state.selection_direction,
    )
}

/// Wraps the selection in `open`/`close`, or unwraps it when the delimiters
/// already surround it.
///
/// With `insert_space`, one space just inside each delimiter is added on wrap
/// and removed on unwrap when present, so unwrapping inverts wrapping exactly.
/// A selection that itself starts with `open` and ends with `close` is
/// unwrapped in place.
pub fn toggle_block_comment(
    state: &InputState,
    (open, close): (&str, &str),
    insert_space: bool,
) -> Action {
    if open.is_empty() || close.is_empty() {
        return Action::none();
    }
    let value = state.value.as_str();
    let (start, end) = (state.selection_start, state.selection_end);
    let direction = state.selection_direction;
    let before = &value[..start];
    let after = &value[end..];
    let selected = &value[start..end];

    let pre = if insert_space && before.strip_suffix(' ').is_some_and(|b| b.ends_with(open)) {
        open.len() + 1
    } else if before.ends_with(open) {
        open.len()
    } else {
        0
    };
    let post = if insert_space && after.strip_prefix(' ').is_some_and(|a| a.starts_with(close)) {
        close.len() + 1
    } else if after.starts_with(close) {
        close.len()
    } else {
        0
    };

    if pre > 0 && post > 0 {
        return Action::patch(selected, start - pre, end + post, PatchMode::End).and_select(
            start - pre,
            end - pre,
            direction,
        );
    }

    if selected.len() >= open.len() + close.len()
        && selected.starts_with(open)
        && selected.ends_with(close)
    {
        let mut inner = &selected[open.len()..selected.len() - close.len()];
        if insert_space {
            inner = inner.strip_prefix(' ').unwrap_or(inner);
            inner = inner.strip_suffix(' ').unwrap_or(inner);
        }
        let inner_len = inner.len();
        return Action::patch(inner, start, end, PatchMode::Select).and_select(
            start,
            start + inner_len,
            direction,
        );
    }

    let space = if insert_space { " " } else { "" };
    let text = format!("{open}{space}{selected}{space}{close}");
    let shift = open.len() + space.len();
    Action::patch(text, start, end, PatchMode::Select).and_select(
        start + shift,
        end + shift,
        direction,
    )
}
