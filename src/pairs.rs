//! Auto-closing brackets and quotes.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::key::KeyCode;
use crate::types::{Action, InputState, PatchMode};

/// Characters after the caret that still allow an opening token to be
/// auto-closed, in addition to whitespace and the end of the buffer.
pub const AUTO_CLOSE_BEFORE: &str = ".,;)]}>=";

/// The `(open, close)` pairs configured for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClosingPairsRules {
    pub pairs: Vec<(char, char)>,
}

impl ClosingPairsRules {
    pub fn new(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// Builds the lookup tables used on every keystroke.
    pub fn resolve(&self) -> ResolvedClosingPairs {
        let mut resolved = ResolvedClosingPairs::default();
        for &(open, close) in &self.pairs {
            resolved.open_to_close.insert(open, close);
            resolved.close_to_open.insert(close, open);
            resolved.empty_pairs.insert((open, close));
        }
        resolved
    }
}

/// Lookup tables derived from [`ClosingPairsRules`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedClosingPairs {
    open_to_close: HashMap<char, char>,
    close_to_open: HashMap<char, char>,
    empty_pairs: HashSet<(char, char)>,
}

impl ResolvedClosingPairs {
    pub fn close_for(&self, open: char) -> Option<char> {
        self.open_to_close.get(&open).copied()
    }

    pub fn open_for(&self, close: char) -> Option<char> {
        self.close_to_open.get(&close).copied()
    }

    /// True when `open` immediately followed by `close` is a known pair.
    pub fn is_empty_pair(&self, open: char, close: char) -> bool {
        self.empty_pairs.contains(&(open, close))
    }

    pub fn is_empty(&self) -> bool {
        self.empty_pairs.is_empty()
    }
}

impl From<&ClosingPairsRules> for ResolvedClosingPairs {
    fn from(rules: &ClosingPairsRules) -> Self {
        rules.resolve()
    }
}

fn allows_auto_close(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => c.is_whitespace() || AUTO_CLOSE_BEFORE.contains(c),
    }
}

/// Decides what a key press does with respect to bracket and quote pairs.
///
/// Returns the no-op action when the host should insert the character (or
/// delete backwards) natively.
pub fn closing_pair_on_key(
    state: &InputState,
    key: KeyCode,
    rules: &ResolvedClosingPairs,
) -> Action {
    let value = state.value.as_str();
    let (start, end) = (state.selection_start, state.selection_end);
    let prev = value[..start].chars().next_back();
    let next = value[end..].chars().next();
    let direction = state.selection_direction;

    match key {
        KeyCode::Backspace => match (prev, next) {
            (Some(open), Some(close)) if start == end && rules.is_empty_pair(open, close) => {
                Action::select(start - open.len_utf8(), end + close.len_utf8(), direction)
            }
            _ => Action::none(),
        },
        KeyCode::Char(c) => {
            if let Some(close) = rules.close_for(c) {
                if start != end {
                    let mut text = String::with_capacity(end - start + 2 * c.len_utf8());
                    text.push(c);
                    text.push_str(&value[start..end]);
                    text.push(close);
                    let shift = c.len_utf8();
                    return Action::patch(text, start, end, PatchMode::Select).and_select(
                        start + shift,
                        end + shift,
                        direction,
                    );
                }
                if allows_auto_close(next) {
                    let caret = start + c.len_utf8();
                    return Action::patch(format!("{c}{close}"), start, end, PatchMode::End)
                        .and_select(caret, caret, direction);
                }
            }
            match (prev, next) {
                (Some(open), Some(close))
                    if start == end
                        && close == c
                        && rules.open_for(c).is_some()
                        && rules.is_empty_pair(open, close) =>
                {
                    let caret = end + close.len_utf8();
                    Action::select(caret, caret, direction)
                }
                _ => Action::none(),
            }
        }
        _ => Action::none(),
    }
}
