use serde::{Deserialize, Deserializer, Serialize};

/// Which end of a selection is the anchor.
///
/// Mirrors the direction a host text area reports for its live selection.
/// Engine operations carry it through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionDirection {
    /// The caret is at the end of the selection.
    Forward,
    /// The caret is at the start of the selection.
    Backward,
    /// The host does not track a direction.
    #[default]
    None,
}

/// A snapshot of a text surface taken right before a key is handled.
///
/// Offsets are byte offsets into `value` and must sit on `char` boundaries,
/// with `selection_start <= selection_end <= value.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    /// Full buffer text.
    pub value: String,
    /// Start of the selection (inclusive).
    pub selection_start: usize,
    /// End of the selection (exclusive).
    pub selection_end: usize,
    /// Anchor side of the selection.
    pub selection_direction: SelectionDirection,
}

impl InputState {
    /// Creates a snapshot with a forward selection.
    pub fn new(value: impl Into<String>, selection_start: usize, selection_end: usize) -> Self {
        Self {
            value: value.into(),
            selection_start,
            selection_end,
            selection_direction: SelectionDirection::Forward,
        }
    }

    /// Creates a snapshot with a collapsed caret at `caret`.
    pub fn caret(value: impl Into<String>, caret: usize) -> Self {
        Self::new(value, caret, caret)
    }

    /// Sets the selection direction.
    pub fn with_direction(mut self, direction: SelectionDirection) -> Self {
        self.selection_direction = direction;
        self
    }

    /// True when the selection is a bare caret.
    pub fn is_collapsed(&self) -> bool {
        self.selection_start == self.selection_end
    }

    /// The currently selected text.
    pub fn selected_text(&self) -> &str {
        &self.value[self.selection_start..self.selection_end]
    }

    /// Returns the state a host would be in after applying `action`.
    ///
    /// The patch is applied first and positions the selection according to
    /// its [`PatchMode`]; a `select` then overrides the selection. This is the
    /// behaviour every adapter has to reproduce.
    pub fn apply(&self, action: &Action) -> InputState {
        let mut next = self.clone();
        if let Some(patch) = &action.patch {
            next.value.replace_range(patch.start..patch.end, &patch.value);
            let inserted_end = patch.start + patch.value.len();
            let (start, end) = match patch.mode {
                PatchMode::Start => (patch.start, patch.start),
                PatchMode::End => (inserted_end, inserted_end),
                PatchMode::Select => (patch.start, inserted_end),
            };
            next.selection_start = start;
            next.selection_end = end;
        }
        if let Some(select) = &action.select {
            next.selection_start = select.start;
            next.selection_end = select.end;
            next.selection_direction = select.direction;
        }
        next
    }
}

/// Where the selection goes after a patch has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchMode {
    /// Collapsed at the start of the replaced range.
    Start,
    /// Collapsed right after the inserted text.
    End,
    /// Spanning the inserted text.
    Select,
}

/// Replace `[start, end)` of the pre-patch buffer with `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchAction {
    /// Replacement text.
    pub value: String,
    /// Start of the replaced range (inclusive).
    pub start: usize,
    /// End of the replaced range (exclusive).
    pub end: usize,
    /// Where the selection lands afterwards.
    pub mode: PatchMode,
}

/// A new selection, expressed in post-patch offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectAction {
    /// Start of the new selection.
    pub start: usize,
    /// End of the new selection.
    pub end: usize,
    /// Anchor side of the new selection.
    pub direction: SelectionDirection,
}

/// The result of every engine operation.
///
/// Both halves are optional; an action with neither means the host should
/// handle the key natively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Action {
    /// Text edit to apply first.
    pub patch: Option<PatchAction>,
    /// Selection to set after the patch.
    pub select: Option<SelectAction>,
}

impl Action {
    /// The no-op action.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_noop(&self) -> bool {
        self.patch.is_none() && self.select.is_none()
    }

    pub(crate) fn patch(
        value: impl Into<String>,
        start: usize,
        end: usize,
        mode: PatchMode,
    ) -> Self {
        Self {
            patch: Some(PatchAction {
                value: value.into(),
                start,
                end,
                mode,
            }),
            select: None,
        }
    }

    pub(crate) fn select(start: usize, end: usize, direction: SelectionDirection) -> Self {
        Self {
            patch: None,
            select: Some(SelectAction {
                start,
                end,
                direction,
            }),
        }
    }

    pub(crate) fn and_select(
        mut self,
        start: usize,
        end: usize,
        direction: SelectionDirection,
    ) -> Self {
        self.select = Some(SelectAction {
            start,
            end,
            direction,
        });
        self
    }
}

/// Indentation settings for a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndentOptions {
    /// Columns per tab stop. Zero is treated as 1.
    #[serde(deserialize_with = "deserialize_tab_size")]
    pub tab_size: usize,
    /// Indent with spaces instead of tab characters.
    pub insert_spaces: bool,
}

fn deserialize_tab_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    Ok(usize::deserialize(deserializer)?.max(1))
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
        }
    }
}

impl IndentOptions {
    /// Creates options, clamping `tab_size` to at least 1.
    pub fn new(tab_size: usize, insert_spaces: bool) -> Self {
        Self {
            tab_size: tab_size.max(1),
            insert_spaces,
        }
    }

    /// One level of indentation.
    pub fn indent_unit(&self) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size.max(1))
        } else {
            "\t".to_string()
        }
    }

    /// Materializes a visual width as indentation text.
    ///
    /// With tabs, whole tab stops become `\t` and any remainder is padded
    /// with spaces so the visual width is exact.
    pub fn make_indent(&self, width: usize) -> String {
        if self.insert_spaces {
            return " ".repeat(width);
        }
        let tab_size = self.tab_size.max(1);
        let mut out = "\t".repeat(width / tab_size);
        out.push_str(&" ".repeat(width % tab_size));
        out
    }
}
