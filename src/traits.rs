use crate::types::{Action, InputState, PatchMode, SelectionDirection};

/// A live text input owned by the host (a text area, a TUI buffer, ...).
///
/// Offsets are byte offsets into [`TextSurface::value`].
pub trait TextSurface {
    fn value(&self) -> &str;
    // (start, end, direction) with start <= end
    fn selection(&self) -> (usize, usize, SelectionDirection);

    fn replace_range(&mut self, start: usize, end: usize, text: &str);
    fn set_selection(&mut self, start: usize, end: usize, direction: SelectionDirection);

    // Hosts that fan out change events hook these
    fn notify_input(&mut self) {}
    fn notify_selection_change(&mut self) {}
}

impl InputState {
    /// Snapshots the surface's text and selection.
    pub fn capture<S: TextSurface + ?Sized>(surface: &S) -> Self {
        let (selection_start, selection_end, selection_direction) = surface.selection();
        Self {
            value: surface.value().to_string(),
            selection_start,
            selection_end,
            selection_direction,
        }
    }
}

/// Applies `action` to a live surface.
///
/// Returns true when the host must suppress its default handling of the key.
pub fn apply_action<S: TextSurface + ?Sized>(surface: &mut S, action: &Action) -> bool {
    if let Some(patch) = &action.patch {
        let (_, _, direction) = surface.selection();
        surface.replace_range(patch.start, patch.end, &patch.value);
        let inserted_end = patch.start + patch.value.len();
        let (start, end) = match patch.mode {
            PatchMode::Start => (patch.start, patch.start),
            PatchMode::End => (inserted_end, inserted_end),
            PatchMode::Select => (patch.start, inserted_end),
        };
        surface.set_selection(start, end, direction);
        surface.notify_input();
    }
    if let Some(select) = &action.select {
        surface.set_selection(select.start, select.end, select.direction);
        surface.notify_selection_change();
    }
    !action.is_noop()
}
