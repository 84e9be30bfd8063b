use textarea_keys::{Action, IndentOptions, InputState, backspace, enter};

fn spaces() -> IndentOptions {
    IndentOptions::new(4, true)
}

#[test]
fn enter_after_open_brace_indents_one_level() {
    let state = InputState::caret("if (x) {\n}", 8);
    let action = enter(&state, &spaces());
    let patch = action.patch.as_ref().unwrap();
    assert_eq!(patch.value, "\n    ");
    assert_eq!((patch.start, patch.end), (8, 8));
    assert!(action.select.is_none());
    assert_eq!(state.apply(&action).value, "if (x) {\n    \n}");
}

#[test]
fn enter_inside_empty_pair_drops_closer_to_its_own_line() {
    let state = InputState::caret("foo()", 4);
    let action = enter(&state, &spaces());
    let next = state.apply(&action);
    assert_eq!(next.value, "foo(\n    \n)");
    assert_eq!((next.selection_start, next.selection_end), (9, 9));
    assert!(action.select.is_some());

    let state = InputState::caret("    x = {}", 9);
    let next = state.apply(&enter(&state, &spaces()));
    assert_eq!(next.value, "    x = {\n        \n    }");
    assert_eq!((next.selection_start, next.selection_end), (18, 18));
}

#[test]
fn enter_with_tabs_keeps_indentation() {
    let options = IndentOptions::new(4, false);
    let state = InputState::caret("\tfoo", 4);
    let next = state.apply(&enter(&state, &options));
    assert_eq!(next.value, "\tfoo\n\t");
    assert_eq!(next.selection_start, 6);

    let state = InputState::caret("\tfoo[]", 5);
    let next = state.apply(&enter(&state, &options));
    assert_eq!(next.value, "\tfoo[\n\t\t\n\t]");
    assert_eq!(next.selection_start, 8);
}

#[test]
fn enter_floors_indentation_to_a_stop() {
    let state = InputState::caret("      foo", 9);
    let next = state.apply(&enter(&state, &spaces()));
    assert_eq!(next.value, "      foo\n    ");
}

#[test]
fn enter_defers_to_host() {
    assert_eq!(enter(&InputState::caret("foo\nbar", 4), &spaces()), Action::none());
    assert!(enter(&InputState::caret("foo", 0), &spaces()).is_noop());
    assert!(enter(&InputState::new("foo", 0, 2), &spaces()).is_noop());
}

#[test]
fn backspace_selects_back_to_previous_stop() {
    let action = backspace(&InputState::caret("        ", 8), &spaces());
    let select = action.select.unwrap();
    assert_eq!((select.start, select.end), (4, 8));
    assert!(action.patch.is_none());

    let select = backspace(&InputState::caret("   ", 3), &spaces()).select.unwrap();
    assert_eq!((select.start, select.end), (0, 3));

    let select = backspace(&InputState::caret("foo\n     ", 9), &spaces()).select.unwrap();
    assert_eq!((select.start, select.end), (8, 9));
}

#[test]
fn backspace_does_not_cross_tabs() {
    // the tab ends at column 4, the two spaces reach column 6
    let select = backspace(&InputState::caret("\t  ", 3), &spaces()).select.unwrap();
    assert_eq!((select.start, select.end), (1, 3));
}

#[test]
fn backspace_defers_to_host() {
    assert!(backspace(&InputState::caret("    x  ", 7), &spaces()).is_noop());
    assert!(backspace(&InputState::caret("\t", 1), &spaces()).is_noop());
    assert!(backspace(&InputState::caret("", 0), &spaces()).is_noop());
    assert!(backspace(&InputState::new("        ", 2, 6), &spaces()).is_noop());
}
