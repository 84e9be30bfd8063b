use textarea_keys::{
    ClosingPairsRules, InputState, KeyCode, LanguageRegistry, PatchMode, ResolvedClosingPairs,
    closing_pair_on_key,
};

fn rules(language: &str) -> ResolvedClosingPairs {
    LanguageRegistry::with_defaults()
        .get(language)
        .map(|rules| rules.closing_pairs.clone())
        .unwrap()
}

fn type_char(state: &InputState, c: char, rules: &ResolvedClosingPairs) -> InputState {
    state.apply(&closing_pair_on_key(state, KeyCode::Char(c), rules))
}

#[test]
fn open_token_at_end_inserts_pair() {
    let js = rules("javascript");
    let state = InputState::caret("", 0);
    let action = closing_pair_on_key(&state, KeyCode::Char('('), &js);
    let patch = action.patch.as_ref().unwrap();
    assert_eq!(patch.value, "()");
    assert_eq!(patch.mode, PatchMode::End);

    let next = state.apply(&action);
    assert_eq!(next.value, "()");
    assert_eq!((next.selection_start, next.selection_end), (1, 1));
}

#[test]
fn open_token_before_boundary_characters_auto_closes() {
    let js = rules("js");
    let next = type_char(&InputState::caret("a)", 1), '(', &js);
    assert_eq!(next.value, "a())");
    assert_eq!(next.selection_start, 2);

    let next = type_char(&InputState::caret("x ;", 1), '[', &js);
    assert_eq!(next.value, "x[] ;");

    let next = type_char(&InputState::caret("x", 1), '"', &js);
    assert_eq!(next.value, "x\"\"");
    assert_eq!(next.selection_start, 2);
}

#[test]
fn open_token_before_a_word_is_left_to_host() {
    let js = rules("javascript");
    let state = InputState::caret("foo", 0);
    assert!(closing_pair_on_key(&state, KeyCode::Char('('), &js).is_noop());
}

#[test]
fn close_token_skips_existing_closer() {
    let js = rules("javascript");
    let state = InputState::caret("()", 1);
    let action = closing_pair_on_key(&state, KeyCode::Char(')'), &js);
    assert!(action.patch.is_none());
    let next = state.apply(&action);
    assert_eq!(next.value, "()");
    assert_eq!(next.selection_start, 2);

    let next = type_char(&InputState::caret("\"\"", 1), '"', &js);
    assert_eq!(next.value, "\"\"");
    assert_eq!(next.selection_start, 2);
}

#[test]
fn mismatched_close_token_is_left_to_host() {
    let js = rules("javascript");
    assert!(closing_pair_on_key(&InputState::caret("(]", 1), KeyCode::Char(']'), &js).is_noop());
    assert!(closing_pair_on_key(&InputState::caret("(x)", 2), KeyCode::Char(')'), &js).is_noop());
}

#[test]
fn open_token_wraps_selection() {
    let js = rules("javascript");
    let state = InputState::new("foo", 0, 3);
    let action = closing_pair_on_key(&state, KeyCode::Char('('), &js);
    assert_eq!(action.patch.as_ref().map(|p| p.mode), Some(PatchMode::Select));
    let next = state.apply(&action);
    assert_eq!(next.value, "(foo)");
    assert_eq!(next.selected_text(), "foo");

    let next = type_char(&InputState::new("say hi now", 4, 6), '`', &js);
    assert_eq!(next.value, "say `hi` now");
    assert_eq!(next.selected_text(), "hi");
}

#[test]
fn backspace_between_empty_pair_selects_both() {
    let js = rules("javascript");
    let action = closing_pair_on_key(&InputState::caret("x()", 2), KeyCode::Backspace, &js);
    let select = action.select.unwrap();
    assert_eq!((select.start, select.end), (1, 3));
    assert!(action.patch.is_none());

    assert!(closing_pair_on_key(&InputState::caret("(x)", 1), KeyCode::Backspace, &js).is_noop());
    assert!(closing_pair_on_key(&InputState::caret("()", 0), KeyCode::Backspace, &js).is_noop());
    assert!(closing_pair_on_key(&InputState::new("()", 0, 2), KeyCode::Backspace, &js).is_noop());
}

#[test]
fn language_pair_subsets() {
    let rust = rules("rust");
    assert!(closing_pair_on_key(&InputState::caret("", 0), KeyCode::Char('`'), &rust).is_noop());
    assert!(closing_pair_on_key(&InputState::caret("", 0), KeyCode::Char('\''), &rust).is_noop());

    let json = rules("json");
    assert!(closing_pair_on_key(&InputState::caret("", 0), KeyCode::Char('\''), &json).is_noop());
    assert!(!closing_pair_on_key(&InputState::caret("", 0), KeyCode::Char('{'), &json).is_noop());

    let ts = rules("tsx");
    assert!(!closing_pair_on_key(&InputState::caret("", 0), KeyCode::Char('`'), &ts).is_noop());
}

#[test]
fn multibyte_text_around_caret() {
    let js = rules("javascript");
    let next = type_char(&InputState::caret("é", 2), '(', &js);
    assert_eq!(next.value, "é()");
    assert_eq!(next.selection_start, 3);

    let custom = ClosingPairsRules::new([('«', '»')]).resolve();
    let next = type_char(&InputState::caret("", 0), '«', &custom);
    assert_eq!(next.value, "«»");
    assert_eq!(next.selection_start, 2);
    let next = type_char(&next, '»', &custom);
    assert_eq!(next.value, "«»");
    assert_eq!(next.selection_start, 4);
}

#[test]
fn other_keys_are_ignored() {
    let js = rules("javascript");
    let state = InputState::caret("()", 1);
    assert!(closing_pair_on_key(&state, KeyCode::Char('x'), &js).is_noop());
    assert!(closing_pair_on_key(&state, KeyCode::Enter, &js).is_noop());
    let none = ResolvedClosingPairs::default();
    assert!(closing_pair_on_key(&state, KeyCode::Char('('), &none).is_noop());
}
