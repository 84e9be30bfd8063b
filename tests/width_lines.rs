use textarea_keys::lines::{both_ends_selected, get_block_line_end, get_line_end, get_line_start};
use textarea_keys::width::{
    ceil_tab, floor_tab, visible_width_from_left, visible_width_leading_space,
};

#[test]
fn tab_rounding_matches_general_formula() {
    for tab_size in 1..=9 {
        for width in 0..64 {
            assert_eq!(floor_tab(width, tab_size), width / tab_size * tab_size);
            assert_eq!(ceil_tab(width, tab_size), width.div_ceil(tab_size) * tab_size);
        }
    }
}

#[test]
fn tab_rounding_edges() {
    for tab_size in [2, 3, 4, 8] {
        assert_eq!(floor_tab(0, tab_size), 0);
        assert_eq!(ceil_tab(0, tab_size), 0);
    }
    assert_eq!(ceil_tab(5, 4), 8);
    assert_eq!(ceil_tab(8, 4), 8);
    assert_eq!(floor_tab(7, 4), 4);
    assert_eq!(floor_tab(7, 3), 6);
    assert_eq!(floor_tab(5, 0), 5);
    assert_eq!(ceil_tab(5, 0), 5);
}

#[test]
fn visible_width_jumps_tabs_to_next_stop() {
    // \t -> 4, a -> 5, b -> 6, \t -> 8
    assert_eq!(visible_width_from_left("\tab\tc", 4, 4, None), (8, 4));
    assert_eq!(visible_width_from_left("  \tx", 3, 4, None), (4, 3));
    // a tab starting on a stop still takes a full stop
    assert_eq!(visible_width_from_left("abcd\t", 5, 4, None), (8, 5));
    assert_eq!(visible_width_from_left("\t", 1, 3, None), (3, 1));
}

#[test]
fn visible_width_defaults_to_line_start() {
    let text = "xx\n\tfoo";
    assert_eq!(visible_width_from_left(text, 4, 4, None), (4, 1));
    assert_eq!(visible_width_from_left(text, 7, 4, None), (7, 4));
    // x, x, newline, then the tab lands on 4
    assert_eq!(visible_width_from_left(text, 4, 4, Some(0)), (4, 4));
}

#[test]
fn visible_width_counts_graphemes() {
    let text = "e\u{301}x";
    assert_eq!(visible_width_from_left(text, text.len(), 4, None), (2, 4));
}

#[test]
fn leading_space_width() {
    assert_eq!(visible_width_leading_space("  \t x", 4), (5, 4));
    assert_eq!(visible_width_leading_space("\t\t", 4), (8, 2));
    assert_eq!(visible_width_leading_space("abc", 4), (0, 0));
    assert_eq!(visible_width_leading_space("   ", 2), (3, 3));
    assert_eq!(visible_width_leading_space("", 4), (0, 0));
    assert_eq!(visible_width_leading_space(" \tfoo", 8), (8, 2));
}

#[test]
fn line_start_and_end() {
    let text = "ab\ncd";
    assert_eq!(get_line_start(text, 0), 0);
    assert_eq!(get_line_start(text, 2), 0);
    assert_eq!(get_line_start(text, 3), 3);
    assert_eq!(get_line_start(text, 5), 3);
    assert_eq!(get_line_end(text, 0), 2);
    assert_eq!(get_line_end(text, 3), 5);
    assert_eq!(get_line_end("ab\r\ncd", 1), 2);
    assert_eq!(get_line_end("ab\n", 2), 2);
    assert_eq!(get_line_end("ab\n", 3), 3);
}

#[test]
fn block_end_excludes_line_after_boundary() {
    let text = "foo\nbar";
    assert_eq!(get_block_line_end(text, 4), 3);
    assert_eq!(get_block_line_end(text, 5), 7);
    assert_eq!(get_block_line_end(text, 7), 7);
    assert_eq!(get_block_line_end(text, 1), 3);
    assert_eq!(get_block_line_end("foo\r\nbar", 5), 3);
    assert_eq!(get_block_line_end("a\n\nb", 3), 2);
    assert_eq!(get_block_line_end("", 0), 0);
}

#[test]
fn both_ends_selected_needs_full_lines() {
    let text = "foo\nbar";
    assert!(both_ends_selected(text, 0, 3));
    assert!(both_ends_selected(text, 0, 7));
    assert!(both_ends_selected(text, 4, 7));
    assert!(!both_ends_selected(text, 1, 3));
    assert!(!both_ends_selected(text, 0, 2));
    assert!(!both_ends_selected(text, 4, 4));
    assert!(both_ends_selected("a\r\nb", 0, 1));
}
