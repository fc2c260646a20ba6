mod common;

use common::{grid_layout, store_with};
use keymapcraft::selection::Selection;
use rstest::rstest;

fn ids(sel: &Selection) -> Vec<&str> {
    sel.ids().collect()
}

#[test]
fn test_primary_only_for_single_selection() {
    let mut sel = Selection::new();
    assert_eq!(sel.primary(), None);

    sel.select_key(Some("a"));
    assert_eq!(sel.primary(), Some("a"));

    sel.add("b");
    assert_eq!(sel.primary(), None);
    assert_eq!(sel.len(), 2);

    sel.remove("a");
    assert_eq!(sel.primary(), Some("b"));

    sel.select_key(None);
    assert!(sel.is_empty());
}

#[test]
fn test_add_is_idempotent() {
    let mut sel = Selection::new();
    assert!(sel.add("a"));
    assert!(!sel.add("a"));
    assert_eq!(sel.len(), 1);
}

#[test]
fn test_select_multiple_replaces() {
    let mut sel = Selection::new();
    sel.select_key(Some("z"));
    sel.select_multiple(["a", "b"]);
    assert_eq!(ids(&sel), vec!["a", "b"]);

    sel.select_multiple(Vec::<String>::new());
    assert!(sel.is_empty());
}

// Keys A at (0,0) and B at (2,0), both 1x1 at 50px/unit.
#[rstest]
#[case::covers_a((0.0, 0.0), (60.0, 60.0), vec!["a"])]
#[case::covers_both((0.0, 0.0), (160.0, 60.0), vec!["a", "b"])]
#[case::dragged_backwards((160.0, 60.0), (0.0, 0.0), vec!["a", "b"])]
#[case::gap_between((55.0, 0.0), (95.0, 40.0), vec![])]
#[case::touches_b_edge((50.0, 10.0), (100.0, 20.0), vec![])]
#[case::point_inside_a((20.0, 20.0), (20.0, 20.0), vec!["a"])]
#[case::point_on_a_edge((50.0, 20.0), (50.0, 20.0), vec![])]
#[case::line_on_a_edge((50.0, 0.0), (50.0, 50.0), vec![])]
fn test_marquee_hit_test(
    #[case] start: (f32, f32),
    #[case] end: (f32, f32),
    #[case] expected: Vec<&str>,
) {
    let layout = grid_layout(&[(0.0, 0.0), (2.0, 0.0)]);
    let mut sel = Selection::new();

    sel.start_rectangle(start.0, start.1);
    sel.update_rectangle(end.0, end.1);
    assert!(sel.is_selecting());

    let n = sel.end_rectangle(&layout, 50.0);
    assert_eq!(n, Some(expected.len()));
    assert_eq!(ids(&sel), expected);
    assert!(!sel.is_selecting());
}

#[test]
fn test_marquee_replaces_previous_selection() {
    let layout = grid_layout(&[(0.0, 0.0), (2.0, 0.0)]);
    let mut sel = Selection::new();
    sel.select_key(Some("b"));

    sel.start_rectangle(0.0, 0.0);
    sel.update_rectangle(60.0, 60.0);
    sel.end_rectangle(&layout, 50.0);

    assert_eq!(ids(&sel), vec!["a"]);
}

#[test]
fn test_end_without_marquee_is_none() {
    let layout = grid_layout(&[(0.0, 0.0)]);
    let mut sel = Selection::new();
    sel.select_key(Some("a"));

    assert_eq!(sel.end_rectangle(&layout, 50.0), None);
    assert_eq!(ids(&sel), vec!["a"]);
}

#[test]
fn test_update_without_start_is_ignored() {
    let mut sel = Selection::new();
    sel.update_rectangle(10.0, 10.0);
    assert!(sel.rectangle().is_none());
}

#[test]
fn test_cancel_keeps_ids() {
    let mut sel = Selection::new();
    sel.select_key(Some("a"));
    sel.start_rectangle(0.0, 0.0);
    sel.cancel_rectangle();
    assert!(!sel.is_selecting());
    assert_eq!(ids(&sel), vec!["a"]);
}

#[test]
fn test_store_ignores_unknown_ids() {
    let mut store = store_with(grid_layout(&[(0.0, 0.0), (2.0, 0.0)]));

    store.select_key(Some("ghost"));
    assert!(store.selection().is_empty());

    store.select_multiple_keys(&["a", "ghost", "b"]);
    assert_eq!(ids(store.selection()), vec!["a", "b"]);

    store.add_to_selection("ghost");
    assert_eq!(store.selection().len(), 2);
    assert_eq!(store.selected_key_id(), None);
}

#[test]
fn test_store_selected_key_resolves_primary() {
    let mut store = store_with(grid_layout(&[(0.0, 0.0), (2.0, 0.0)]));
    store.select_key(Some("b"));
    assert_eq!(store.selected_key().map(|k| k.id.as_str()), Some("b"));

    store.add_to_selection("a");
    assert!(store.selected_key().is_none());
}
