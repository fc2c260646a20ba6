mod common;

use common::{grid_layout, store_with, test_config};
use keymapcraft::engine::{IdMinter, NewKey};
use keymapcraft::error::KeymapError;
use keymapcraft::exchange;
use keymapcraft::model::{Layer, Position};
use keymapcraft::presets::Preset;
use keymapcraft::store::{EditorEvent, EditorStore};
use rstest::rstest;
use std::cell::RefCell;
use std::rc::Rc;

fn legend(store: &EditorStore, id: &str, layer: Layer) -> String {
    let key = store.current_layout().unwrap().key(id).unwrap();
    key.legends.get(layer).unwrap_or_default().to_string()
}

fn recorder(store: &mut EditorStore) -> Rc<RefCell<Vec<EditorEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |e| sink.borrow_mut().push(*e));
    events
}

#[rstest]
#[case::char("q", false, Layer::Normal, "q")]
#[case::shifted("Q", true, Layer::Shift, "Q")]
#[case::space("Space", false, Layer::Normal, " ")]
#[case::backspace("Backspace", false, Layer::Normal, "")]
#[case::delete_shift("Delete", true, Layer::Shift, "")]
fn test_direct_input_writes_legend(
    #[case] key: &str,
    #[case] shift: bool,
    #[case] layer: Layer,
    #[case] expected: &str,
) {
    let mut store = store_with(grid_layout(&[(0.0, 0.0)]));
    store.select_key(Some("a"));

    assert!(store.handle_direct_input(key, shift));
    assert_eq!(legend(&store, "a", layer), expected);
}

#[test]
fn test_direct_input_ignored_cases() {
    let mut store = store_with(grid_layout(&[(0.0, 0.0), (1.0, 0.0)]));

    // nothing selected
    assert!(!store.handle_direct_input("x", false));

    // named keys other than the editing ones
    store.select_key(Some("a"));
    assert!(!store.handle_direct_input("ArrowLeft", false));
    assert!(!store.handle_direct_input("Enter", false));

    // multi-selection has no primary
    store.add_to_selection("b");
    assert!(!store.handle_direct_input("x", false));

    store.select_key(Some("a"));
    store.set_direct_input_enabled(false);
    assert!(!store.handle_direct_input("x", false));
    assert_eq!(legend(&store, "a", Layer::Normal), "a");
}

#[test]
fn test_subscribers_notified_synchronously() {
    let mut store = store_with(grid_layout(&[(0.0, 0.0), (1.0, 0.0)]));
    let events = recorder(&mut store);

    store.select_key(Some("a"));
    store.update_key_position("a", Position::new(2.0, 2.0));
    store.delete_key("a");

    assert_eq!(
        *events.borrow(),
        vec![
            EditorEvent::SelectionChanged,
            EditorEvent::LayoutChanged,
            EditorEvent::LayoutChanged,
            EditorEvent::SelectionChanged,
        ]
    );
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut store = store_with(grid_layout(&[(0.0, 0.0)]));
    let count = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&count);
    let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

    store.select_key(Some("a"));
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.clear_selection();

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_unchanged_selection_emits_nothing() {
    let mut store = store_with(grid_layout(&[(0.0, 0.0)]));
    store.select_key(Some("a"));
    let events = recorder(&mut store);

    store.select_key(Some("a"));
    store.add_to_selection("a");
    assert!(events.borrow().is_empty());
}

#[test]
fn test_set_layout_prunes_selection() {
    let mut store = store_with(grid_layout(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));
    store.select_multiple_keys(&["a", "c"]);

    store.set_current_layout(grid_layout(&[(0.0, 0.0), (1.0, 0.0)]));
    assert_eq!(store.selection().ids().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(store.selected_key_id(), Some("a"));
}

#[test]
fn test_failed_import_keeps_layout() {
    let mut store = store_with(grid_layout(&[(0.0, 0.0)]));
    let before = store.current_layout().cloned();
    let events = recorder(&mut store);

    let err = store.import_json(r#"{"id": "x", "name": "", "keys": []}"#);
    assert!(matches!(err, Err(KeymapError::Import(_))));
    assert!(store.import_json("not json").is_err());
    assert!(store.import_share_url("https://example.com/?other=1").is_err());

    assert_eq!(store.current_layout().cloned(), before);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_import_installs_rewritten_layout() {
    let mut store = EditorStore::new(test_config());
    let source = Preset::Us.layout(common::epoch());
    let json = exchange::to_json(&source).unwrap();

    store.import_json(&json).unwrap();
    let layout = store.current_layout().unwrap();
    assert!(layout.id.starts_with("imported_"));
    assert_eq!(layout.keys, source.keys);
    assert_eq!(layout.created_at, source.created_at);
}

#[test]
fn test_no_layout_operations_are_noops() {
    let mut store = EditorStore::new(test_config());
    store.update_key_legend("a", Layer::Normal, "x");
    store.move_selected_keys(1.0, 1.0);
    store.delete_selected_keys();
    assert!(store.add_key(NewKey::default()).is_none());
    assert!(store.duplicate_selected_keys().is_empty());
    assert!(store.current_layout().is_none());
    assert!(store.overlaps().is_empty());
}

#[test]
fn test_blank_layout_and_rename() {
    let mut store = EditorStore::new(test_config()).with_minter(IdMinter::with_seed(11));
    let id = store.new_blank_layout("Scratch");

    let layout = store.current_layout().unwrap();
    assert_eq!(layout.id, id);
    assert!(layout.keys.is_empty());
    assert_eq!(layout.metadata.layout_type, "custom");
    assert_eq!(layout.metadata.key_count, 0);
    assert_eq!(layout.created_at, layout.updated_at);

    store.rename_layout("Renamed", Some("for export"));
    let layout = store.current_layout().unwrap();
    assert_eq!(layout.name, "Renamed");
    assert_eq!(layout.description.as_deref(), Some("for export"));
    assert_eq!(layout.id, id);
}

#[test]
fn test_add_and_duplicate_through_store() {
    let mut store = store_with(grid_layout(&[(0.0, 0.0), (1.0, 0.0)]));

    let added = store.add_key(NewKey::default()).unwrap();
    assert!(store.current_layout().unwrap().contains_key(&added));

    store.select_multiple_keys(&["a", "b"]);
    let clones = store.duplicate_selected_keys();
    assert_eq!(clones.len(), 2);
    assert_eq!(store.selection().len(), 2);
    assert!(clones.iter().all(|id| store.selection().contains(id)));
    assert_eq!(store.current_layout().unwrap().metadata.key_count, 5);

    store.delete_selected_keys();
    assert!(store.selection().is_empty());
    assert_eq!(store.current_layout().unwrap().keys.len(), 3);
}

#[test]
fn test_current_layer_is_view_state() {
    let mut store = store_with(grid_layout(&[(0.0, 0.0)]));
    assert_eq!(store.current_layer(), Layer::Normal);
    store.set_current_layer(Layer::Fn);
    assert_eq!(store.current_layer(), Layer::Fn);
    assert_eq!(legend(&store, "a", Layer::Normal), "a");
}
