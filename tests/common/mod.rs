#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use keymapcraft::config::EditorConfig;
use keymapcraft::model::{Key, Layout, Legends, Position, Size};
use keymapcraft::store::EditorStore;

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn later() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub struct KeyBuilder {
    key: Key,
}

impl KeyBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            key: Key {
                id: id.to_string(),
                position: Position::default(),
                size: Size::default(),
                keycode: format!("Key{}", id.to_uppercase()),
                legends: Legends::new(id, id.to_uppercase()),
                style: None,
            },
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.key.position = Position::new(x, y);
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.key.size = Size::new(width, height);
        self
    }

    pub fn legends(mut self, normal: &str, shift: &str) -> Self {
        self.key.legends = Legends::new(normal, shift);
        self
    }

    pub fn build(self) -> Key {
        self.key
    }
}

pub fn layout_with(keys: Vec<Key>) -> Layout {
    let mut layout = Layout::blank("test", "Test Layout", epoch());
    layout.metadata.key_count = keys.len();
    layout.keys = keys;
    layout
}

/// Unit-sized keys at the given grid positions, ids `a`, `b`, `c`, ...
pub fn grid_layout(positions: &[(f32, f32)]) -> Layout {
    let keys = positions
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let id = ((b'a' + i as u8) as char).to_string();
            KeyBuilder::new(&id).at(x, y).build()
        })
        .collect();
    layout_with(keys)
}

/// 50 px per unit, no canvas padding.
pub fn test_config() -> EditorConfig {
    EditorConfig {
        canvas_padding_px: 0.0,
        ..Default::default()
    }
}

pub fn store_with(layout: Layout) -> EditorStore {
    EditorStore::with_layout(test_config(), layout)
}

pub fn position_of(store: &EditorStore, id: &str) -> Position {
    store
        .current_layout()
        .and_then(|l| l.key(id))
        .map(|k| k.position)
        .unwrap_or_else(|| panic!("key '{}' missing", id))
}
