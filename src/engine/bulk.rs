use crate::engine::ids::IdMinter;
use crate::engine::single::clone_with_offset;
use crate::model::{Key, Layout};
use crate::selection::Selection;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

// Bulk variants return `None` when the selection is empty.

pub fn delete_selected_keys(
    layout: &Layout,
    selection: &Selection,
    now: DateTime<Utc>,
) -> Option<(Layout, Selection)> {
    if selection.is_empty() {
        return None;
    }

    let keys: Vec<Key> = layout
        .keys
        .iter()
        .filter(|k| !selection.contains(&k.id))
        .cloned()
        .collect();

    let mut selection = selection.clone();
    selection.clear();

    Some((layout.with_keys(keys, now).with_synced_count(), selection))
}

/// Clones every selected key (in layout order) and selects the clones.
pub fn duplicate_selected_keys(
    layout: &Layout,
    selection: &Selection,
    minter: &mut IdMinter,
    now: DateTime<Utc>,
) -> Option<(Layout, Selection)> {
    if selection.is_empty() {
        return None;
    }

    let mut keys = layout.keys.clone();
    let mut taken: HashSet<String> = layout.keys.iter().map(|k| k.id.clone()).collect();
    let mut clone_ids = Vec::new();

    for source in layout.keys.iter().filter(|k| selection.contains(&k.id)) {
        let new_id = minter.mint(&format!("{}_copy", source.id), |c| taken.contains(c));
        taken.insert(new_id.clone());
        keys.push(clone_with_offset(source, new_id.clone()));
        clone_ids.push(new_id);
    }

    let mut selection = selection.clone();
    selection.select_multiple(clone_ids);

    Some((layout.with_keys(keys, now).with_synced_count(), selection))
}

/// Translates every selected key by the same delta.
///
/// Clamping to `>= 0` is per key: keys near the origin stop at the edge while
/// the rest keep moving, so relative spacing inside the group can change.
pub fn move_selected_keys(
    layout: &Layout,
    selection: &Selection,
    dx: f32,
    dy: f32,
    now: DateTime<Utc>,
) -> Option<Layout> {
    if selection.is_empty() {
        return None;
    }

    let keys = layout
        .keys
        .iter()
        .map(|k| {
            let mut k = k.clone();
            if selection.contains(&k.id) {
                k.position = k.position.offset(dx, dy).clamped();
            }
            k
        })
        .collect();

    Some(layout.with_keys(keys, now))
}
