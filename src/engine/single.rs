use crate::consts::{DUPLICATE_OFFSET, MIN_KEY_SIZE};
use crate::engine::ids::{IdMinter, NewKey};
use crate::model::{Key, Layer, Layout, Position, Size};
use crate::selection::Selection;
use chrono::{DateTime, Utc};

fn map_key<F>(layout: &Layout, id: &str, now: DateTime<Utc>, mut edit: F) -> Layout
where
    F: FnMut(&mut Key),
{
    let keys = layout
        .keys
        .iter()
        .map(|k| {
            let mut k = k.clone();
            if k.id == id {
                edit(&mut k);
            }
            k
        })
        .collect();
    layout.with_keys(keys, now)
}

pub fn update_key_legend(
    layout: &Layout,
    id: &str,
    layer: Layer,
    value: &str,
    now: DateTime<Utc>,
) -> Layout {
    map_key(layout, id, now, |k| k.legends.set(layer, value))
}

/// Replaces one key's position, clamped to `>= 0`.
pub fn update_key_position(
    layout: &Layout,
    id: &str,
    position: Position,
    now: DateTime<Utc>,
) -> Layout {
    let position = position.clamped();
    map_key(layout, id, now, |k| k.position = position)
}

/// Replaces one key's size, floored at [`MIN_KEY_SIZE`].
pub fn update_key_size(layout: &Layout, id: &str, size: Size, now: DateTime<Utc>) -> Layout {
    let size = size.floored(MIN_KEY_SIZE);
    map_key(layout, id, now, |k| k.size = size)
}

/// Appends a key built from `template` and returns the minted id.
pub fn add_key(
    layout: &Layout,
    template: NewKey,
    minter: &mut IdMinter,
    now: DateTime<Utc>,
) -> (Layout, String) {
    let id = minter.mint("key", |c| layout.contains_key(c));
    let mut key = template.into_key(id.clone());
    key.position = key.position.clamped();
    key.size = key.size.floored(MIN_KEY_SIZE);

    let mut keys = layout.keys.clone();
    keys.push(key);
    (layout.with_keys(keys, now).with_synced_count(), id)
}

pub(crate) fn clone_with_offset(source: &Key, id: String) -> Key {
    let (dx, dy) = DUPLICATE_OFFSET;
    Key {
        id,
        position: source.position.offset(dx, dy).clamped(),
        ..source.clone()
    }
}

/// Appends a copy of `id` shifted by [`DUPLICATE_OFFSET`]. Selection is untouched.
pub fn duplicate_key(
    layout: &Layout,
    id: &str,
    minter: &mut IdMinter,
    now: DateTime<Utc>,
) -> (Layout, Option<String>) {
    let Some(source) = layout.key(id) else {
        return (layout.touched(now), None);
    };

    let new_id = minter.mint(&format!("{}_copy", id), |c| layout.contains_key(c));
    let mut keys = layout.keys.clone();
    keys.push(clone_with_offset(source, new_id.clone()));
    (layout.with_keys(keys, now).with_synced_count(), Some(new_id))
}

/// Removes `id` from the layout and from the selection in the same step.
pub fn delete_key(
    layout: &Layout,
    selection: &Selection,
    id: &str,
    now: DateTime<Utc>,
) -> (Layout, Selection) {
    let keys: Vec<Key> = layout.keys.iter().filter(|k| k.id != id).cloned().collect();

    let mut selection = selection.clone();
    selection.remove(id);

    (layout.with_keys(keys, now).with_synced_count(), selection)
}
