use crate::model::{Layout, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct LegendDifference {
    pub key_id: String,
    pub position: Position,
    pub current: String,
    pub other: String,
}

/// Keys of `current` that sit at exactly the same grid position as a key of
/// `other` but carry different `normal` or `shift` legends. Keys without a
/// positional counterpart are not reported.
pub fn compare_layouts(current: &Layout, other: &Layout) -> Vec<LegendDifference> {
    current
        .keys
        .iter()
        .filter_map(|key| {
            let counterpart = other.keys.iter().find(|k| k.position == key.position)?;
            let same = key.legends.normal == counterpart.legends.normal
                && key.legends.shift == counterpart.legends.shift;
            (!same).then(|| LegendDifference {
                key_id: key.id.clone(),
                position: key.position,
                current: key.legends.label(),
                other: counterpart.legends.label(),
            })
        })
        .collect()
}
