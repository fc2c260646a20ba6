mod jis;
mod us;

use crate::model::{Key, Layout, LayoutMetadata, Legends, Position, Size};
use chrono::{DateTime, Utc};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// `(id, x, y, width, height, keycode, normal, shift)`
pub type PresetKey = (
    &'static str,
    f32,
    f32,
    f32,
    f32,
    &'static str,
    &'static str,
    &'static str,
);

pub struct PresetInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub language: &'static str,
    pub region: &'static str,
    pub layout_type: &'static str,
    pub author: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Preset {
    Us,
    JisFull,
}

impl Preset {
    pub fn info(&self) -> &'static PresetInfo {
        match self {
            Self::Us => &us::INFO,
            Self::JisFull => &jis::INFO,
        }
    }

    fn keys(&self) -> &'static [PresetKey] {
        match self {
            Self::Us => us::KEYS,
            Self::JisFull => jis::KEYS,
        }
    }

    /// Builds a fresh layout value; both timestamps are `now`.
    pub fn layout(&self, now: DateTime<Utc>) -> Layout {
        let info = self.info();
        let keys: Vec<Key> = self
            .keys()
            .iter()
            .map(|&(id, x, y, w, h, keycode, normal, shift)| Key {
                id: id.to_string(),
                position: Position::new(x, y),
                size: Size::new(w, h),
                keycode: keycode.to_string(),
                legends: Legends::new(normal, shift),
                style: None,
            })
            .collect();

        Layout {
            id: info.id.to_string(),
            name: info.name.to_string(),
            description: Some(info.description.to_string()),
            metadata: LayoutMetadata {
                language: info.language.to_string(),
                region: info.region.to_string(),
                layout_type: info.layout_type.to_string(),
                key_count: keys.len(),
                author: Some(info.author.to_string()),
                tags: Some(info.tags.iter().map(|t| t.to_string()).collect()),
            },
            keys,
            created_at: now,
            updated_at: now,
        }
    }
}

pub fn all_presets() -> Vec<Preset> {
    Preset::iter().collect()
}
