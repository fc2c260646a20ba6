use crate::consts::CUSTOM_TAG;
use crate::model::key::Key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetadata {
    pub language: String,
    pub region: String,
    pub layout_type: String,
    pub key_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Default for LayoutMetadata {
    fn default() -> Self {
        Self {
            language: CUSTOM_TAG.to_string(),
            region: CUSTOM_TAG.to_string(),
            layout_type: CUSTOM_TAG.to_string(),
            key_count: 0,
            author: None,
            tags: None,
        }
    }
}

/// The aggregate edited as a unit.
///
/// Values are treated as immutable snapshots: every mutation in
/// [`crate::engine`] builds a new `Layout` from the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub keys: Vec<Key>,
    #[serde(default)]
    pub metadata: LayoutMetadata,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Layout {
    pub fn blank(id: impl Into<String>, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            keys: Vec::new(),
            metadata: LayoutMetadata::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn key(&self, id: &str) -> Option<&Key> {
        self.keys.iter().find(|k| k.id == id)
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.keys.iter().any(|k| k.id == id)
    }

    pub fn key_ids(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.id.as_str())
    }

    /// New snapshot carrying `keys`, with `updatedAt` refreshed.
    /// `metadata.keyCount` is left alone; structural operations call
    /// [`Layout::with_synced_count`] afterwards.
    pub fn with_keys(&self, keys: Vec<Key>, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            keys,
            metadata: self.metadata.clone(),
            created_at: self.created_at,
            updated_at: now,
        }
    }

    pub fn with_synced_count(mut self) -> Self {
        self.metadata.key_count = self.keys.len();
        self
    }

    pub fn touched(&self, now: DateTime<Utc>) -> Self {
        Self {
            updated_at: now,
            ..self.clone()
        }
    }

    /// Bottom-right corner of the occupied area, in grid units.
    pub fn extent(&self) -> (f32, f32) {
        self.keys.iter().fold((0.0f32, 0.0f32), |(w, h), k| {
            (
                w.max(k.position.x + k.size.width),
                h.max(k.position.y + k.size.height),
            )
        })
    }
}
