use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The four input states a key can display.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    #[default]
    Normal,
    Shift,
    Fn,
    AltGr,
}

impl Layer {
    /// `normal` and `shift` must be present on every key.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Normal | Self::Shift)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legends {
    pub normal: String,
    pub shift: String,
    #[serde(default, rename = "fn", skip_serializing_if = "Option::is_none")]
    pub fn_layer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altgr: Option<String>,
}

impl Legends {
    pub fn new(normal: impl Into<String>, shift: impl Into<String>) -> Self {
        Self {
            normal: normal.into(),
            shift: shift.into(),
            fn_layer: None,
            altgr: None,
        }
    }

    /// Raw stored value. Optional layers return `None` when never set.
    pub fn get(&self, layer: Layer) -> Option<&str> {
        match layer {
            Layer::Normal => Some(&self.normal),
            Layer::Shift => Some(&self.shift),
            Layer::Fn => self.fn_layer.as_deref(),
            Layer::AltGr => self.altgr.as_deref(),
        }
    }

    pub fn set(&mut self, layer: Layer, value: impl Into<String>) {
        let value = value.into();
        match layer {
            Layer::Normal => self.normal = value,
            Layer::Shift => self.shift = value,
            Layer::Fn => self.fn_layer = Some(value),
            Layer::AltGr => self.altgr = Some(value),
        }
    }

    /// Legend shown for `layer`. Absent or empty optional layers inherit `normal`.
    pub fn resolve(&self, layer: Layer) -> &str {
        match self.get(layer) {
            Some(v) if layer.is_required() || !v.is_empty() => v,
            _ => &self.normal,
        }
    }

    /// `"a"` when both required legends agree, `"a / A"` otherwise.
    pub fn label(&self) -> String {
        if self.shift != self.normal {
            format!("{} / {}", self.normal, self.shift)
        } else {
            self.normal.clone()
        }
    }
}
