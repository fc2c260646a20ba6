use crate::geometry::Rect;
use crate::model::layer::Legends;
use serde::{Deserialize, Serialize};

/// Grid position of a key's top-left corner, in units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Each axis clamped to `>= 0`. NaN collapses to 0.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn floored(self, min: f32) -> Self {
        Self {
            width: self.width.max(min),
            height: self.height.max(min),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub id: String,
    pub position: Position,
    pub size: Size,
    pub keycode: String,
    pub legends: Legends,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<KeyStyle>,
}

impl Key {
    /// Axis-aligned bounds in canvas pixels.
    pub fn rect(&self, unit_px: f32) -> Rect {
        Rect::from_grid(
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
            unit_px,
        )
    }
}
