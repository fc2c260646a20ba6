use crate::consts::{GRID_STEP, RESIZE_STEP};
use crate::model::Position;

/// A point in pixel space (client or canvas-local, depending on the caller).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn from_grid(x: f32, y: f32, width: f32, height: f32, unit_px: f32) -> Self {
        Self {
            left: x * unit_px,
            top: y * unit_px,
            right: (x + width) * unit_px,
            bottom: (y + height) * unit_px,
        }
    }

    /// Normalises two arbitrary corners into min/max bounds.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Open-interval test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

/// Pixel offset -> grid units, snapped to the drag resolution.
pub fn snap_to_grid(px: f32, unit_px: f32) -> f32 {
    let step_px = unit_px * GRID_STEP;
    (px / step_px).round() * GRID_STEP
}

/// Canvas-local pointer -> snapped, non-negative grid position.
pub fn snap_position(local: Point, unit_px: f32) -> Position {
    Position::new(snap_to_grid(local.x, unit_px), snap_to_grid(local.y, unit_px)).clamped()
}

/// Pixel delta -> grid units rounded to the resize step.
pub fn snap_resize_delta(delta_px: f32, unit_px: f32) -> f32 {
    (delta_px / unit_px / RESIZE_STEP).round() * RESIZE_STEP
}
