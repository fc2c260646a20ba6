use crate::geometry::{Point, Rect};
use crate::model::Layout;
use std::collections::BTreeSet;

/// A marquee being drawn, in canvas-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleSelection {
    pub start: Point,
    pub end: Point,
}

impl RectangleSelection {
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }
}

/// Set of selected key ids plus the pending marquee, if any.
///
/// The primary id is derived: it exists exactly when one key is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: BTreeSet<String>,
    rectangle: Option<RectangleSelection>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn primary(&self) -> Option<&str> {
        if self.ids.len() == 1 {
            self.ids.iter().next().map(String::as_str)
        } else {
            None
        }
    }

    /// Replaces the selection with `{id}`, or clears it for `None`.
    pub fn select_key(&mut self, id: Option<&str>) {
        self.ids.clear();
        if let Some(id) = id {
            self.ids.insert(id.to_string());
        }
    }

    /// Returns false when `id` was already selected.
    pub fn add(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn select_multiple<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
    }

    /// Drops ids that no longer name a key of `layout`.
    pub fn retain_existing(&mut self, layout: &Layout) {
        self.ids.retain(|id| layout.contains_key(id));
    }

    pub fn is_selecting(&self) -> bool {
        self.rectangle.is_some()
    }

    pub fn rectangle(&self) -> Option<&RectangleSelection> {
        self.rectangle.as_ref()
    }

    pub fn start_rectangle(&mut self, x: f32, y: f32) {
        let corner = Point::new(x, y);
        self.rectangle = Some(RectangleSelection {
            start: corner,
            end: corner,
        });
    }

    pub fn update_rectangle(&mut self, x: f32, y: f32) {
        if let Some(rect) = self.rectangle.as_mut() {
            rect.end = Point::new(x, y);
        }
    }

    /// Replaces the selection with every key whose pixel bounds intersect the
    /// marquee and clears the marquee. Returns the number of keys selected,
    /// or `None` when no marquee was pending.
    pub fn end_rectangle(&mut self, layout: &Layout, unit_px: f32) -> Option<usize> {
        let pending = self.rectangle.take()?;
        let bounds = pending.bounds();

        self.ids = layout
            .keys
            .iter()
            .filter(|k| k.rect(unit_px).intersects(&bounds))
            .map(|k| k.id.clone())
            .collect();

        Some(self.ids.len())
    }

    /// Abandons the marquee without touching the selected ids.
    pub fn cancel_rectangle(&mut self) {
        self.rectangle = None;
    }
}
