//! Turns pointer events into grid-snapped store calls.
//!
//! At most one gesture is live at a time. A gesture is the equivalent of a
//! temporary move/up listener pair: it exists from the press until
//! [`InteractionCoordinator::pointer_up`] or [`InteractionCoordinator::cancel`],
//! both of which always tear it down.

mod drag;
mod marquee;
mod resize;

pub use self::drag::DragSession;
pub use self::resize::{ResizeDirection, ResizeSession};

use crate::config::EditorConfig;
use crate::geometry::Point;
use crate::model::Position;
use crate::store::EditorStore;
use tracing::debug;

/// Canvas placement in client pixels, supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    pub origin: Point,
    pub padding: f32,
}

impl CanvasFrame {
    pub fn new(left: f32, top: f32, padding: f32) -> Self {
        Self {
            origin: Point::new(left, top),
            padding,
        }
    }

    /// Canvas at `(left, top)` with the configured inner padding.
    pub fn at(left: f32, top: f32, config: &EditorConfig) -> Self {
        Self::new(left, top, config.canvas_padding_px)
    }

    /// Client coordinates -> canvas-local pixels (key space).
    pub fn to_local(&self, client: Point) -> Point {
        Point::new(
            client.x - self.origin.x - self.padding,
            client.y - self.origin.y - self.padding,
        )
    }
}

/// What the pointer went down on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    Canvas,
    Key(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Drag(DragSession),
    Resize(ResizeSession),
    Marquee,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionCoordinator {
    frame: CanvasFrame,
    gesture: Option<Gesture>,
}

impl InteractionCoordinator {
    pub fn new(frame: CanvasFrame) -> Self {
        Self {
            frame,
            gesture: None,
        }
    }

    pub fn frame(&self) -> CanvasFrame {
        self.frame
    }

    /// The canvas moved or scrolled.
    pub fn set_frame(&mut self, frame: CanvasFrame) {
        self.frame = frame;
    }

    /// True while a gesture holds its move/up listeners.
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Some(Gesture::Drag(_)))
    }

    pub fn dragged_key_id(&self) -> Option<&str> {
        self.drag_session().map(|s| s.key_id.as_str())
    }

    pub fn drag_preview_position(&self) -> Option<Position> {
        self.drag_session().and_then(|s| s.preview)
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        match &self.gesture {
            Some(Gesture::Drag(s)) => Some(s),
            _ => None,
        }
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Some(Gesture::Resize(_)))
    }

    pub fn resizing_key_id(&self) -> Option<&str> {
        self.resize_session().map(|s| s.key_id.as_str())
    }

    pub fn resize_direction(&self) -> Option<ResizeDirection> {
        self.resize_session().map(|s| s.direction)
    }

    pub fn resize_session(&self) -> Option<&ResizeSession> {
        match &self.gesture {
            Some(Gesture::Resize(s)) => Some(s),
            _ => None,
        }
    }

    pub fn is_rectangle_selecting(&self) -> bool {
        matches!(self.gesture, Some(Gesture::Marquee))
    }

    /// Pointer press. Keys start nothing here (drags begin through
    /// [`InteractionCoordinator::begin_drag`]); the empty canvas starts a marquee.
    pub fn pointer_down(
        &mut self,
        store: &mut EditorStore,
        client: Point,
        target: &PointerTarget,
    ) -> bool {
        match target {
            PointerTarget::Canvas => self.begin_marquee(store, client),
            PointerTarget::Key(_) => false,
        }
    }

    /// Document-level move: tracked even outside the canvas bounds.
    pub fn pointer_move(&mut self, store: &mut EditorStore, client: Point) {
        match self.gesture {
            Some(Gesture::Drag(_)) => {
                self.drag_over(client);
            }
            Some(Gesture::Resize(_)) => {
                self.resize_to(store, client);
            }
            Some(Gesture::Marquee) => self.update_marquee(store, client),
            None => {}
        }
    }

    /// Document-level release. Always ends the live gesture.
    pub fn pointer_up(&mut self, store: &mut EditorStore, client: Point, inside_canvas: bool) {
        match self.gesture {
            Some(Gesture::Drag(_)) => {
                if inside_canvas {
                    self.drop_on_canvas(store, client);
                }
                self.end_drag(store);
            }
            Some(Gesture::Resize(_)) => self.end_resize(),
            Some(Gesture::Marquee) => {
                self.update_marquee(store, client);
                self.end_marquee(store);
            }
            None => {}
        }
    }

    /// Pointer capture lost: behaves like a release outside every target,
    /// except that a pending marquee is discarded instead of applied.
    pub fn cancel(&mut self, store: &mut EditorStore) {
        match self.gesture {
            Some(Gesture::Drag(_)) => self.end_drag(store),
            Some(Gesture::Resize(_)) => self.end_resize(),
            Some(Gesture::Marquee) => {
                store.cancel_rectangle_selection();
                self.gesture = None;
            }
            None => return,
        }
        debug!("Gesture cancelled");
    }
}
