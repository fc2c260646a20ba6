use super::{Gesture, InteractionCoordinator};
use crate::geometry::{snap_position, Point};
use crate::model::Position;
use crate::store::EditorStore;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub key_id: String,
    /// Position at drag start, used to revert single-key drags.
    pub original: Position,
    /// The dragged key belonged to a selection of more than one key.
    pub multi: bool,
    /// Snapped position under the pointer; rendering feedback only.
    pub preview: Option<Position>,
    dropped: bool,
    unit_px: f32,
}

impl InteractionCoordinator {
    /// False while any gesture is live, including a resize of another key.
    pub fn can_drag(&self, _key_id: &str) -> bool {
        self.gesture.is_none()
    }

    pub fn begin_drag(&mut self, store: &EditorStore, key_id: &str) -> bool {
        if !self.can_drag(key_id) {
            return false;
        }
        let Some(key) = store.current_layout().and_then(|l| l.key(key_id)) else {
            return false;
        };

        let selection = store.selection();
        let multi = selection.len() > 1 && selection.contains(key_id);
        debug!("Drag start: '{}' (multi: {})", key_id, multi);

        self.gesture = Some(Gesture::Drag(DragSession {
            key_id: key_id.to_string(),
            original: key.position,
            multi,
            preview: None,
            dropped: false,
            unit_px: store.unit_px(),
        }));
        true
    }

    fn snapped(&self, client: Point, unit_px: f32) -> Position {
        snap_position(self.frame.to_local(client), unit_px)
    }

    /// Updates the preview only; the layout is not touched until the drop.
    pub fn drag_over(&mut self, client: Point) -> Option<Position> {
        let unit_px = self.drag_session()?.unit_px;
        let pos = self.snapped(client, unit_px);
        if let Some(Gesture::Drag(session)) = self.gesture.as_mut() {
            session.preview = Some(pos);
        }
        Some(pos)
    }

    /// Valid drop inside the canvas. Multi-drags translate the whole
    /// selection by the dragged key's displacement.
    pub fn drop_on_canvas(&mut self, store: &mut EditorStore, client: Point) {
        let Some(session) = self.drag_session() else {
            return;
        };
        if session.dropped {
            return;
        }
        let target = self.snapped(client, session.unit_px);
        let (key_id, original, multi) = (session.key_id.clone(), session.original, session.multi);

        if multi {
            store.move_selected_keys(target.x - original.x, target.y - original.y);
        } else {
            store.update_key_position(&key_id, target);
        }
        debug!("Drop: '{}' at ({}, {})", key_id, target.x, target.y);

        if let Some(Gesture::Drag(session)) = self.gesture.as_mut() {
            session.dropped = true;
            session.preview = None;
        }
    }

    /// Ends the drag. Without a prior drop a single-key drag is reverted to
    /// its original position; a multi-key drag issues no mutation, and since
    /// nothing moved during the drag its keys are still where they started.
    pub fn end_drag(&mut self, store: &mut EditorStore) {
        let Some(Gesture::Drag(session)) = self.gesture.take() else {
            return;
        };
        if !session.dropped && !session.multi {
            store.update_key_position(&session.key_id, session.original);
        }
        debug!("Drag end: '{}' (dropped: {})", session.key_id, session.dropped);
    }
}
