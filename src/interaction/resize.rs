use super::{Gesture, InteractionCoordinator};
use crate::consts::MIN_KEY_SIZE;
use crate::geometry::{snap_resize_delta, Point};
use crate::model::Size;
use crate::store::EditorStore;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Which handle was grabbed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    Right,
    Bottom,
    Corner,
}

impl ResizeDirection {
    pub fn affects_width(self) -> bool {
        matches!(self, Self::Right | Self::Corner)
    }

    pub fn affects_height(self) -> bool {
        matches!(self, Self::Bottom | Self::Corner)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub key_id: String,
    pub direction: ResizeDirection,
    pub start_pointer: Point,
    pub start_size: Size,
    unit_px: f32,
}

impl ResizeSession {
    /// Size for a pointer at `client`: the delta is rounded to the resize
    /// step and each affected dimension is floored at [`MIN_KEY_SIZE`].
    pub fn size_at(&self, client: Point) -> Size {
        let mut size = self.start_size;
        if self.direction.affects_width() {
            let dw = snap_resize_delta(client.x - self.start_pointer.x, self.unit_px);
            size.width = (self.start_size.width + dw).max(MIN_KEY_SIZE);
        }
        if self.direction.affects_height() {
            let dh = snap_resize_delta(client.y - self.start_pointer.y, self.unit_px);
            size.height = (self.start_size.height + dh).max(MIN_KEY_SIZE);
        }
        size
    }
}

impl InteractionCoordinator {
    /// Resize-handle press. Refused while another gesture is live.
    pub fn begin_resize(
        &mut self,
        store: &EditorStore,
        key_id: &str,
        direction: ResizeDirection,
        client: Point,
    ) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        let Some(key) = store.current_layout().and_then(|l| l.key(key_id)) else {
            return false;
        };
        debug!("Resize start: '{}' ({})", key_id, direction);

        self.gesture = Some(Gesture::Resize(ResizeSession {
            key_id: key_id.to_string(),
            direction,
            start_pointer: client,
            start_size: key.size,
            unit_px: store.unit_px(),
        }));
        true
    }

    /// Live resize: every move writes the new size to the store.
    pub fn resize_to(&mut self, store: &mut EditorStore, client: Point) -> Option<Size> {
        let session = self.resize_session()?;
        let size = session.size_at(client);
        store.update_key_size(&session.key_id, size);
        Some(size)
    }

    pub fn end_resize(&mut self) {
        if let Some(Gesture::Resize(session)) = self.gesture.take() {
            debug!("Resize end: '{}'", session.key_id);
        }
    }
}
