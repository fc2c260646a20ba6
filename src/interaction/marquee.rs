use super::{Gesture, InteractionCoordinator};
use crate::geometry::Point;
use crate::store::EditorStore;

impl InteractionCoordinator {
    pub(super) fn begin_marquee(&mut self, store: &mut EditorStore, client: Point) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        let local = self.frame.to_local(client);
        store.start_rectangle_selection(local.x, local.y);
        self.gesture = Some(Gesture::Marquee);
        true
    }

    pub(super) fn update_marquee(&mut self, store: &mut EditorStore, client: Point) {
        let local = self.frame.to_local(client);
        store.update_rectangle_selection(local.x, local.y);
    }

    pub(super) fn end_marquee(&mut self, store: &mut EditorStore) {
        if matches!(self.gesture, Some(Gesture::Marquee)) {
            self.gesture = None;
            store.end_rectangle_selection();
        }
    }
}
