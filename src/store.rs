use crate::config::EditorConfig;
use crate::engine::{self, IdMinter, NewKey};
use crate::error::KmResult;
use crate::exchange;
use crate::model::{Key, Layer, Layout, Position, Size};
use crate::overlap::{detect_overlaps, OverlapReport};
use crate::presets::Preset;
use crate::selection::{RectangleSelection, Selection};
use chrono::Utc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// A different layout was installed wholesale (preset, import, new).
    LayoutReplaced,
    /// The current layout was edited.
    LayoutChanged,
    SelectionChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&EditorEvent)>;

/// Owns the current layout and everything that refers to it.
///
/// All writes go through these methods, run to completion on the calling
/// thread and notify subscribers synchronously afterwards.
pub struct EditorStore {
    config: EditorConfig,
    current: Option<Layout>,
    selection: Selection,
    current_layer: Layer,
    direct_input_enabled: bool,
    minter: IdMinter,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl EditorStore {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            direct_input_enabled: config.direct_input,
            config,
            current: None,
            selection: Selection::new(),
            current_layer: Layer::Normal,
            minter: IdMinter::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn with_layout(config: EditorConfig, layout: Layout) -> Self {
        let mut store = Self::new(config);
        store.current = Some(layout);
        store
    }

    pub fn with_minter(mut self, minter: IdMinter) -> Self {
        self.minter = minter;
        self
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn unit_px(&self) -> f32 {
        self.config.unit_px
    }

    pub fn current_layout(&self) -> Option<&Layout> {
        self.current.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_key_id(&self) -> Option<&str> {
        self.selection.primary()
    }

    pub fn selected_key(&self) -> Option<&Key> {
        let id = self.selection.primary()?;
        self.current.as_ref()?.key(id)
    }

    pub fn current_layer(&self) -> Layer {
        self.current_layer
    }

    pub fn set_current_layer(&mut self, layer: Layer) {
        self.current_layer = layer;
    }

    pub fn direct_input_enabled(&self) -> bool {
        self.direct_input_enabled
    }

    pub fn set_direct_input_enabled(&mut self, enabled: bool) {
        self.direct_input_enabled = enabled;
    }

    // --- Subscriptions ---

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&EditorEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: EditorEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    fn commit(&mut self, layout: Layout) {
        self.current = Some(layout);
        self.emit(EditorEvent::LayoutChanged);
    }

    fn commit_with_selection(&mut self, layout: Layout, selection: Selection) {
        let selection_changed = selection != self.selection;
        self.current = Some(layout);
        self.selection = selection;
        self.emit(EditorEvent::LayoutChanged);
        if selection_changed {
            self.emit(EditorEvent::SelectionChanged);
        }
    }

    fn set_selection(&mut self, selection: Selection) {
        if selection != self.selection {
            self.selection = selection;
            self.emit(EditorEvent::SelectionChanged);
        }
    }

    // --- Layout model ---

    /// Installs `layout` wholesale. Selected ids that do not exist in it are dropped.
    pub fn set_current_layout(&mut self, layout: Layout) {
        info!(
            "Layout: installing '{}' ({} keys)",
            layout.name,
            layout.keys.len()
        );
        let mut selection = self.selection.clone();
        selection.retain_existing(&layout);
        selection.cancel_rectangle();

        self.current = Some(layout);
        self.emit(EditorEvent::LayoutReplaced);
        self.set_selection(selection);
    }

    pub fn load_preset(&mut self, preset: Preset) {
        self.set_current_layout(preset.layout(Utc::now()));
    }

    /// Starts an empty layout and returns its id.
    pub fn new_blank_layout(&mut self, name: &str) -> String {
        let id = self.minter.mint("layout", |_| false);
        self.set_current_layout(Layout::blank(id.clone(), name, Utc::now()));
        id
    }

    /// On failure the error is logged once and the current layout is kept.
    pub fn import_json(&mut self, payload: &str) -> KmResult<()> {
        match exchange::import_layout(payload, Utc::now()) {
            Ok(layout) => {
                self.set_current_layout(layout);
                Ok(())
            }
            Err(e) => {
                warn!("Import failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn import_share_url(&mut self, url: &str) -> KmResult<()> {
        match exchange::import_share_url(url, Utc::now()) {
            Ok(layout) => {
                self.set_current_layout(layout);
                Ok(())
            }
            Err(e) => {
                warn!("Share URL import failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn rename_layout(&mut self, name: &str, description: Option<&str>) {
        let Some(layout) = self.current.as_ref() else {
            return;
        };
        let mut next = layout.touched(Utc::now());
        next.name = name.to_string();
        next.description = description.map(str::to_string);
        self.commit(next);
    }

    pub fn overlaps(&self) -> OverlapReport {
        self.current
            .as_ref()
            .map(|l| detect_overlaps(l, self.config.unit_px))
            .unwrap_or_default()
    }

    // --- Selection ---

    fn knows(&self, id: &str) -> bool {
        self.current.as_ref().is_some_and(|l| l.contains_key(id))
    }

    pub fn select_key(&mut self, id: Option<&str>) {
        if let Some(id) = id {
            if !self.knows(id) {
                return;
            }
        }
        let mut selection = self.selection.clone();
        selection.select_key(id);
        self.set_selection(selection);
    }

    pub fn add_to_selection(&mut self, id: &str) {
        if !self.knows(id) {
            return;
        }
        let mut selection = self.selection.clone();
        selection.add(id);
        self.set_selection(selection);
    }

    pub fn remove_from_selection(&mut self, id: &str) {
        let mut selection = self.selection.clone();
        selection.remove(id);
        self.set_selection(selection);
    }

    pub fn clear_selection(&mut self) {
        let mut selection = self.selection.clone();
        selection.clear();
        self.set_selection(selection);
    }

    pub fn select_multiple_keys<S: AsRef<str>>(&mut self, ids: &[S]) {
        let known: Vec<String> = ids
            .iter()
            .map(|id| id.as_ref())
            .filter(|id| self.knows(id))
            .map(str::to_string)
            .collect();
        let mut selection = self.selection.clone();
        selection.select_multiple(known);
        self.set_selection(selection);
    }

    pub fn start_rectangle_selection(&mut self, x: f32, y: f32) {
        self.selection.start_rectangle(x, y);
    }

    pub fn update_rectangle_selection(&mut self, x: f32, y: f32) {
        self.selection.update_rectangle(x, y);
    }

    pub fn end_rectangle_selection(&mut self) {
        let unit_px = self.config.unit_px;
        let mut selection = self.selection.clone();
        let selected = match self.current.as_ref() {
            Some(layout) => selection.end_rectangle(layout, unit_px),
            None => {
                selection.cancel_rectangle();
                None
            }
        };
        if let Some(n) = selected {
            debug!("Marquee selected {} keys", n);
        }
        self.set_selection(selection);
    }

    pub fn cancel_rectangle_selection(&mut self) {
        self.selection.cancel_rectangle();
    }

    pub fn is_rectangle_selecting(&self) -> bool {
        self.selection.is_selecting()
    }

    pub fn rectangle_selection(&self) -> Option<&RectangleSelection> {
        self.selection.rectangle()
    }

    // --- Mutations ---

    pub fn update_key_legend(&mut self, id: &str, layer: Layer, value: &str) {
        let Some(layout) = self.current.as_ref() else {
            return;
        };
        let next = engine::update_key_legend(layout, id, layer, value, Utc::now());
        self.commit(next);
    }

    pub fn update_key_position(&mut self, id: &str, position: Position) {
        let Some(layout) = self.current.as_ref() else {
            return;
        };
        let next = engine::update_key_position(layout, id, position, Utc::now());
        self.commit(next);
    }

    pub fn update_key_size(&mut self, id: &str, size: Size) {
        let Some(layout) = self.current.as_ref() else {
            return;
        };
        let next = engine::update_key_size(layout, id, size, Utc::now());
        self.commit(next);
    }

    pub fn add_key(&mut self, template: NewKey) -> Option<String> {
        let layout = self.current.as_ref()?;
        let (next, id) = engine::add_key(layout, template, &mut self.minter, Utc::now());
        info!("Added key '{}' ({} keys)", id, next.keys.len());
        self.commit(next);
        Some(id)
    }

    pub fn duplicate_key(&mut self, id: &str) -> Option<String> {
        let layout = self.current.as_ref()?;
        let (next, new_id) = engine::duplicate_key(layout, id, &mut self.minter, Utc::now());
        if let Some(new_id) = &new_id {
            info!("Duplicated '{}' as '{}' ({} keys)", id, new_id, next.keys.len());
        }
        self.commit(next);
        new_id
    }

    pub fn delete_key(&mut self, id: &str) {
        let Some(layout) = self.current.as_ref() else {
            return;
        };
        let (next, selection) = engine::delete_key(layout, &self.selection, id, Utc::now());
        info!("Deleted key '{}' ({} keys)", id, next.keys.len());
        self.commit_with_selection(next, selection);
    }

    pub fn delete_selected_keys(&mut self) {
        let Some(layout) = self.current.as_ref() else {
            return;
        };
        let removed = self.selection.len();
        if let Some((next, selection)) =
            engine::delete_selected_keys(layout, &self.selection, Utc::now())
        {
            info!("Deleted {} selected keys ({} keys)", removed, next.keys.len());
            self.commit_with_selection(next, selection);
        }
    }

    /// Returns the ids of the clones, which become the new selection.
    pub fn duplicate_selected_keys(&mut self) -> Vec<String> {
        let Some(layout) = self.current.as_ref() else {
            return Vec::new();
        };
        match engine::duplicate_selected_keys(layout, &self.selection, &mut self.minter, Utc::now())
        {
            Some((next, selection)) => {
                let ids: Vec<String> = selection.ids().map(str::to_string).collect();
                info!("Duplicated {} selected keys ({} keys)", ids.len(), next.keys.len());
                self.commit_with_selection(next, selection);
                ids
            }
            None => Vec::new(),
        }
    }

    pub fn move_selected_keys(&mut self, dx: f32, dy: f32) {
        let Some(layout) = self.current.as_ref() else {
            return;
        };
        if let Some(next) = engine::move_selected_keys(layout, &self.selection, dx, dy, Utc::now())
        {
            self.commit(next);
        }
    }

    /// Direct keyboard legend entry for the primary selection.
    ///
    /// `key` is a key name as reported by the platform: single characters are
    /// written as-is, `Space` writes `" "`, `Backspace`/`Delete` clear.
    /// Returns whether the keystroke was consumed.
    pub fn handle_direct_input(&mut self, key: &str, shift: bool) -> bool {
        if !self.direct_input_enabled {
            return false;
        }
        let Some(id) = self.selection.primary().map(str::to_string) else {
            return false;
        };

        let value = match key {
            "Space" => " ",
            "Backspace" | "Delete" => "",
            k if k.chars().count() == 1 => k,
            _ => return false,
        };
        let layer = if shift { Layer::Shift } else { Layer::Normal };

        if self.current.is_none() {
            return false;
        }
        self.update_key_legend(&id, layer, value);
        true
    }
}
