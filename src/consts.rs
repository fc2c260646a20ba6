/// Pixels per grid unit used when no config overrides it.
pub const DEFAULT_UNIT_PX: f32 = 50.0;

/// Inner padding of the canvas, subtracted from pointer coordinates.
pub const DEFAULT_CANVAS_PADDING_PX: f32 = 16.0;

/// Drag snapping resolution in grid units (12.5px at 50px per unit).
pub const GRID_STEP: f32 = 0.25;

/// Live resize rounds each dimension to this step.
pub const RESIZE_STEP: f32 = 0.25;

/// No key may be narrower or shorter than this, in grid units.
pub const MIN_KEY_SIZE: f32 = 0.5;

/// Offset applied to every duplicated key, single or bulk.
pub const DUPLICATE_OFFSET: (f32, f32) = (1.0, 1.0);

/// Legend given to freshly added keys on the required layers.
pub const PLACEHOLDER_LEGEND: &str = "?";

/// Keycode given to keys added from the toolbar.
pub const CUSTOM_KEYCODE: &str = "Custom";

/// Metadata tag used for blank layouts.
pub const CUSTOM_TAG: &str = "custom";

/// Length of the random suffix appended to minted key ids.
pub const ID_SUFFIX_LEN: usize = 6;
