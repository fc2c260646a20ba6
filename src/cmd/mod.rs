pub mod compare;
pub mod export;
pub mod import;
pub mod inspect;
pub mod presets;

use chrono::Utc;
use keymapcraft::error::{KeymapError, KmResult};
use keymapcraft::exchange;
use keymapcraft::model::Layout;
use keymapcraft::presets::Preset;
use std::path::Path;
use std::str::FromStr;

/// Resolves a CLI layout argument: an existing file path first, then a preset name.
/// Files are read verbatim; only `import` applies the import rewrite.
pub fn resolve_layout(source: &str) -> KmResult<Layout> {
    if Path::new(source).exists() {
        return exchange::load_layout_file(source);
    }
    preset_layout(source)
}

pub fn preset_layout(name: &str) -> KmResult<Layout> {
    Preset::from_str(name)
        .map(|p| p.layout(Utc::now()))
        .map_err(|_| KeymapError::Import(format!("'{}' is neither a file nor a preset", name)))
}
