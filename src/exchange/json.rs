use crate::error::{KeymapError, KmResult};
use crate::model::Layout;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn to_json(layout: &Layout) -> KmResult<String> {
    Ok(serde_json::to_string_pretty(layout)?)
}

pub fn write_json_file<P: AsRef<Path>>(path: P, layout: &Layout) -> KmResult<()> {
    fs::write(path, to_json(layout)?)?;
    Ok(())
}

fn require_text(value: &Value, field: &str) -> KmResult<()> {
    match value.get(field).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(KeymapError::Import(format!(
            "layout is missing a non-empty '{}'",
            field
        ))),
    }
}

/// Parses a layout verbatim. Only the top-level `id`, `name` and `keys`
/// fields are checked before typed decoding.
pub fn parse_layout(payload: &str) -> KmResult<Layout> {
    let value: Value = serde_json::from_str(payload)?;
    if !value.is_object() {
        return Err(KeymapError::Import(
            "layout payload is not a JSON object".to_string(),
        ));
    }
    require_text(&value, "id")?;
    require_text(&value, "name")?;
    if !value.get("keys").is_some_and(Value::is_array) {
        return Err(KeymapError::Import(
            "layout 'keys' must be an array".to_string(),
        ));
    }

    Ok(serde_json::from_value(value)?)
}

/// Parses a candidate and applies the import rewrite: a fresh
/// `imported_<millis>` id and `updatedAt = now`. Keys are kept verbatim.
pub fn import_layout(payload: &str, now: DateTime<Utc>) -> KmResult<Layout> {
    let mut layout = parse_layout(payload)?;
    debug!(
        "Import: '{}' ({} keys), original id '{}'",
        layout.name,
        layout.keys.len(),
        layout.id
    );
    layout.id = format!("imported_{}", now.timestamp_millis());
    layout.updated_at = now;
    Ok(layout)
}

/// Reads a layout file as-is, keeping its id and timestamps.
pub fn load_layout_file<P: AsRef<Path>>(path: P) -> KmResult<Layout> {
    let content = fs::read_to_string(path)?;
    parse_layout(&content)
}

/// Reads a layout file through the import rewrite.
pub fn read_layout_file<P: AsRef<Path>>(path: P, now: DateTime<Utc>) -> KmResult<Layout> {
    let content = fs::read_to_string(path)?;
    import_layout(&content, now)
}
