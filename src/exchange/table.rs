use crate::error::KmResult;
use crate::model::{Layer, Layout};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct KeyRow<'a> {
    id: &'a str,
    keycode: &'a str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    normal: &'a str,
    shift: &'a str,
    #[serde(rename = "fn")]
    fn_layer: &'a str,
    altgr: &'a str,
}

/// One row per key, in layout order. Unset optional layers are empty cells.
pub fn write_key_table<W: Write>(layout: &Layout, writer: W) -> KmResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for key in &layout.keys {
        wtr.serialize(KeyRow {
            id: &key.id,
            keycode: &key.keycode,
            x: key.position.x,
            y: key.position.y,
            width: key.size.width,
            height: key.size.height,
            normal: &key.legends.normal,
            shift: &key.legends.shift,
            fn_layer: key.legends.get(Layer::Fn).unwrap_or(""),
            altgr: key.legends.get(Layer::AltGr).unwrap_or(""),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn key_table_string(layout: &Layout) -> KmResult<String> {
    let mut buf = Vec::new();
    write_key_table(layout, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
