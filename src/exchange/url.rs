use crate::error::{KeymapError, KmResult};
use crate::exchange::json::import_layout;
use crate::model::Layout;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::{DateTime, Utc};

pub const LAYOUT_PARAM: &str = "layout";

/// Compact JSON, URL-safe base64 without padding.
pub fn encode_share_payload(layout: &Layout) -> KmResult<String> {
    let json = serde_json::to_string(layout)?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

pub fn share_url(base: &str, layout: &Layout) -> KmResult<String> {
    let sep = if base.contains('?') { '&' } else { '?' };
    Ok(format!(
        "{}{}{}={}",
        base,
        sep,
        LAYOUT_PARAM,
        encode_share_payload(layout)?
    ))
}

/// Finds the `layout` parameter in a full URL or a bare query string.
pub fn extract_layout_param(url: &str) -> Option<&str> {
    let query = match url.split_once('?') {
        Some((_, q)) => q,
        None => url,
    };
    let query = query.split('#').next().unwrap_or(query);

    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == LAYOUT_PARAM && !v.is_empty()).then_some(v)
    })
}

/// Percent-escapes of the base64 symbols `=`, `+` and `/`, in either hex case.
fn unescape(payload: &str) -> String {
    let mut out = String::with_capacity(payload.len());
    let mut rest = payload;
    while let Some(idx) = rest.find('%') {
        out.push_str(&rest[..idx]);
        let symbol = match rest.get(idx + 1..idx + 3).map(|h| h.to_ascii_uppercase()) {
            Some(hex) if hex == "3D" => Some('='),
            Some(hex) if hex == "2B" => Some('+'),
            Some(hex) if hex == "2F" => Some('/'),
            _ => None,
        };
        match symbol {
            Some(c) => {
                out.push(c);
                rest = &rest[idx + 3..];
            }
            None => {
                out.push('%');
                rest = &rest[idx + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Accepts the URL-safe alphabet and the standard one (with `+` possibly
/// turned into a space by form decoding), padded or not.
pub fn decode_share_payload(payload: &str) -> KmResult<String> {
    let cleaned = unescape(payload.trim()).replace(' ', "+");
    let cleaned = cleaned.trim_end_matches('=');

    let bytes = if cleaned.contains('+') || cleaned.contains('/') {
        STANDARD_NO_PAD.decode(cleaned)?
    } else {
        URL_SAFE_NO_PAD.decode(cleaned)?
    };

    String::from_utf8(bytes)
        .map_err(|e| KeymapError::Import(format!("share payload is not UTF-8: {}", e)))
}

/// Decoded JSON of the `layout` parameter, without the import rewrite.
pub fn parse_share_url(url: &str) -> KmResult<String> {
    let payload = extract_layout_param(url).ok_or_else(|| {
        KeymapError::Import(format!("no '{}' parameter in share URL", LAYOUT_PARAM))
    })?;
    decode_share_payload(payload)
}

pub fn import_share_url(url: &str, now: DateTime<Utc>) -> KmResult<Layout> {
    let json = parse_share_url(url)?;
    import_layout(&json, now)
}
