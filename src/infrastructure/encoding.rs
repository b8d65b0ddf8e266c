//! Query-string encoding.
//!
//! Minimal `application/x-www-form-urlencoded` helpers for the two places that
//! need them: building catalog request URLs and rendering the location as a
//! query string. Unreserved characters (`A-Z a-z 0-9 - . _ ~`) pass through,
//! everything else is percent-encoded byte by byte.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Percent-encodes a single query component.
///
/// # Examples
///
/// ```
/// use bookworld::infrastructure::percent_encode;
///
/// assert_eq!(percent_encode("dune messiah"), "dune%20messiah");
/// assert_eq!(percent_encode("intitle:c++"), "intitle%3Ac%2B%2B");
/// ```
#[must_use]
pub fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// Decodes a percent-encoded component. `+` decodes to a space.
///
/// Returns `None` for truncated or non-hex escapes, or bytes that are not
/// valid UTF-8.
#[must_use]
pub fn percent_decode(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = value.get(i + 1..i + 3)?;
                if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return None;
                }
                out.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}

/// Renders parameters as `k1=v1&k2=v2` in key order.
#[must_use]
pub fn to_query_string(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parses `k1=v1&k2=v2` (an optional leading `?` is ignored).
///
/// Pairs that fail to decode are skipped; a key without `=` maps to an
/// empty value. Later duplicates win.
#[must_use]
pub fn parse_query_string(query: &str) -> BTreeMap<String, String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((percent_decode(key)?, percent_decode(value)?))
        })
        .collect()
}
