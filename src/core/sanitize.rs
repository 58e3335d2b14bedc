// src/core/sanitize.rs

/// Collapse runs of whitespace (incl. NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `application/x-www-form-urlencoded` value: spaces become `+`. Unlike
/// Python's `quote_plus`, `*` stays literal and `~` becomes `%7E`; servers
/// decode both spellings the same.
pub fn encode_query(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
