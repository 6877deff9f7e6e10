//! Query string codec for the HTTP extension.
//!
//! Parsing rules (lenient, never fails):
//! - Segments are split on `&`; empty segments are skipped.
//! - A segment containing `;` is dropped.
//! - A segment whose key or value has a bad `%` escape is dropped.
//! - A segment whose escapes decode to invalid UTF-8 is dropped.
//! - `+` decodes to a space; the first value of a repeated key is kept.

use std::collections::HashMap;

use url::form_urlencoded;

/// Decode a raw `k=v&k=v` query string into single-valued parameters.
pub fn parse_query(raw: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let mut dropped = 0usize;

    for segment in raw.split('&') {
        if segment.is_empty() {
            continue;
        }
        if segment.contains(';') || !decodes_cleanly(segment) {
            dropped += 1;
            continue;
        }
        if let Some((k, v)) = form_urlencoded::parse(segment.as_bytes()).next() {
            params.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "malformed query segments ignored");
    }
    params
}

/// Encode parameters as a form-urlencoded query string (keys sorted).
pub fn encode_query(params: &HashMap<String, String>) -> String {
    let mut pairs: Vec<(&String, &String)> = params.iter().collect();
    pairs.sort();

    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        ser.append_pair(k, v);
    }
    ser.finish()
}

/// Every `%` must be followed by two hex digits and the decoded bytes must be UTF-8.
fn decodes_cleanly(s: &str) -> bool {
    let mut decoded = Vec::with_capacity(s.len());
    let mut rest = s.as_bytes();
    while let Some((&c, tail)) = rest.split_first() {
        if c != b'%' {
            decoded.push(c);
            rest = tail;
            continue;
        }
        let Some(byte) = tail
            .get(..2)
            .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
            .and_then(|hex| std::str::from_utf8(hex).ok())
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
        else {
            return false;
        };
        decoded.push(byte);
        rest = &tail[2..];
    }
    std::str::from_utf8(&decoded).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_wins() {
        let p = parse_query("a=1&a=2&b=3");
        assert_eq!(p.len(), 2);
        assert_eq!(p["a"], "1");
        assert_eq!(p["b"], "3");
    }

    #[test]
    fn malformed_segments_are_dropped() {
        let p = parse_query("a=%zz&b=2&c=%4&d;e=1&&f");
        assert_eq!(p.len(), 2);
        assert_eq!(p["b"], "2");
        assert_eq!(p["f"], "");
    }

    #[test]
    fn non_utf8_escapes_are_dropped() {
        let p = parse_query("a=%FF&b=%C3%A9&c%80=1&d=%E2%82");
        assert_eq!(p.len(), 1);
        assert_eq!(p["b"], "\u{e9}");
        assert_eq!(encode_query(&p), "b=%C3%A9");
    }

    #[test]
    fn escapes_decode() {
        let p = parse_query("q=hello+world&k%20x=%2F");
        assert_eq!(p["q"], "hello world");
        assert_eq!(p["k x"], "/");
    }

    #[test]
    fn encode_sorts_and_escapes() {
        let mut p = HashMap::new();
        p.insert("b".to_string(), "x y".to_string());
        p.insert("a".to_string(), "1&2".to_string());
        assert_eq!(encode_query(&p), "a=1%262&b=x+y");
        assert_eq!(encode_query(&HashMap::new()), "");
    }
}
