//! Signing-stable forms of request bodies and URLs.

use crate::error::AuthError;

/// Strip every Unicode whitespace character from a serialized body.
///
/// Whitespace inside JSON string values is removed as well; the server
/// computes its digest the same way, so this must not be narrowed to
/// insignificant whitespace only.
pub fn canonicalize_body(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Rebuild a URL with its query parameters sorted by key.
///
/// Values of a repeated key keep their original relative order. The path
/// is percent-escaped the way it travels on the wire (existing `%XX`
/// escapes are kept); the fragment is carried through unchanged.
///
/// # Errors
/// Returns `AuthError::MalformedUrl` on control characters or invalid
/// percent escapes.
pub fn canonicalize_url(url: &str) -> Result<String, AuthError> {
    validate(url)?;

    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (url, None),
    };

    let (path, raw_query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    };

    let mut canonical = String::with_capacity(url.len());
    canonical.push_str(&escape_path(path));

    match raw_query {
        Some("") => canonical.push('?'),
        Some(query) => {
            let sorted = sorted_query(query);
            if !sorted.is_empty() {
                canonical.push('?');
                canonical.push_str(&sorted);
            }
        }
        None => {}
    }

    if let Some(frag) = fragment {
        canonical.push('#');
        canonical.push_str(frag);
    }

    Ok(canonical)
}

fn validate(url: &str) -> Result<(), AuthError> {
    let bytes = url.as_bytes();

    if let Some(pos) = bytes.iter().position(|b| b.is_ascii_control()) {
        return Err(AuthError::MalformedUrl(format!(
            "control character at byte {pos}"
        )));
    }

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                return Err(AuthError::MalformedUrl(format!(
                    "invalid percent escape {:?}",
                    String::from_utf8_lossy(&bytes[i..end])
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(())
}

/// Escape every byte that is not allowed literally in a URL path.
///
/// Unreserved characters, sub-delimiters, `:`, `@`, `/`, `[`, `]` and
/// already validated `%XX` escapes are kept.
fn escape_path(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    let mut buf = [0u8; 4];

    for c in path.chars() {
        if is_path_char(c) {
            escaped.push(c);
        } else {
            escaped.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }

    escaped
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '_' | '.' | '~' | '%' | '/' | ':' | '@' | '!' | '$' | '&' | '\''
                | '(' | ')' | '*' | '+' | ',' | ';' | '=' | '[' | ']'
        )
}

fn sorted_query(query: &str) -> String {
    let mut pairs: Vec<(Vec<u8>, Vec<u8>)> = query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect();

    // Stable: values of one key stay in input order.
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn decode_component(raw: &str) -> Vec<u8> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode_binary(spaced.as_bytes()).into_owned()
}

fn encode_component(raw: &[u8]) -> String {
    // Query escaping: space becomes '+', a literal '+' is already "%2B".
    urlencoding::encode_binary(raw).replace("%20", "+")
}
