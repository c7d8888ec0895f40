//! snake_case → camelCase
//!
//! Callers name attributes in snake_case; the engine exposes camelCase
//! methods. The first word is kept verbatim and every following word gets
//! its first character upper-cased.

/// Convert a snake_case identifier to the camelCase name the engine uses.
///
/// ```text
/// get_vertex_by_label  →  getVertexByLabel
/// unwrap               →  unwrap
/// get_HTTP_value       →  getHTTPValue
/// ```
///
/// Empty words (from doubled, leading or trailing underscores) contribute
/// nothing, so `a__b` becomes `aB` and `a_` becomes `a`.
pub fn to_remote_name(identifier: &str) -> String {
    let mut words = identifier.split('_');

    // split always yields at least one item, possibly empty
    let mut out = String::with_capacity(identifier.len());
    if let Some(first) = words.next() {
        out.push_str(first);
    }

    for word in words {
        push_capitalized(&mut out, word);
    }

    out
}

/// Append `word` with its first character upper-cased; the rest is copied
/// through untouched.
fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(head) = chars.next() {
        out.extend(head.to_uppercase());
        out.push_str(chars.as_str());
    }
}
