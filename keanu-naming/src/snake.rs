//! camelCase / PascalCase → snake_case
//!
//! Two boundary passes followed by lower-casing:
//!
//! ```text
//! pass 1:  (any)(Capital lowercase+)   →  $1_$2     getHTTPValue → getHTTP_Value
//! pass 2:  (lower|digit)(Capital)      →  $1_$2     getHTTP_Value → get_HTTP_Value
//! lower                                             get_HTTP_Value → get_http_value
//! ```
//!
//! Both passes scan left to right and never overlap matches, so a character
//! consumed by one match cannot start the next one. Pass 2 picks up the
//! boundaries pass 1 skips because of that (`getVertexByLabel` needs both).
//!
//! The mapping is many-to-one: `getHTTPValue` and `getHttpValue` both
//! normalise to `get_http_value`.

/// Convert a camelCase or PascalCase identifier to snake_case.
///
/// Runs of capitals stay together until the last capital that starts a
/// lowercase word: `HTTPRequest → http_request`, `ABC → abc`. A digit
/// followed by a capital is split (`Vertex2D → vertex2_d`); a capital
/// followed by a digit is not (`MD5Sum → md5_sum`).
pub fn to_local_name(identifier: &str) -> String {
    let pass_one = split_before_words(identifier);
    let pass_two = split_after_lower(&pass_one);
    pass_two.to_lowercase()
}

/// Returns `true` when `identifier` is already in its normalised local form.
pub fn is_local_name(identifier: &str) -> bool {
    to_local_name(identifier) == identifier
}

/// Pass 1: `(.)([A-Z][a-z]+)` → `$1_$2`.
fn split_before_words(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != '\n' {
            if let Some(end) = word_end(&chars, i + 1) {
                out.push(c);
                out.push('_');
                out.extend(&chars[i + 1..end]);
                i = end;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }

    out
}

/// If a capital followed by at least one lowercase letter starts at
/// `start`, returns the index just past the lowercase run.
fn word_end(chars: &[char], start: usize) -> Option<usize> {
    match chars.get(start) {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return None,
    }

    let run = chars[start + 1..]
        .iter()
        .take_while(|c| c.is_ascii_lowercase())
        .count();

    (run > 0).then_some(start + 1 + run)
}

/// Pass 2: `([a-z0-9])([A-Z])` → `$1_$2`.
fn split_after_lower(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if let Some(p) = prev {
            if (p.is_ascii_lowercase() || p.is_ascii_digit()) && c.is_ascii_uppercase() {
                out.push('_');
            }
        }
        out.push(c);
        prev = Some(c);
    }

    out
}
