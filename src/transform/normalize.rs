//! Field normalization for the custom text format.

/// Normalizes one field value.
///
/// In order: every `\n` is removed, every `\` becomes `\\`, every `"`
/// becomes `\"`, then leading and trailing whitespace is trimmed.
///
/// Fields without `\` or `"` are fixed points. Escaping is applied again on
/// each call, so values containing either character grow on re-application.
pub fn normalize_field(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\n' => {}
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            c => escaped.push(c),
        }
    }

    let trimmed = escaped.trim();
    if trimmed.len() == escaped.len() {
        escaped
    } else {
        trimmed.to_string()
    }
}

/// Reverses the escaping done by [`normalize_field`]: `\"` becomes `"` and
/// `\\` becomes `\`. Any other backslash is kept as-is.
pub fn unescape_field(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next @ ('\\' | '"')) = chars.peek() {
                out.push(next);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}
