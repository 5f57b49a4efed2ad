use std::borrow::Cow;

/// Escape character data for use between tags.
pub fn escape_text(s: &str) -> Cow<str> {
    escape(s, |ch| match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

/// Escape an attribute value for use inside double quotes. Whitespace other than spaces is
/// escaped too, since a parser would normalize it to spaces.
pub fn escape_attribute(s: &str) -> Cow<str> {
    escape(s, |ch| match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '"' => Some("&quot;"),
        '\n' => Some("&#10;"),
        '\r' => Some("&#13;"),
        '\t' => Some("&#9;"),
        _ => None,
    })
}

fn escape(s: &str, replacement: impl Fn(char) -> Option<&'static str>) -> Cow<str> {
    let first = match s.char_indices().find(|(_, ch)| replacement(*ch).is_some()) {
        None => return Cow::Borrowed(s),
        Some((i, _)) => i,
    };

    let mut escaped = String::with_capacity(s.len() + 8);
    escaped.push_str(&s[..first]);
    for ch in s[first..].chars() {
        match replacement(ch) {
            Some(rep) => escaped.push_str(rep),
            None => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
