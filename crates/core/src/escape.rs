//! Plain-text escaping for the `text` content format.

/// Replaces the five HTML-significant characters with entities.
///
/// | Char | Entity   |
/// |------|----------|
/// | `&`  | `&amp;`  |
/// | `<`  | `&lt;`   |
/// | `>`  | `&gt;`   |
/// | `"`  | `&quot;` |
/// | `'`  | `&#39;`  |
///
/// Input without any of these characters is returned as-is.
pub fn escape_html(text: &str) -> String {
    let Some(first) = text.find(|ch: char| entity(ch).is_some()) else {
        return text.to_owned();
    };

    let (clean, rest) = text.split_at(first);
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    escaped.push_str(clean);
    for ch in rest.chars() {
        match entity(ch) {
            Some(replacement) => escaped.push_str(replacement),
            None => escaped.push(ch),
        }
    }
    escaped
}

fn entity(ch: char) -> Option<&'static str> {
    Some(match ch {
        '&' => "&amp;",
        '<' => "&lt;",
        '>' => "&gt;",
        '"' => "&quot;",
        '\'' => "&#39;",
        _ => return None,
    })
}

/// Escapes `text` and turns every `\n` into `<br>`.
pub fn text_to_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    escape_html(text).replace('\n', "<br>")
}
