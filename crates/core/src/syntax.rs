//! Best-effort html well-formedness checks for authoring feedback.
//!
//! Not a parser: no implied end tags, no foster parenting, no namespaces.
//! A missed warning is acceptable, a crash is not.

use std::sync::OnceLock;

use regex::Regex;

/// Longest tag excerpt quoted in a warning before it is cut with `...`.
const EXCERPT_LEN: usize = 50;

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Every `<...>` run. A `<` with no later `>` is plain text, not a tag.
fn tag_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid regex"))
}

fn tag_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?([a-zA-Z][a-zA-Z0-9]*)[^>]*>").expect("valid regex"))
}

fn malformed_attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<[^>]*\s[\w-]+=[^"'\w]"#).expect("valid regex"))
}

/// An opening tag still waiting for its close.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenTag {
    name: String,
    /// Byte offset of the opening `<`.
    position: usize,
}

/// Runs every syntax pass and concatenates their warnings in pass order.
pub fn scan_syntax(html: &str) -> Vec<String> {
    let mut warnings = Vec::new();
    if html.is_empty() {
        return warnings;
    }

    scan_tag_tokens(html, &mut warnings);
    scan_tag_balance(html, &mut warnings);
    scan_malformed_attributes(html, &mut warnings);
    warnings
}

/// Pass 1: quoting and bracket problems inside individual tags.
fn scan_tag_tokens(html: &str, warnings: &mut Vec<String>) {
    for token in tag_token_regex().find_iter(html).map(|m| m.as_str()) {
        if has_unclosed_attribute_quote(token) {
            warnings.push(format!("Unclosed attribute quote in tag: {}", excerpt(token)));
        }
        // Cannot fire with the current token pattern.
        if !token.ends_with('>') {
            warnings.push(format!("Unclosed tag bracket: {}", excerpt(token)));
        }
    }
}

/// Pass 2: stack-based open/close matching.
fn scan_tag_balance(html: &str, warnings: &mut Vec<String>) {
    let mut stack: Vec<OpenTag> = Vec::new();

    for caps in tag_name_regex().captures_iter(html) {
        let Some(whole) = caps.get(0) else { continue };
        let Some(name) = caps.get(1) else { continue };
        let tag = whole.as_str();
        let name = name.as_str().to_ascii_lowercase();

        if tag.starts_with("</") {
            close_tag(&mut stack, &name, warnings);
        } else if tag.ends_with("/>") || VOID_ELEMENTS.contains(&name.as_str()) {
            continue;
        } else {
            stack.push(OpenTag {
                name,
                position: whole.start(),
            });
        }
    }

    for open in stack {
        tracing::trace!(tag = %open.name, position = open.position, "tag left open");
        warnings.push(format!(
            "Unclosed tag: <{0}> is missing closing tag </{0}>",
            open.name
        ));
    }
}

fn close_tag(stack: &mut Vec<OpenTag>, name: &str, warnings: &mut Vec<String>) {
    let Some(top) = stack.last() else {
        warnings.push(format!("Orphaned closing tag: </{name}>"));
        return;
    };

    if top.name == name {
        stack.pop();
        return;
    }

    warnings.push(format!(
        "Mismatched tags: Expected closing tag for <{}>, found </{name}>",
        top.name
    ));

    // A skipped close deeper in the stack: drop just that entry.
    if let Some(depth) = stack.iter().rposition(|open| open.name == name) {
        stack.remove(depth);
    }
}

/// Pass 3: `name=` followed by something that is neither a quote nor a word.
fn scan_malformed_attributes(html: &str, warnings: &mut Vec<String>) {
    for m in malformed_attribute_regex().find_iter(html) {
        warnings.push(format!("Malformed attribute syntax: {}", excerpt(m.as_str())));
    }
}

fn has_unclosed_attribute_quote(token: &str) -> bool {
    let mut chars = token.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '=' {
            continue;
        }
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(quote) = chars.next_if(|c| *c == '"' || *c == '\'') else {
            continue;
        };
        if !chars.by_ref().any(|c| c == quote) {
            return true;
        }
    }

    false
}

fn excerpt(token: &str) -> String {
    match token.char_indices().nth(EXCERPT_LEN) {
        Some((cut, _)) => format!("{}...", &token[..cut]),
        None => token.to_string(),
    }
}
