//! Format dispatch: one entry point for rendering, one for diagnostics.

use std::sync::OnceLock;

use regex::Regex;

use crate::escape::text_to_html;
use crate::format::ContentFormat;
use crate::markdown::markdown_to_html;
use crate::sanitizer::sanitize_html;
use crate::security::scan_security;
use crate::syntax::scan_syntax;

/// Prefix applied to every warning raised by html embedded in markdown.
pub const EMBEDDED_HTML_PREFIX: &str = "Embedded HTML in markdown: ";

fn embedded_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid regex"))
}

/// Converts `content` into html that is safe to inject into the preview.
pub fn process_content(content: &str, format: ContentFormat) -> String {
    if content.is_empty() {
        return String::new();
    }

    match format {
        ContentFormat::Html => sanitize_html(content),
        ContentFormat::Markdown => markdown_to_html(content),
        ContentFormat::Text => text_to_html(content),
    }
}

/// [`process_content`] for a format name coming straight from widget settings.
pub fn process_content_str(content: &str, format: &str) -> String {
    process_content(content, ContentFormat::parse_lenient(format))
}

/// Author-facing diagnostics for `content`. Read-only: nothing is converted.
pub fn get_content_warnings(content: &str, format: ContentFormat) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }

    let warnings = match format {
        ContentFormat::Html => scan_html(content),
        ContentFormat::Markdown => scan_embedded_html(content),
        ContentFormat::Text => Vec::new(),
    };

    tracing::debug!(%format, count = warnings.len(), "content warnings computed");
    warnings
}

/// [`get_content_warnings`] for a raw format name. Unknown names yield no
/// warnings.
pub fn get_content_warnings_str(content: &str, format: &str) -> Vec<String> {
    match format.parse::<ContentFormat>() {
        Ok(format) => get_content_warnings(content, format),
        Err(_) => Vec::new(),
    }
}

fn scan_html(html: &str) -> Vec<String> {
    let mut warnings = scan_security(html);
    warnings.extend(scan_syntax(html));
    warnings
}

fn scan_embedded_html(markdown: &str) -> Vec<String> {
    let embedded: String = embedded_tag_regex()
        .find_iter(markdown)
        .map(|m| m.as_str())
        .collect();

    if embedded.is_empty() {
        return Vec::new();
    }

    scan_html(&embedded)
        .into_iter()
        .map(|warning| format!("{EMBEDDED_HTML_PREFIX}{warning}"))
        .collect()
}
