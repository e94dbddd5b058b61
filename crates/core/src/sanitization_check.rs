use serde::Serialize;

use crate::format::ContentFormat;
use crate::sanitizer::{faq_config, try_sanitize};

/// Whether sanitizing would visibly change the author's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizationCheckResult {
    pub modified: bool,
    pub original_html: String,
    pub sanitized_html: String,
}

/// Compares `content` with its sanitized form, ignoring whitespace runs.
///
/// Markdown is compared as raw source, not rendered first, so this only
/// catches html written directly into the markdown.
pub fn check_sanitization(content: &str, format: ContentFormat) -> SanitizationCheckResult {
    if content.is_empty() || format == ContentFormat::Text {
        return SanitizationCheckResult::default();
    }

    let original_html = content.to_string();
    match try_sanitize(&original_html, faq_config()) {
        Ok(sanitized_html) => SanitizationCheckResult {
            modified: normalize_whitespace(&original_html) != normalize_whitespace(&sanitized_html),
            original_html,
            sanitized_html,
        },
        Err(error) => {
            tracing::error!(%error, "sanitization check failed, reporting content as unmodified");
            SanitizationCheckResult {
                modified: false,
                original_html,
                sanitized_html: String::new(),
            }
        }
    }
}

/// [`check_sanitization`] for a raw format name; unknown names are checked
/// as html.
pub fn check_sanitization_str(content: &str, format: &str) -> SanitizationCheckResult {
    check_sanitization(content, ContentFormat::parse_lenient(format))
}

fn normalize_whitespace(html: &str) -> String {
    html.split_whitespace().collect::<Vec<_>>().join(" ")
}
