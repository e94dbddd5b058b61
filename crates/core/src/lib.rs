//! # faqflow-core
//!
//! Content pipeline behind the FAQ accordion's editor preview.
//!
//! Two independent outputs are produced from the same author input:
//!
//! - [`process_content`] turns html, markdown or plain text into html that is
//!   safe to inject into the page.
//! - [`get_content_warnings`] reports security and syntax problems so the
//!   author can fix them before publishing. It never converts anything.
//!
//! Markdown is rendered with `pulldown-cmark` and always passed through the
//! same `ammonia` allow-list as html. Warnings come from regex heuristics, not
//! from a full html parser.

mod content;
mod error;
mod escape;
mod format;
mod markdown;
mod sanitization_check;
mod sanitizer;
mod security;
mod syntax;

pub use crate::content::{
    EMBEDDED_HTML_PREFIX, get_content_warnings, get_content_warnings_str, process_content,
    process_content_str,
};
pub use crate::error::ConversionError;
pub use crate::escape::{escape_html, text_to_html};
pub use crate::format::{ContentFormat, UnknownFormat};
pub use crate::markdown::{RenderOptions, markdown_to_html, markdown_to_html_with};
pub use crate::sanitization_check::{
    SanitizationCheckResult, check_sanitization, check_sanitization_str,
};
pub use crate::sanitizer::{SanitizeConfig, faq_config, sanitize_html};
pub use crate::security::{
    DATA_URL, EVENT_HANDLER, IFRAME_TAG, JAVASCRIPT_URL, OBJECT_EMBED_TAG, SCRIPT_TAG,
    scan_security,
};
pub use crate::syntax::scan_syntax;

/// Security warnings for raw html. Alias of [`scan_security`].
pub fn validate_html(html: &str) -> Vec<String> {
    scan_security(html)
}

/// Syntax warnings for raw html. Alias of [`scan_syntax`].
pub fn validate_html_syntax(html: &str) -> Vec<String> {
    scan_syntax(html)
}

/// Returns the crate version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
