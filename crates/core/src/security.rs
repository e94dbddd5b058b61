//! Heuristic scan for dangerous constructs in author-supplied html.
//!
//! This only reports; what actually reaches the page is decided by the
//! sanitizer.

use std::sync::OnceLock;

use regex::Regex;

pub const SCRIPT_TAG: &str = "Script tags are not allowed for security reasons";
pub const EVENT_HANDLER: &str =
    "Event handlers (onclick, onload, etc.) are not allowed for security reasons";
pub const JAVASCRIPT_URL: &str = "JavaScript protocol in URLs is not allowed for security reasons";
pub const DATA_URL: &str = "Data URLs are only allowed for images";
pub const IFRAME_TAG: &str = "Iframe tags are not allowed";
pub const OBJECT_EMBED_TAG: &str = "Object and embed tags are not allowed";

fn script_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("valid regex"))
}

/// `on<word>=` starting at a word boundary, so attribute names that merely
/// end in "on" (`condition=`, `description=`) do not count as handlers.
fn event_handler_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bon\w+\s*=").expect("valid regex"))
}

fn iframe_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<iframe\b").expect("valid regex"))
}

fn object_embed_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<(?:object|embed)\b").expect("valid regex"))
}

/// Collects one warning per triggered rule, in rule order.
pub fn scan_security(html: &str) -> Vec<String> {
    let mut warnings = Vec::new();
    if html.is_empty() {
        return warnings;
    }

    let lower = html.to_ascii_lowercase();

    if script_regex().is_match(html) {
        warnings.push(SCRIPT_TAG.to_string());
    }
    if event_handler_regex().is_match(html) {
        warnings.push(EVENT_HANDLER.to_string());
    }
    if lower.contains("javascript:") {
        warnings.push(JAVASCRIPT_URL.to_string());
    }
    if has_non_image_data_url(&lower) {
        warnings.push(DATA_URL.to_string());
    }
    if iframe_regex().is_match(html) {
        warnings.push(IFRAME_TAG.to_string());
    }
    if object_embed_regex().is_match(html) {
        warnings.push(OBJECT_EMBED_TAG.to_string());
    }

    warnings
}

fn has_non_image_data_url(lower: &str) -> bool {
    lower
        .match_indices("data:")
        .any(|(index, prefix)| !lower[index + prefix.len()..].starts_with("image"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn safe_markup_has_no_warnings() {
        let html = r#"<p>See <a href="https://example.com/help" title="Help">help</a>.</p><img src="data:image/png;base64,AAAA" alt="">"#;
        assert_eq!(scan_security(html), Vec::<String>::new());
    }

    #[test]
    fn detects_script_across_lines() {
        let warnings = scan_security("<SCRIPT type=\"text/javascript\">\nalert(1)\n</script>");
        assert_eq!(warnings, vec![SCRIPT_TAG.to_string()]);
    }

    #[test]
    fn detects_event_handlers() {
        assert_eq!(
            scan_security(r#"<div onMouseOver = "x()">hi</div>"#),
            vec![EVENT_HANDLER.to_string()]
        );
    }

    #[test]
    fn attribute_names_ending_in_on_are_not_handlers() {
        assert_eq!(
            scan_security(r#"<span class="description" data-action="x">q</span>"#),
            Vec::<String>::new()
        );
        assert!(scan_security(r#"<faq-item condition="open">q</faq-item>"#).is_empty());
    }

    #[test]
    fn detects_javascript_protocol_in_any_case() {
        assert_eq!(
            scan_security(r#"<a href="JavaScript:alert(1)">x</a>"#),
            vec![JAVASCRIPT_URL.to_string()]
        );
    }

    #[test]
    fn data_urls_only_allowed_for_images() {
        assert_eq!(
            scan_security(r#"<a href="data:text/html;base64,PHNjcmlwdD4=">x</a>"#),
            vec![DATA_URL.to_string()]
        );
        assert!(scan_security(r#"<img src="DATA:image/gif;base64,R0lG">"#).is_empty());
    }

    #[test]
    fn reports_every_triggered_rule_in_order() {
        let html = concat!(
            "<script>x()</script>",
            "<img src=x onerror=alert(1)>",
            "<a href=\"javascript:void(0)\">a</a>",
            "<iframe src=\"data:text/html,hi\"></iframe>",
            "<object data=\"movie.swf\"></object>",
        );
        assert_eq!(
            scan_security(html),
            vec![
                SCRIPT_TAG.to_string(),
                EVENT_HANDLER.to_string(),
                JAVASCRIPT_URL.to_string(),
                DATA_URL.to_string(),
                IFRAME_TAG.to_string(),
                OBJECT_EMBED_TAG.to_string(),
            ]
        );
    }

    #[test]
    fn embed_alone_is_reported() {
        assert_eq!(
            scan_security(r#"<embed src="a.swf">"#),
            vec![OBJECT_EMBED_TAG.to_string()]
        );
    }

    #[test]
    fn empty_input_has_no_warnings() {
        assert!(scan_security("").is_empty());
    }
}
