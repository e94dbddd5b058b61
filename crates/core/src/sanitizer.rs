//! Allow-list sanitizer for FAQ answers.
//!
//! Wraps [`ammonia`] with a fixed configuration: inline formatting, lists,
//! code, the table family, optional media and generic containers. Headings are
//! left out so an answer cannot compete with the accordion's own titles.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use ammonia::{Builder, UrlRelative};
use regex::Regex;

use crate::error::{ConversionError, guard_engine, recover_escaped};

const ALLOWED_TAGS: &[&str] = &[
    // text
    "p", "br", "strong", "em", "u", "s", "del", "b", "i", "a", "blockquote",
    // lists
    "ul", "ol", "li",
    // code
    "code", "pre", "hr",
    // tables
    "table", "caption", "thead", "tbody", "tfoot", "tr", "th", "td", "col", "colgroup",
    // media
    "img", "video", "source",
    // containers
    "div", "span", "figure", "figcaption",
];

const ALLOWED_ATTRIBUTES: &[&str] = &[
    "href", "title", "target", "rel", "src", "alt", "width", "height",
    "class", "id", "style",
    "rowspan", "colspan", "scope", "headers",
    "controls", "autoplay", "loop", "muted", "poster",
    "role", "aria-label",
];

const ALLOWED_URI_SCHEMES: &[&str] = &[
    "http", "https", "mailto", "tel", "callto", "sms", "cid", "xmpp", "data",
];

const URL_ATTRIBUTES: &[&str] = &["href", "src", "poster", "cite"];

/// `(element, attribute)` pairs that may carry a `data:image/` URI.
const IMAGE_DATA_SLOTS: &[(&str, &str)] =
    &[("img", "src"), ("source", "src"), ("video", "poster")];

/// Scheme-qualified URIs must use an allowed scheme; anything without a
/// scheme-like prefix (relative paths, fragments, queries) passes.
const ALLOWED_URI_PATTERN: &str =
    r"(?i)^(?:(?:https?|mailto|tel|callto|sms|cid|xmpp):|[^a-z]|[a-z+.\-]+(?:[^a-z+.\-:]|$))";

static FAQ_CONFIG: LazyLock<SanitizeConfig> = LazyLock::new(SanitizeConfig::faq);

/// Allow-lists handed to the sanitizer engine on every call.
#[derive(Debug, Clone)]
pub struct SanitizeConfig {
    pub allowed_tags: HashSet<&'static str>,
    pub allowed_attributes: HashSet<&'static str>,
    pub allow_data_attributes: bool,
    pub allowed_uri_schemes: HashSet<&'static str>,
    pub allowed_uri: Regex,
}

impl SanitizeConfig {
    /// The fixed FAQ configuration.
    pub fn faq() -> Self {
        Self {
            allowed_tags: ALLOWED_TAGS.iter().copied().collect(),
            allowed_attributes: ALLOWED_ATTRIBUTES.iter().copied().collect(),
            allow_data_attributes: false,
            allowed_uri_schemes: ALLOWED_URI_SCHEMES.iter().copied().collect(),
            allowed_uri: Regex::new(ALLOWED_URI_PATTERN).expect("uri allow-list pattern is valid"),
        }
    }

    /// Whether `value` may appear in a URL-bearing attribute.
    ///
    /// `data:` is refused here; only [`Self::allows_uri_on`] lets inline
    /// images through.
    pub fn allows_uri(&self, value: &str) -> bool {
        self.allowed_uri.is_match(&compact_uri(value))
    }

    /// Like [`Self::allows_uri`], but accepts `data:image/` on image sources.
    pub fn allows_uri_on(&self, element: &str, attribute: &str, value: &str) -> bool {
        let compact = compact_uri(value);
        if !has_prefix_ignore_case(&compact, "data:") {
            return self.allowed_uri.is_match(&compact);
        }

        has_prefix_ignore_case(&compact, "data:image/")
            && IMAGE_DATA_SLOTS.contains(&(element, attribute))
    }

    fn builder(&'static self) -> Builder<'static> {
        let mut builder = Builder::default();
        builder
            .tags(self.allowed_tags.clone())
            .tag_attributes(HashMap::new())
            .generic_attributes(self.allowed_attributes.clone())
            .url_schemes(self.allowed_uri_schemes.clone())
            .url_relative(UrlRelative::PassThrough)
            .link_rel(None)
            .strip_comments(true)
            .attribute_filter(move |element, attribute, value| {
                if URL_ATTRIBUTES.contains(&attribute)
                    && !self.allows_uri_on(element, attribute, value)
                {
                    None
                } else {
                    Some(Cow::Borrowed(value))
                }
            });
        if self.allow_data_attributes {
            builder.generic_attribute_prefixes(HashSet::from(["data-"]));
        }
        builder
    }
}

fn compact_uri(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace() && !ch.is_ascii_control())
        .collect()
}

fn has_prefix_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// The configuration shared by every [`sanitize_html`] call.
pub fn faq_config() -> &'static SanitizeConfig {
    &FAQ_CONFIG
}

/// Strips everything outside the FAQ allow-lists.
///
/// Never fails: if the engine breaks down the input comes back fully
/// escaped instead.
pub fn sanitize_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    sanitize_with(html, faq_config())
}

fn sanitize_with(html: &str, config: &'static SanitizeConfig) -> String {
    recover_escaped(html, try_sanitize(html, config))
}

pub(crate) fn try_sanitize(
    html: &str,
    config: &'static SanitizeConfig,
) -> Result<String, ConversionError> {
    guard_engine("sanitizer", || Ok(config.builder().clean(html).to_string()))
}
