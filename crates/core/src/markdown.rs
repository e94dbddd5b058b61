//! Markdown adapter backed by `pulldown-cmark`.
//!
//! Rendering options travel with each call, so concurrent renders with
//! different settings cannot observe each other.

use pulldown_cmark::{Event, Options as CmarkOptions, Parser, html};
use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, guard_engine, recover_escaped};
use crate::sanitizer::{SanitizeConfig, faq_config, try_sanitize};

/// Markdown rendering options. Everything defaults to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Render single newlines as `<br>`.
    #[serde(default = "default_true")]
    pub breaks: bool,
    /// GitHub-flavored tables, strikethrough and task lists.
    #[serde(default = "default_true")]
    pub gfm: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            breaks: true,
            gfm: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl RenderOptions {
    fn to_cmark(self) -> CmarkOptions {
        let mut cmark_options = CmarkOptions::empty();

        if self.gfm {
            cmark_options.insert(CmarkOptions::ENABLE_TABLES);
            cmark_options.insert(CmarkOptions::ENABLE_STRIKETHROUGH);
            cmark_options.insert(CmarkOptions::ENABLE_TASKLISTS);
        }

        cmark_options
    }
}

/// Renders markdown with the default options and sanitizes the result.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with(markdown, RenderOptions::default())
}

/// Renders markdown with explicit options and sanitizes the result.
///
/// On failure the raw markdown source comes back escaped.
pub fn markdown_to_html_with(markdown: &str, options: RenderOptions) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    convert_markdown(markdown, options, faq_config())
}

/// Never returns partial output: any failure yields the escaped source.
fn convert_markdown(
    markdown: &str,
    options: RenderOptions,
    config: &'static SanitizeConfig,
) -> String {
    let result = render_markdown(markdown, options)
        .and_then(|rendered| try_sanitize(&rendered, config));
    recover_escaped(markdown, result)
}

/// Raw, unsanitized render. Callers must sanitize before display.
fn render_markdown(markdown: &str, options: RenderOptions) -> Result<String, ConversionError> {
    guard_engine("markdown renderer", || {
        let parser = Parser::new_ext(markdown, options.to_cmark());
        let events = parser.map(|event| match event {
            Event::SoftBreak if options.breaks => Event::HardBreak,
            other => other,
        });

        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::write_html_fmt(&mut output, events)?;
        Ok(output)
    })
}
