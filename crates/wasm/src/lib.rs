//! Browser bindings for the FAQ accordion preview.
//!
//! Every entry point accepts `null`/`undefined` content and treats it as empty.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

const DEFAULT_LOG_FILTER: &str = "warn,faqflow_core=info";

/// Routes `tracing` output to the browser console. Safe to call repeatedly.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(filter: Option<String>) {
    let env_filter = EnvFilter::new(filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("faqflow logging initialized");
    }
}

#[wasm_bindgen(js_name = sanitizeHTML)]
pub fn sanitize_html(html: Option<String>) -> String {
    faqflow_core::sanitize_html(text(&html))
}

/// Security warnings for raw html.
#[wasm_bindgen(js_name = validateHTML)]
pub fn validate_html(html: Option<String>) -> Vec<String> {
    faqflow_core::validate_html(text(&html))
}

/// Syntax warnings for raw html.
#[wasm_bindgen(js_name = validateHTMLSyntax)]
pub fn validate_html_syntax(html: Option<String>) -> Vec<String> {
    faqflow_core::validate_html_syntax(text(&html))
}

#[wasm_bindgen(js_name = markdownToHTML)]
pub fn markdown_to_html(markdown: Option<String>) -> String {
    faqflow_core::markdown_to_html(text(&markdown))
}

#[wasm_bindgen(js_name = escapeHTML)]
pub fn escape_html(value: Option<String>) -> String {
    faqflow_core::escape_html(text(&value))
}

#[wasm_bindgen(js_name = textToHTML)]
pub fn text_to_html(value: Option<String>) -> String {
    faqflow_core::text_to_html(text(&value))
}

/// Renders content for the preview. Unknown formats are handled as html.
#[wasm_bindgen(js_name = processContent)]
pub fn process_content(content: Option<String>, format: &str) -> String {
    faqflow_core::process_content_str(text(&content), format)
}

/// Author-facing warnings. Unknown formats produce none.
#[wasm_bindgen(js_name = getContentWarnings)]
pub fn get_content_warnings(content: Option<String>, format: &str) -> Vec<String> {
    faqflow_core::get_content_warnings_str(text(&content), format)
}

/// Returns `{ modified, originalHtml, sanitizedHtml }`.
#[wasm_bindgen(js_name = checkSanitization)]
pub fn check_sanitization(content: Option<String>, format: &str) -> Result<JsValue, JsError> {
    let result = faqflow_core::check_sanitization_str(text(&content), format);
    serde_wasm_bindgen::to_value(&result).map_err(|err| {
        tracing::error!(error = %err, "failed to serialize sanitization check");
        JsError::new(&format!("checkSanitization: {err}"))
    })
}

#[wasm_bindgen]
pub fn version() -> String {
    faqflow_core::version().to_string()
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
