use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Authoring format declared for a piece of FAQ content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    #[default]
    Html,
    Markdown,
    Text,
}

/// Returned by [`ContentFormat::from_str`] for anything other than
/// `html`, `markdown` or `text`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized content format `{0}`")]
pub struct UnknownFormat(pub String);

impl ContentFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentFormat::Html => "html",
            ContentFormat::Markdown => "markdown",
            ContentFormat::Text => "text",
        }
    }

    /// Parses a format name coming from the widget settings.
    ///
    /// Unknown values fall back to [`ContentFormat::Html`] so the content
    /// still goes through the sanitizer.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: UnknownFormat| {
            tracing::warn!(format = %err.0, "unknown content format, treating as html");
            ContentFormat::Html
        })
    }
}

impl FromStr for ContentFormat {
    type Err = UnknownFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "html" => Ok(ContentFormat::Html),
            "markdown" => Ok(ContentFormat::Markdown),
            "text" => Ok(ContentFormat::Text),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
