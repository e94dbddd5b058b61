use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::escape::escape_html;

/// Failure inside one of the conversion engines.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("failed to write rendered html: {0}")]
    Render(#[from] fmt::Error),
    #[error("{engine} panicked: {message}")]
    EnginePanic {
        engine: &'static str,
        message: String,
    },
}

/// Runs an engine call, turning a panic into [`ConversionError::EnginePanic`].
pub(crate) fn guard_engine<T>(
    engine: &'static str,
    call: impl FnOnce() -> Result<T, ConversionError>,
) -> Result<T, ConversionError> {
    panic::catch_unwind(AssertUnwindSafe(call)).unwrap_or_else(|payload| {
        Err(ConversionError::EnginePanic {
            engine,
            message: panic_message(payload.as_ref()),
        })
    })
}

/// Returns the converted html, or the escaped `source` when conversion failed.
pub(crate) fn recover_escaped(source: &str, result: Result<String, ConversionError>) -> String {
    result.unwrap_or_else(|error| {
        tracing::error!(%error, "content conversion failed, falling back to escaped text");
        escape_html(source)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
