//! Format emitters: render an already-shaped JSON value to text.

use std::fmt::Debug;

use serde_json::Value;

use crate::error::SerializeResult;

/// Renders a serialized object or list to its wire format.
pub trait FormatSerializer: Debug + Send + Sync {
    /// MIME type of the rendered output.
    fn mimetype(&self) -> &str;

    /// Render `value`.
    fn render(&self, value: &Value) -> SerializeResult<String>;
}

/// JSON emitter, compact by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl JsonFormat {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl FormatSerializer for JsonFormat {
    fn mimetype(&self) -> &str {
        "application/json"
    }

    fn render(&self, value: &Value) -> SerializeResult<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}
