//! Structured error types for tablespan.
//!
//! Span computation itself never fails; these errors come from the
//! surfaces around it (configuration, JSON input, JS value conversion).

/// All errors that can occur outside the span computation.
#[derive(Debug, thiserror::Error)]
pub enum SpanError {
    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown merge direction in a configuration.
    #[error("Invalid merge direction: {0:?} (expected row, column or both)")]
    InvalidDirection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Conversion to or from a JavaScript value failed.
    #[error("JS value conversion: {0}")]
    JsValue(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SpanError>;

impl From<String> for SpanError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for SpanError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for SpanError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::JsValue(e.to_string())
    }
}

impl From<SpanError> for wasm_bindgen::JsValue {
    fn from(e: SpanError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
