//! Error types for the browser shell
//!
//! Visitors never see these; they end up in the console through tracing.

use thiserror::Error;

/// Errors raised while talking to the browser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("no window object available")]
    NoWindow,

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("telemetry setup failed: {0}")]
    Telemetry(String),
}

impl UiError {
    /// Wrap a failed DOM call, keeping the JS-side description.
    pub fn dom(context: &str, value: &wasm_bindgen::JsValue) -> Self {
        let detail = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(format!("{context}: {detail}"))
    }
}

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(UiError::NoWindow.to_string(), "no window object available");
        assert_eq!(
            UiError::Telemetry("already set".to_string()).to_string(),
            "telemetry setup failed: already set"
        );
    }

    #[test]
    fn test_error_clone() {
        let error = UiError::Dom("scrollY: denied".to_string());
        assert_eq!(error.clone(), error);
    }
}
