//! Error type for the browser-facing glue.
//!
//! Nothing on the page is allowed to take the page down: callers log a
//! [`LandingError`] and fall back to the static rendering.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from DOM access and asset serialization.
#[derive(Debug, Error)]
pub enum LandingError {
    /// `window` is not reachable (not running inside a browser).
    #[error("no global window available")]
    NoWindow,
    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,
    /// The document has no `<head>` element.
    #[error("document has no <head> element")]
    NoHead,
    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Dom(String),
    /// The web manifest could not be serialized.
    #[error("failed to serialize web manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        LandingError::Dom(message)
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(LandingError::NoHead.to_string(), "document has no <head> element");
        assert_eq!(
            LandingError::Dom("SyntaxError".into()).to_string(),
            "DOM call failed: SyntaxError"
        );
    }

    #[test]
    fn serde_errors_convert() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LandingError = err.into();
        assert!(matches!(err, LandingError::Manifest(_)));
        assert!(err.to_string().starts_with("failed to serialize web manifest"));
    }
}
