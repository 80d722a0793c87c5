//! Browser boundary errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("no window available")]
    NoWindow,

    #[error("animation frame request failed: {0}")]
    Request(String),
}

impl From<JsValue> for FrameError {
    fn from(value: JsValue) -> Self {
        FrameError::Request(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FrameError::NoWindow.to_string(), "no window available");
        assert_eq!(
            FrameError::Request("denied".to_string()).to_string(),
            "animation frame request failed: denied"
        );
    }
}
