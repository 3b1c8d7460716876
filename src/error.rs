//! Error type for backend API calls

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure modes of a call to the preprocessing/OCR backend. All of them
/// end in the same user-facing path (console diagnostic plus alert); the
/// variants exist so the diagnostic says what actually went wrong.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Network(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let error = ApiError::Network("fetch rejected".to_string());
        assert_eq!(format!("{}", error), "request failed: fetch rejected");
    }

    #[test]
    fn test_error_display_status() {
        let error = ApiError::Status(500);
        assert_eq!(format!("{}", error), "server returned status 500");
    }

    #[test]
    fn test_error_display_decode() {
        let error = ApiError::Decode("missing field `processedImages`".to_string());
        let display = format!("{}", error);
        assert!(display.contains("unexpected response body"));
        assert!(display.contains("processedImages"));
    }
}
