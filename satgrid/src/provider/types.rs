//! Provider types

use thiserror::Error;

/// HTTP status that marks a successful tile fetch.
pub const STATUS_OK: u16 = 200;

/// Errors that can occur while talking to a tile server.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),

    /// The request never produced a complete response
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
}

/// Outcome of an HTTP GET that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
    /// Final URL after redirects
    pub url: String,
}

impl HttpResponse {
    /// Only `200 OK` counts as a usable tile; other 2xx codes do not.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_is_ok() {
        let mut response = HttpResponse {
            status: 200,
            body: vec![1],
            url: "http://x".to_string(),
        };
        assert!(response.is_ok());

        response.status = 204;
        assert!(!response.is_ok());
        response.status = 404;
        assert!(!response.is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::Transport {
            url: "http://x/1".to_string(),
            reason: "timed out".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("http://x/1"));
        assert!(msg.contains("timed out"));
    }
}
