//! Tile server access.
//!
//! The loader only needs a blocking GET that reports the status code, the
//! body and the final URL. [`HttpClient`] captures that capability so tests
//! can inject a mock; [`ReqwestClient`] is the production implementation.

mod http;
mod types;

pub use http::{HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use types::{HttpResponse, ProviderError, STATUS_OK};

#[cfg(test)]
pub use http::tests::MockHttpClient;
