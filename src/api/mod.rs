//! API Client
//!
//! Frontend bindings to the dares REST API, organized by concern.

mod dare;
mod http;

use reqwest::Url;

use crate::error::TransportError;

// Re-export all public items
pub use dare::*;
pub use http::*;

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests on behalf of [`DareClient`].
///
/// Implementations only move bytes; status checks and body validation
/// happen in the client.
pub trait Transport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;

    async fn post_form(
        &self,
        url: &Url,
        form: &[(&'static str, String)],
    ) -> Result<HttpResponse, TransportError>;
}
