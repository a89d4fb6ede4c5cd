//! Browser Transport
//!
//! `reqwest` transport; on wasm32 it is backed by `window.fetch`.

use reqwest::Url;

use super::{HttpResponse, Transport};
use crate::error::TransportError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = reqwest::Client::new().get(url.clone()).send().await?;
        read(response).await
    }

    async fn post_form(
        &self,
        url: &Url,
        form: &[(&'static str, String)],
    ) -> Result<HttpResponse, TransportError> {
        let response = reqwest::Client::new()
            .post(url.clone())
            .form(form)
            .send()
            .await?;
        read(response).await
    }
}

async fn read(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok(HttpResponse { status, body })
}
