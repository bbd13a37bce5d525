//! `fetch`-backed transport for the timeline API.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: every request fails with [`UNAVAILABLE`], since these
//! calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx answers are returned as responses; the typed calls in
//! `timeline::api` turn them into `ApiError::Status`. Only a failed exchange
//! is an error here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use timeline::{ApiError, ApiRequest, ApiResponse, Transport};

pub const UNAVAILABLE: &str = "not available outside the browser";

/// Stateless transport over the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(any(test, feature = "csr"))]
fn transport_error(error: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(error.to_string())
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use timeline::Method;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            let builder = match &request.authorization {
                Some(token) => builder.header("Authorization", token),
                None => builder,
            };
            let prepared = match &request.body {
                Some(body) => builder.json(body).map_err(transport_error)?,
                None => builder.build().map_err(transport_error)?,
            };
            let resp = prepared.send().await.map_err(transport_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport_error)?;
            Ok(ApiResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Transport(UNAVAILABLE.to_owned()))
        }
    }
}
