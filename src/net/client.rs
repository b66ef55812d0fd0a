//! Token-attaching HTTP client for the wallet backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: requests resolve to
//! `ApiError::Unavailable` since the backend is only reached from the browser.
//!
//! DESIGN
//! ======
//! The bearer token is read from the `TokenSource` when each request is
//! prepared, never captured at construction, so a login or logout takes
//! effect on the very next call without rebuilding the client.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` carrying the backend's own
//! message. The client never retries; callers decide what to show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use leptos::prelude::{RwSignal, WithUntracked};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::config::{ClientConfig, join_url};
use crate::state::auth::AuthState;
use crate::state::session::TokenStorage;

/// Anything that can report the current session token.
pub trait TokenSource {
    fn current_token(&self) -> Option<String>;
}

impl<S> TokenSource for RwSignal<AuthState<S>>
where
    S: TokenStorage + Send + Sync + 'static,
{
    fn current_token(&self) -> Option<String> {
        self.try_with_untracked(|auth| auth.token().map(str::to_owned))
            .flatten()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A request with its URL and headers resolved at dispatch time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
}

/// Request payload.
pub enum RequestBody {
    Empty,
    Json(Value),
    #[cfg(feature = "hydrate")]
    Form(web_sys::FormData),
}

/// Status and body text of a completed response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Backend client shared through Leptos context.
#[derive(Clone, Debug)]
pub struct ApiClient<T = RwSignal<AuthState>> {
    base_url: String,
    tokens: T,
}

impl<T: TokenSource> ApiClient<T> {
    pub fn new(config: &ClientConfig, tokens: T) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `Authorization` header value for the token held right now.
    pub fn authorization(&self) -> Option<String> {
        self.tokens.current_token().map(|token| bearer_header(&token))
    }

    /// Resolve URL, query, and credentials for a request.
    pub fn prepare(&self, method: Method, path: &str, query: &[(&str, String)]) -> PreparedRequest {
        PreparedRequest {
            method,
            url: join_url(&self.base_url, path),
            query: query.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect(),
            authorization: self.authorization(),
        }
    }

    /// Dispatch a prepared request and collect the raw response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if no response arrives and
    /// `ApiError::Unavailable` outside the browser.
    pub async fn send(&self, prepared: PreparedRequest, body: RequestBody) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match prepared.method {
                Method::Get => Request::get(&prepared.url),
                Method::Post => Request::post(&prepared.url),
            };
            if !prepared.query.is_empty() {
                builder = builder.query(prepared.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            if let Some(authorization) = &prepared.authorization {
                builder = builder.header("Authorization", authorization);
            }
            let request = match body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(value) => builder.json(&value),
                RequestBody::Form(form) => builder.body(form),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = request.send().await.map_err(|e| {
                leptos::logging::warn!("{} {} failed: {e}", prepared.method.as_str(), prepared.url);
                ApiError::Transport(e.to_string())
            })?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            let raw = RawResponse { status, body: text };
            if !raw.is_success() {
                leptos::logging::warn!("{} {} returned {status}", prepared.method.as_str(), prepared.url);
            }
            Ok(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (prepared, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Propagates transport failures, non-2xx statuses, and decode failures.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<R, ApiError> {
        let raw = self.send(self.prepare(Method::Get, path, query), RequestBody::Empty).await?;
        decode_response(&raw)
    }

    /// `POST` a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Propagates transport failures, non-2xx statuses, and decode failures.
    pub async fn post_json<R: DeserializeOwned>(&self, path: &str, body: Value) -> Result<R, ApiError> {
        let raw = self.send(self.prepare(Method::Post, path, &[]), RequestBody::Json(body)).await?;
        decode_response(&raw)
    }

    /// `POST` a multipart form; the browser sets the boundary header.
    ///
    /// # Errors
    ///
    /// Propagates transport failures, non-2xx statuses, and decode failures.
    #[cfg(feature = "hydrate")]
    pub async fn post_multipart<R: DeserializeOwned>(&self, path: &str, form: web_sys::FormData) -> Result<R, ApiError> {
        let raw = self.send(self.prepare(Method::Post, path, &[]), RequestBody::Form(form)).await?;
        decode_response(&raw)
    }
}

pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Decode a 2xx body as `R`, or convert a failure status into `ApiError`.
///
/// # Errors
///
/// Returns `ApiError::Status` for non-2xx and `ApiError::Decode` when the
/// body does not match `R`.
pub fn decode_response<R: DeserializeOwned>(raw: &RawResponse) -> Result<R, ApiError> {
    if !raw.is_success() {
        return Err(ApiError::from_status(raw.status, &raw.body));
    }
    let body = if raw.body.trim().is_empty() { "{}" } else { raw.body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
