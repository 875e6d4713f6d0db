//! HTTP transport for the platform API
//!
//! A small blocking client configured once with the base endpoint and a
//! fixed authorization header. It exposes verb-shaped wrappers over a single
//! [`ApiClient::request`] and leaves all status-code interpretation to the
//! resource layer: any completed HTTP exchange is a normal return value,
//! only connection-level failures are fatal.

use std::fmt;
use std::time::Instant;

use log::debug;
use reqwest::Method;
use reqwest::blocking::{Client, Response, multipart};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{Error, Result};

/// Request payload accepted by [`ApiClient::request`].
pub enum Body {
    /// No payload.
    Empty,
    /// JSON document sent with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Multipart form, used for file uploads.
    Multipart(multipart::Form),
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Json(json) => f.debug_tuple("Json").field(json).finish(),
            Self::Multipart(_) => write!(f, "Multipart(..)"),
        }
    }
}

/// Blocking client bound to one base endpoint and one authorization token.
///
/// Constructed once in the entry point and shared by reference between the
/// resource objects; it holds no per-request mutable state.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url`, attaching `Authorization: Basic
    /// <token>` to every request.
    pub fn new(base_url: impl Into<String>, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Basic {token}"))
            .map_err(|_| Error::InvalidToken)?;
        headers.insert(AUTHORIZATION, value);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Issue one request against the configured endpoint.
    ///
    /// Non-2xx statuses are not an error here; the response is handed back
    /// for the caller to interpret. An empty base URL or a connection-level
    /// send failure is fatal: nothing later in the process can succeed.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        body: Body,
        query: &[(&str, String)],
        headers: Option<HeaderMap>,
    ) -> Result<Response> {
        if self.base_url.is_empty() {
            return Err(Error::MissingBaseUrl);
        }

        let url = format!("{}{path}", self.base_url);
        let mut builder = self.client.request(method.clone(), url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(extra) = headers {
            builder = builder.headers(extra);
        }
        builder = match body {
            Body::Empty => builder,
            Body::Json(json) => builder.json(&json),
            Body::Multipart(form) => builder.multipart(form),
        };

        let started = Instant::now();
        let response = builder.send().map_err(|source| Error::Unreachable {
            url: self.base_url.clone(),
            source,
        })?;

        let status = response.status();
        debug!(
            "{}ms | {} {} | {} {}",
            started.elapsed().as_millis(),
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            method,
            response.url()
        );

        Ok(response)
    }

    /// GET `path`.
    pub fn get(&self, path: &str) -> Result<Response> {
        self.request(Method::GET, path, Body::Empty, &[], None)
    }

    /// POST `body` to `path`.
    pub fn post(&self, path: &str, body: Body) -> Result<Response> {
        self.request(Method::POST, path, body, &[], None)
    }

    /// PUT `body` to `path`.
    pub fn put(&self, path: &str, body: Body) -> Result<Response> {
        self.request(Method::PUT, path, body, &[], None)
    }

    /// DELETE `path`.
    pub fn delete(&self, path: &str) -> Result<Response> {
        self.request(Method::DELETE, path, Body::Empty, &[], None)
    }
}
