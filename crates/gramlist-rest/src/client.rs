//! Shared HTTP client wrapper.
//!
//! Every network call in the crate flows through [`ApiClient`]: it prefixes
//! the fixed `/api` base path, attaches the bearer header from the injected
//! token store, and intercepts 401 responses before any body parse.

use std::fmt;
use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, instrument, trace, warn};

use gramlist_core::error::{ApiError, AuthError, TransportError};
use gramlist_core::{ApiUrl, Error, Result, TokenStore};

/// HTTP client for the gramlist API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: ApiUrl,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new client for the given API base, reading and writing the
    /// supplied token store.
    pub fn new(base: ApiUrl, store: Arc<dyn TokenStore>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(concat!("gramlist/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .expect("failed to build HTTP client");

        Self { http, base, store }
    }

    /// Returns the token store this client was built with.
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Returns the API base URL.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// GET an endpoint.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!(path, "GET");
        let builder = self.http.get(self.base.endpoint_url(path));
        self.dispatch(builder, path).await
    }

    /// GET an endpoint with a serialized query string.
    #[instrument(skip(self, params), fields(base = %self.base))]
    pub async fn get_query<Q, R>(&self, path: &str, params: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(path, "GET with query");
        trace!("query parameters attached");
        let builder = self.http.get(self.base.endpoint_url(path)).query(params);
        self.dispatch(builder, path).await
    }

    /// POST a JSON body to an endpoint.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(path, "POST");
        let builder = self.http.post(self.base.endpoint_url(path)).json(body);
        self.dispatch(builder, path).await
    }

    /// POST to an endpoint that takes no body.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn post_empty<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!(path, "POST (no body)");
        let builder = self.http.post(self.base.endpoint_url(path));
        self.dispatch(builder, path).await
    }

    /// PUT a JSON body to an endpoint.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(path, "PUT");
        let builder = self.http.put(self.base.endpoint_url(path)).json(body);
        self.dispatch(builder, path).await
    }

    /// DELETE an endpoint.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn delete<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!(path, "DELETE");
        let builder = self.http.delete(self.base.endpoint_url(path));
        self.dispatch(builder, path).await
    }

    /// Attach headers, send, and interpret the response.
    ///
    /// The bearer header is read from the store at dispatch time and omitted
    /// entirely when no token is held.
    async fn dispatch<R>(&self, builder: reqwest::RequestBuilder, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let token = self.store.access_token();
        let builder = match &token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token.as_str())),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| self.transport(path, e))?;

        self.interpret(response, token.is_some(), path).await
    }

    /// Interpret a response: 401 intercept, success parse, or API error.
    async fn interpret<R>(&self, response: reqwest::Response, authed: bool, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        trace!(status = %status, path, "API response");

        // The expiry check runs on the status line, before any body parse,
        // so it fires even when the body is not valid JSON. A 401 on a
        // request that carried no token is a plain credential failure
        // (login, register) and falls through to the API-error path.
        if status == StatusCode::UNAUTHORIZED && authed {
            if let Err(e) = self.store.clear() {
                warn!(error = %e, "failed to clear token store after 401");
            }
            debug!(path, "session expired, token store cleared");
            return Err(AuthError::SessionExpired.into());
        }

        if status.is_success() {
            let body = response.json::<R>().await.map_err(|e| self.transport(path, e))?;
            Ok(body)
        } else {
            Err(Error::Api(Self::parse_error_response(response).await))
        }
    }

    /// Parse a non-2xx body into an [`ApiError`].
    async fn parse_error_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        // The backend answers with either a `message` or an `error` field.
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: Option<String>,
            error: Option<String>,
        }

        match response.json::<ErrorBody>().await {
            Ok(body) => ApiError::new(status, body.message.or(body.error)),
            Err(_) => ApiError::new(status, None),
        }
    }

    /// Classify a request failure and log it with the failing endpoint.
    fn transport(&self, path: &str, err: reqwest::Error) -> Error {
        error!(endpoint = path, error = %err, "request failed");
        let transport = if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        };
        Error::Transport(transport)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base)
            .field("store", &"dyn TokenStore")
            .finish()
    }
}
