use leptos::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::ApiError, config, session::Session};

/// Characters escaped when an identifier is placed in a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Gateway to the HRMS REST API.
///
/// Every call issues exactly one request and attaches the session's bearer
/// token when there is one. Nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        let builder = self.client.request(method, format!("{}{}", base_url, path));
        self.authorize(builder)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        configure: impl FnOnce(RequestBuilder) -> RequestBuilder,
        fallback: &str,
    ) -> Result<Response, ApiError> {
        let builder = configure(self.request(method.clone(), path).await);
        let response = builder.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, path, e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::error_from(response, fallback).await)
        }
    }

    /// Sends a request and decodes a JSON body. An empty success body reads
    /// as `{}`.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        configure: impl FnOnce(RequestBuilder) -> RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, configure, fallback).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to read response: {}", e)))?;
        let body = if text.trim().is_empty() { "{}" } else { text.as_str() };
        serde_json::from_str(body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    /// Sends a request and returns the raw body.
    pub(crate) async fn call_bytes(
        &self,
        method: Method,
        path: &str,
        configure: impl FnOnce(RequestBuilder) -> RequestBuilder,
        fallback: &str,
    ) -> Result<Vec<u8>, ApiError> {
        let response = self.send(method, path, configure, fallback).await?;
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| ApiError::unknown(format!("Failed to read response: {}", e)))
    }

    async fn error_from(response: Response, fallback: &str) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ApiError::from_body(status, &body, fallback)
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED && self.session.is_authenticated() {
            log::warn!("API rejected the session token, clearing session");
            self.session.clear();
        }
    }
}

/// Client from context, or one bound to the browser session.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| {
        let session = use_context::<Session>().unwrap_or_else(Session::browser);
        ApiClient::new(session)
    })
}
