//! Shared HTTP transport for vendor adapters.
//!
//! Each vendor constructs a `Transport` with its authentication
//! convention (bearer token, named key header, or query-parameter key)
//! and dispatches exactly one request per operation: no retries, no
//! streaming, no timeout. Non-success statuses become
//! [`GenError::Vendor`] with the vendor's own message when one can be
//! extracted; transport failures become [`GenError::Network`].

use crate::{GenError, ProviderId};
use bytes::Bytes;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;

/// A vendor-facing HTTP transport: shared client, prebuilt headers, and
/// an endpoint base.
#[derive(Clone)]
pub struct Transport {
    provider: ProviderId,
    client: Client,
    headers: HeaderMap,
    base: String,
    query_key: Option<(&'static str, String)>,
}

impl Transport {
    /// Transport authenticating with `Authorization: Bearer <key>`.
    pub fn bearer(
        provider: ProviderId,
        client: Client,
        key: &str,
        base: &str,
    ) -> Result<Self, GenError> {
        let mut headers = json_headers();
        headers.insert(
            header::AUTHORIZATION,
            credential_value(provider, &format!("Bearer {key}"))?,
        );
        Ok(Self {
            provider,
            client,
            headers,
            base: base.trim_end_matches('/').to_owned(),
            query_key: None,
        })
    }

    /// Transport authenticating with a named key header (e.g. `x-api-key`).
    pub fn custom_header(
        provider: ProviderId,
        client: Client,
        name: &'static str,
        key: &str,
        base: &str,
    ) -> Result<Self, GenError> {
        let mut headers = json_headers();
        headers.insert(
            HeaderName::from_static(name),
            credential_value(provider, key)?,
        );
        Ok(Self {
            provider,
            client,
            headers,
            base: base.trim_end_matches('/').to_owned(),
            query_key: None,
        })
    }

    /// Transport carrying only the key header, for vendors that take
    /// multipart bodies and reject a JSON content type.
    pub fn key_only(
        provider: ProviderId,
        client: Client,
        name: &'static str,
        key: &str,
        base: &str,
    ) -> Result<Self, GenError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(name),
            credential_value(provider, key)?,
        );
        Ok(Self {
            provider,
            client,
            headers,
            base: base.trim_end_matches('/').to_owned(),
            query_key: None,
        })
    }

    /// Transport authenticating with a query parameter (e.g. `?key=<key>`).
    pub fn query_key(
        provider: ProviderId,
        client: Client,
        name: &'static str,
        key: &str,
        base: &str,
    ) -> Self {
        Self {
            provider,
            client,
            headers: json_headers(),
            base: base.trim_end_matches('/').to_owned(),
            query_key: Some((name, key.to_owned())),
        }
    }

    /// Add a fixed header known at compile time (e.g. `anthropic-version`).
    pub fn with_static_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers
            .insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        self
    }

    /// The vendor this transport talks to.
    pub fn provider(&self) -> ProviderId {
        self.provider
    }

    /// The endpoint base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The prebuilt request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// POST a JSON body to `base + path`.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Reply, GenError> {
        tracing::debug!(
            "request: {}",
            serde_json::to_string(body).unwrap_or_default()
        );
        let req = self.request(Method::POST, path).json(body);
        self.execute(req).await
    }

    /// POST a multipart form to `base + path`.
    pub async fn post_form(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Reply, GenError> {
        let req = self.request(Method::POST, path).multipart(form);
        self.execute(req).await
    }

    /// GET `base + path`.
    pub async fn get(&self, path: &str) -> Result<Reply, GenError> {
        let req = self.request(Method::GET, path);
        self.execute(req).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base, path);
        let req = self.client.request(method, url).headers(self.headers.clone());
        match &self.query_key {
            Some((name, key)) => req.query(&[(*name, key.as_str())]),
            None => req,
        }
    }

    async fn execute(&self, req: RequestBuilder) -> Result<Reply, GenError> {
        let resp = req
            .send()
            .await
            .map_err(|e| GenError::network(self.provider, e))?;
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp
            .bytes()
            .await
            .map_err(|e| GenError::network(self.provider, e))?;
        tracing::debug!("response: {status} ({} bytes)", body.len());

        let reply = Reply {
            provider: self.provider,
            status,
            content_type,
            body,
        };
        if (200..300).contains(&status) {
            Ok(reply)
        } else {
            Err(reply.into_vendor_error())
        }
    }
}

/// A completed vendor response with a success status.
#[derive(Debug, Clone)]
pub struct Reply {
    provider: ProviderId,
    /// HTTP status code.
    pub status: u16,
    /// The response `Content-Type`, when present.
    pub content_type: Option<String>,
    /// The raw response body.
    pub body: Bytes,
}

impl Reply {
    /// Assemble a reply directly (mocked transports and parse tests).
    pub fn new(
        provider: ProviderId,
        status: u16,
        content_type: Option<String>,
        body: impl Into<Bytes>,
    ) -> Self {
        Self {
            provider,
            status,
            content_type,
            body: body.into(),
        }
    }

    /// Deserialize the body, mapping parse failures to a vendor error.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, GenError> {
        serde_json::from_slice(&self.body)
            .map_err(|_| self.malformed("unexpected response shape"))
    }

    /// The body as lossy UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// A vendor error for a response whose shape did not match the
    /// documented contract.
    pub fn malformed(&self, what: &str) -> GenError {
        GenError::vendor(self.provider, self.status, what)
    }

    fn into_vendor_error(self) -> GenError {
        let message = vendor_message(&self.body).unwrap_or_else(|| {
            let text = self.text();
            let text = text.trim();
            if text.is_empty() {
                format!("HTTP {}", self.status)
            } else {
                text.to_owned()
            }
        });
        GenError::vendor(self.provider, self.status, message)
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// A secret that cannot form a header value cannot be sent at all, which
/// is the condition `MissingCredential` encodes.
fn credential_value(provider: ProviderId, value: &str) -> Result<HeaderValue, GenError> {
    HeaderValue::from_str(value).map_err(|_| GenError::MissingCredential(provider))
}

/// Extract the vendor's error message from a failure payload.
///
/// Known shapes: `{"error":{"message":…}}` (Gemini, OpenAI, Claude),
/// `{"error":…}` string or array (Hugging Face),
/// `{"detail":{"message":…}}` (ElevenLabs), `{"message":…}`.
fn vendor_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    if let Some(msg) = value.pointer("/error/message").and_then(Value::as_str) {
        return Some(msg.to_owned());
    }
    match value.get("error") {
        Some(Value::String(msg)) => return Some(msg.clone()),
        Some(Value::Array(list)) => {
            let parts: Vec<&str> = list.iter().filter_map(Value::as_str).collect();
            if !parts.is_empty() {
                return Some(parts.join("; "));
            }
        }
        _ => {}
    }
    if let Some(msg) = value.pointer("/detail/message").and_then(Value::as_str) {
        return Some(msg.to_owned());
    }
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::vendor_message;

    #[test]
    fn extracts_nested_error_message() {
        let body = br#"{"error":{"message":"bad key","type":"auth"}}"#;
        assert_eq!(vendor_message(body).as_deref(), Some("bad key"));
    }

    #[test]
    fn extracts_string_error() {
        let body = br#"{"error":"model is loading"}"#;
        assert_eq!(vendor_message(body).as_deref(), Some("model is loading"));
    }

    #[test]
    fn extracts_error_array() {
        let body = br#"{"error":["too many requests","slow down"]}"#;
        assert_eq!(
            vendor_message(body).as_deref(),
            Some("too many requests; slow down")
        );
    }

    #[test]
    fn extracts_detail_message() {
        let body = br#"{"detail":{"status":"invalid_api_key","message":"invalid key"}}"#;
        assert_eq!(vendor_message(body).as_deref(), Some("invalid key"));
    }

    #[test]
    fn non_json_body_yields_none() {
        assert_eq!(vendor_message(b"Internal Server Error"), None);
    }
}
