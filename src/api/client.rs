//! MOIBit API client with request/response handling.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::endpoint::Endpoint;
use super::envelope::{RawEnvelope, decode_response};
use crate::error::{MoiBitError, Result};
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Identity material attached to every authenticated request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub nonce: String,
    pub signature: String,
    pub developer_key: String,
    pub network_id: String,
    pub app_id: String,
}

impl Credentials {
    /// Headers required by every authenticated endpoint.
    pub fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("nonce".to_string(), self.nonce.clone()),
            ("signature".to_string(), self.signature.clone()),
            ("developerKey".to_string(), self.developer_key.clone()),
            ("networkID".to_string(), self.network_id.clone()),
            ("appID".to_string(), self.app_id.clone()),
        ]
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("developer_key", &self.developer_key)
            .field("network_id", &self.network_id)
            .field("app_id", &self.app_id)
            .finish_non_exhaustive()
    }
}

/// MOIBit API client.
///
/// Builds requests for an [`Endpoint`], signs them with the session
/// credentials and decodes the response envelope.
#[derive(Debug)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    credentials: Credentials,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            credentials,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST `body` as JSON and decode the envelope's `data` into `R`.
    pub async fn request<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.send_json(endpoint, body).await?;
        decode_response(endpoint.decode_strategy(), response.status, &response.body)
    }

    /// GET with query parameters and decode the envelope's `data` into `R`.
    pub async fn get<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, &str)],
    ) -> Result<R> {
        let url = if query.is_empty() {
            endpoint.url(&self.base_url)
        } else {
            reqwest::Url::parse_with_params(&endpoint.url(&self.base_url), query)
                .map_err(|e| MoiBitError::InvalidUrl(e.to_string()))?
                .to_string()
        };

        let response = self.dispatch(endpoint, url, None).await?;
        decode_response(endpoint.decode_strategy(), response.status, &response.body)
    }

    /// POST `body` as JSON and return the raw response body.
    ///
    /// A non-200 HTTP status is reported as [`MoiBitError::ApiError`] when the
    /// body is an envelope carrying an error, else as
    /// [`MoiBitError::HttpError`].
    pub async fn request_raw<B>(&self, endpoint: Endpoint, body: &B) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send_json(endpoint, body).await?;
        if response.is_ok() {
            return Ok(response.body);
        }

        if let Ok(envelope) = RawEnvelope::parse(response.status, &response.body) {
            envelope.meta.ensure_ok()?;
        }
        Err(MoiBitError::HttpError(response.status))
    }

    async fn send_json<B>(&self, endpoint: Endpoint, body: &B) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        self.dispatch(endpoint, endpoint.url(&self.base_url), Some(body))
            .await
    }

    async fn dispatch(
        &self,
        endpoint: Endpoint,
        url: String,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse> {
        let mut headers = self.credentials.headers();
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        debug!(
            %endpoint,
            method = %endpoint.method(),
            %url,
            body_len = body.as_ref().map_or(0, Vec::len),
            "api request"
        );

        let response = self
            .transport
            .send(HttpRequest {
                method: endpoint.method(),
                url,
                headers,
                body,
            })
            .await?;

        debug!(
            %endpoint,
            status = response.status,
            bytes = response.body.len(),
            "api response"
        );
        Ok(response)
    }
}
