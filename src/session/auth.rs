//! Developer authentication.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::api::Endpoint;
use crate::api::envelope::RawEnvelope;
use crate::error::{MoiBitError, Result};
use crate::http::{HttpRequest, Transport};

/// Identity returned by the auth endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AuthData {
    /// Public key of the developer
    pub address: String,
}

/// Exchange a signature/nonce pair for the developer's public key.
///
/// Any failure, including a malformed or empty response, is reported as
/// [`MoiBitError::AuthenticationFailed`]; transport errors pass through.
pub(crate) async fn authenticate<T: Transport>(
    transport: &T,
    base_url: &str,
    signature: &str,
    nonce: &str,
) -> Result<AuthData> {
    let endpoint = Endpoint::Auth;
    let url = endpoint.url(base_url);
    debug!(%url, "authenticating");

    let response = transport
        .send(HttpRequest {
            method: endpoint.method(),
            url,
            headers: vec![
                ("nonce".to_string(), nonce.to_string()),
                ("signature".to_string(), signature.to_string()),
            ],
            body: None,
        })
        .await?;

    if !response.is_ok() {
        warn!(status = response.status, "authentication rejected");
        return Err(MoiBitError::AuthenticationFailed(format!(
            "non-ok response [HTTP {}]",
            response.status
        )));
    }

    let envelope = RawEnvelope::parse(response.status, &response.body)
        .map_err(|e| MoiBitError::AuthenticationFailed(e.to_string()))?;
    envelope
        .meta
        .ensure_ok()
        .map_err(|e| MoiBitError::AuthenticationFailed(e.to_string()))?;

    let data: AuthData = serde_json::from_value(envelope.data).map_err(|e| {
        MoiBitError::AuthenticationFailed(format!("response decode failed: {}", e))
    })?;
    if data.address.is_empty() {
        return Err(MoiBitError::AuthenticationFailed(
            "no developer key in response".to_string(),
        ));
    }

    debug!(developer_key = %data.address, "authenticated");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;
    use crate::http::mock::MockTransport;
    use serde_json::json;

    const BASE: &str = "https://api.test/moibit/v1";

    #[tokio::test]
    async fn test_authenticate() {
        let transport = MockTransport::new();
        transport.push_auth("0xdeveloper");

        let data = authenticate(&transport, BASE, "sig", "nonce").await.unwrap();
        assert_eq!(data.address, "0xdeveloper");

        let req = transport.last_request();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "https://api.test/moibit/v1/auth");
        assert_eq!(req.header("signature"), Some("sig"));
        assert_eq!(req.header("nonce"), Some("nonce"));
        assert_eq!(req.header("developerKey"), None);
        assert_eq!(req.headers.len(), 2);
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn test_http_rejection() {
        let transport = MockTransport::new();
        transport.push_response(401, b"unauthorized".to_vec());

        let err = authenticate(&transport, BASE, "sig", "nonce").await.unwrap_err();
        assert!(matches!(err, MoiBitError::AuthenticationFailed(ref m) if m.contains("401")));
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let transport = MockTransport::new();
        transport.push_response(200, b"{not json".to_vec());
        let err = authenticate(&transport, BASE, "sig", "nonce").await.unwrap_err();
        assert!(matches!(err, MoiBitError::AuthenticationFailed(_)));

        transport.push_json(
            200,
            json!({"meta": {"code": 200, "requestID": "r", "message": "OK"}, "data": "nope"}),
        );
        let err = authenticate(&transport, BASE, "sig", "nonce").await.unwrap_err();
        assert!(matches!(err, MoiBitError::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn test_empty_address() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!({"meta": {"code": 200, "requestID": "r", "message": "OK"}, "data": {"address": ""}}),
        );

        let err = authenticate(&transport, BASE, "sig", "nonce").await.unwrap_err();
        assert!(matches!(err, MoiBitError::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn test_non_ok_meta() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!({"meta": {"code": 403, "requestID": "r", "message": "invalid signature"}, "data": null}),
        );

        let err = authenticate(&transport, BASE, "sig", "nonce").await.unwrap_err();
        match err {
            MoiBitError::AuthenticationFailed(msg) => assert!(msg.contains("invalid signature")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_error() {
        let transport = MockTransport::new();
        transport.push_error("dns failure");

        let err = authenticate(&transport, BASE, "sig", "nonce").await.unwrap_err();
        assert!(matches!(err, MoiBitError::TransportError(_)));
    }
}
