//! Session construction and identity.

use tracing::info;

use super::auth::authenticate;
use super::config::SessionConfig;
use crate::api::{ApiClient, Credentials};
use crate::error::Result;
use crate::http::{HttpClient, Transport};

/// Authenticated MOIBit session.
///
/// A session holds the developer's signature and nonce, the public key the
/// service resolved for them, and the app and network every request is made
/// for. None of this changes after construction, so a session can be shared
/// between tasks as long as its transport can.
#[derive(Debug)]
pub struct Session<T = HttpClient> {
    pub(crate) api: ApiClient<T>,
}

impl Session<HttpClient> {
    /// Authenticate over HTTPS and create a session.
    ///
    /// # Example
    /// ```no_run
    /// use moibit::{Session, SessionConfig};
    ///
    /// # async fn example() -> moibit::Result<()> {
    /// let config = SessionConfig::default().with_app_id("my-app");
    /// let session = Session::connect("0xsignature", "nonce", config).await?;
    /// println!("Developer key: {}", session.developer_key());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(signature: &str, nonce: &str, config: SessionConfig) -> Result<Self> {
        Self::with_transport(HttpClient::new(), signature, nonce, config).await
    }

    /// Like [`Session::connect`], routing all requests through `proxy`.
    pub async fn connect_with_proxy(
        signature: &str,
        nonce: &str,
        config: SessionConfig,
        proxy: &str,
    ) -> Result<Self> {
        Self::with_transport(HttpClient::with_proxy(proxy)?, signature, nonce, config).await
    }
}

impl<T: Transport> Session<T> {
    /// Authenticate through `transport` and create a session.
    ///
    /// Fails with [`MoiBitError::AuthenticationFailed`](crate::MoiBitError::AuthenticationFailed)
    /// if the service does not resolve a developer key; no session is
    /// returned in that case.
    pub async fn with_transport(
        transport: T,
        signature: &str,
        nonce: &str,
        config: SessionConfig,
    ) -> Result<Self> {
        let auth = authenticate(&transport, &config.base_url, signature, nonce).await?;

        let credentials = Credentials {
            nonce: nonce.to_string(),
            signature: signature.to_string(),
            developer_key: auth.address,
            network_id: config.network_id,
            app_id: config.app_id,
        };
        info!(
            developer_key = %credentials.developer_key,
            network_id = %credentials.network_id,
            app_id = %credentials.app_id,
            "session established"
        );

        Ok(Self {
            api: ApiClient::new(transport, config.base_url, credentials),
        })
    }

    /// Public key resolved for the developer during authentication.
    pub fn developer_key(&self) -> &str {
        &self.api.credentials().developer_key
    }

    pub fn app_id(&self) -> &str {
        &self.api.credentials().app_id
    }

    pub fn network_id(&self) -> &str {
        &self.api.credentials().network_id
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    pub fn transport(&self) -> &T {
        self.api.transport()
    }
}
