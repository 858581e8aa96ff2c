//! Per-session configuration.

/// Network ID of the default MOIBit network.
pub const DEFAULT_NETWORK_ID: &str = "12D3KooWSMAGyrB9TG45AAWaQNJmMdfJpnLQ5e1XM21hkm3FokHk";

/// Base URL of the MOIBit service.
pub const DEFAULT_BASE_URL: &str = "https://kfs.moibit.io/moibit/v1";

/// Overrides applied when a [`Session`](crate::Session) is created.
///
/// ```
/// use moibit::SessionConfig;
///
/// let config = SessionConfig::default().with_app_id("my-app");
/// assert_eq!(config.app_id, "my-app");
/// assert_eq!(config.network_id, moibit::DEFAULT_NETWORK_ID);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Application the requests are made for (empty for none)
    pub app_id: String,
    /// Network the files are stored on
    pub network_id: String,
    /// Service base URL, without a trailing endpoint
    pub base_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            network_id: DEFAULT_NETWORK_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    pub fn with_network_id(mut self, network_id: impl Into<String>) -> Self {
        self.network_id = network_id.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert!(config.app_id.is_empty());
        assert_eq!(config.network_id, DEFAULT_NETWORK_ID);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_overrides() {
        let config = SessionConfig::default()
            .with_app_id("app")
            .with_network_id("net")
            .with_base_url("http://localhost:3000");
        assert_eq!(config.app_id, "app");
        assert_eq!(config.network_id, "net");
        assert_eq!(config.base_url, "http://localhost:3000");
    }
}
