//! Application and developer account details.

use serde::Deserialize;
use serde_json::Value;

use super::session::Session;
use crate::api::Endpoint;
use crate::error::{MoiBitError, Result};
use crate::http::Transport;

/// Details of the application a session is configured for.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppDescriptor {
    pub is_active: bool,
    pub is_removed: bool,

    #[serde(rename = "appID")]
    pub app_id: String,
    pub app_name: String,
    pub app_description: String,
    pub end_users: Value,

    #[serde(rename = "networkID")]
    pub network_id: String,
    pub network_name: String,

    pub replication: u32,
    pub can_encrypt: Value,
    pub encryption_type: i32,
    pub custom_key: Value,
    pub recovery_time: i64,
}

/// Summary of an application listed on a developer account.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DevApp {
    pub is_active: bool,
    pub is_removed: bool,

    #[serde(rename = "appID")]
    pub app_id: String,
    pub app_name: String,

    pub replication: u32,
    pub encryption_type: i32,
    pub encryption_algo: String,
    pub recovery_time: i64,

    #[serde(rename = "networkID")]
    pub network_id: String,
    pub network_name: String,
}

/// Details of the authenticated developer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DevDescriptor {
    pub active: bool,
    pub name: String,
    pub email: String,
    pub apps: Vec<DevApp>,

    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "canencrypt")]
    pub can_encrypt: bool,
    #[serde(rename = "canreplicate")]
    pub can_replicate: bool,
    #[serde(rename = "cancreatenetwork")]
    pub can_create_network: bool,

    /// Storage limit of the plan
    #[serde(rename = "maxstorage")]
    pub max_storage: u64,
    pub replication_factor: u32,
    pub plan: i64,
    pub no_of_premium_nodes: u32,
    pub no_of_apps: u32,
    pub credit: i64,
    pub free_trial: bool,
}

impl<T: Transport> Session<T> {
    /// Details of the application this session is configured for.
    ///
    /// Fails with [`MoiBitError::MissingAppId`] when no app ID was set.
    pub async fn app_details(&self) -> Result<AppDescriptor> {
        if self.app_id().is_empty() {
            return Err(MoiBitError::MissingAppId);
        }
        self.api.get(Endpoint::AppDetails, &[]).await
    }

    /// Details of the authenticated developer.
    pub async fn dev_details(&self) -> Result<DevDescriptor> {
        self.api.get(Endpoint::DevDetails, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;
    use crate::http::mock::MockTransport;
    use crate::session::SessionConfig;
    use serde_json::json;

    async fn session(app_id: &str) -> Session<MockTransport> {
        let transport = MockTransport::new();
        transport.push_auth("0xdev");
        let config = SessionConfig::default()
            .with_app_id(app_id)
            .with_base_url("https://api.test/moibit/v1");
        Session::with_transport(transport, "sig", "nonce", config)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_app_details_requires_app_id() {
        let session = session("").await;
        let err = session.app_details().await.unwrap_err();
        assert!(matches!(err, MoiBitError::MissingAppId));
        assert_eq!(session.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_app_details() {
        let session = session("app-1").await;
        session.transport().push_json(
            200,
            json!({
                "meta": {"code": 200, "requestID": "r", "message": "OK"},
                "data": {
                    "isActive": true,
                    "appID": "app-1",
                    "appName": "Sensors",
                    "networkID": "net",
                    "replication": 3,
                    "encryptionType": 1,
                    "endUsers": null
                }
            }),
        );

        let app = session.app_details().await.unwrap();
        assert!(app.is_active);
        assert_eq!(app.app_id, "app-1");
        assert_eq!(app.app_name, "Sensors");
        assert_eq!(app.replication, 3);
        assert_eq!(app.encryption_type, 1);

        let req = session.transport().last_request();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.url, "https://api.test/moibit/v1/appdetails");
    }

    #[tokio::test]
    async fn test_dev_details() {
        let session = session("").await;
        session.transport().push_json(
            200,
            json!({
                "meta": {"code": 200, "requestID": "r", "message": "OK"},
                "data": {
                    "active": true,
                    "name": "Ada",
                    "email": "ada@example.com",
                    "apps": [{"appID": "a1", "appName": "One", "encryptionAlgo": "AES"}],
                    "maxstorage": 1073741824,
                    "canreplicate": true,
                    "noOfApps": 1
                }
            }),
        );

        let dev = session.dev_details().await.unwrap();
        assert_eq!(dev.name, "Ada");
        assert_eq!(dev.apps.len(), 1);
        assert_eq!(dev.apps[0].encryption_algo, "AES");
        assert_eq!(dev.max_storage, 1_073_741_824);
        assert!(dev.can_replicate);
        assert_eq!(dev.no_of_apps, 1);
        assert_eq!(
            session.transport().last_request().url,
            "https://api.test/moibit/v1/devstat"
        );
    }
}
