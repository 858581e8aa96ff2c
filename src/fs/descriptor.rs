//! Server-side file metadata returned by the file endpoints.
//!
//! Fields the server omits or sends as `null` decode to their defaults, so a
//! single sparse entry never fails a whole listing.

use serde::{Deserialize, Deserializer};

/// Status of a file or directory on MOIBit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileDescriptor {
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable: bool,

    /// Content hash (empty when the file does not exist)
    #[serde(deserialize_with = "null_as_default")]
    pub hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
    /// Number of replicas kept on the network
    #[serde(deserialize_with = "null_as_default")]
    pub replication: i64,
    /// File size in bytes
    #[serde(rename = "filesize", deserialize_with = "null_as_default")]
    pub file_size: u64,
    /// Reference to the key the content was encrypted with
    #[serde(rename = "encryptionKey", deserialize_with = "null_as_default")]
    pub encryption_key: String,
    #[serde(rename = "lastUpdated", deserialize_with = "null_as_default")]
    pub last_updated: String,

    #[serde(rename = "isDir", deserialize_with = "null_as_default")]
    pub is_directory: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub directory: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    /// Address of the node holding the content
    #[serde(rename = "nodeAddress", deserialize_with = "null_as_default")]
    pub node_address: String,
}

impl FileDescriptor {
    /// Whether the described file exists.
    ///
    /// Directories always exist. Files exist when they carry a content hash;
    /// the status endpoint reports missing files as an empty descriptor.
    pub fn exists(&self) -> bool {
        self.is_directory || !self.hash.is_empty()
    }
}

/// One entry in the version history of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileVersionDescriptor {
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub hash: String,
    #[serde(rename = "filesize", deserialize_with = "null_as_default")]
    pub file_size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub replication: i64,
    #[serde(rename = "encryptionKey", deserialize_with = "null_as_default")]
    pub encryption_key: String,
    #[serde(rename = "lastUpdated", deserialize_with = "null_as_default")]
    pub last_updated: String,
    #[serde(rename = "nodeAddress", deserialize_with = "null_as_default")]
    pub node_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
