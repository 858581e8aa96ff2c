//! Option sets for file-mutating requests.

use serde::{Serialize, Serializer};

/// Encryption schemes supported by MOIBit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionType {
    /// Store the file unencrypted
    NoEncryption,
    /// Default encryption scheme of the network
    DefaultNetwork,
    /// Scheme defined for the authenticated developer
    DeveloperKey,
    /// Scheme defined by the key of the end user the file belongs to
    EndUserKey,
    /// Custom scheme defined for the application
    CustomKey,
    /// Modern Encryption Standard
    Mes,
}

impl EncryptionType {
    /// Integer value used on the wire.
    pub fn code(&self) -> i32 {
        match self {
            EncryptionType::NoEncryption => -1,
            EncryptionType::DefaultNetwork => 0,
            EncryptionType::DeveloperKey => 1,
            EncryptionType::EndUserKey => 2,
            EncryptionType::CustomKey => 3,
            EncryptionType::Mes => 4,
        }
    }

    /// Create from the wire value.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(EncryptionType::NoEncryption),
            0 => Some(EncryptionType::DefaultNetwork),
            1 => Some(EncryptionType::DeveloperKey),
            2 => Some(EncryptionType::EndUserKey),
            3 => Some(EncryptionType::CustomKey),
            4 => Some(EncryptionType::Mes),
            _ => None,
        }
    }
}

impl Serialize for EncryptionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

/// Options for [`Session::write_file`](crate::Session::write_file).
///
/// ```
/// use moibit::{EncryptionType, WriteOptions};
///
/// let opts = WriteOptions::new()
///     .keep_previous()
///     .replication(3)
///     .encryption(EncryptionType::DeveloperKey);
/// assert!(opts.creates_folders());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    keep_previous: bool,
    create_folders: bool,
    provenance: bool,
    replication: Option<u32>,
    encryption: Option<EncryptionType>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            keep_previous: false,
            create_folders: true,
            provenance: false,
            replication: None,
            encryption: None,
        }
    }
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the previous version when the file already exists.
    pub fn keep_previous(mut self) -> Self {
        self.keep_previous = true;
        self
    }

    /// Create any missing folders on the path of the file.
    pub fn create_folders(mut self) -> Self {
        self.create_folders = true;
        self
    }

    /// Fail instead of creating missing folders.
    pub fn create_only_file(mut self) -> Self {
        self.create_folders = false;
        self
    }

    /// Record a proof of the file on the provenance network.
    pub fn provenance(mut self) -> Self {
        self.provenance = true;
        self
    }

    /// Number of replicas to keep on the network.
    pub fn replication(mut self, n: u32) -> Self {
        self.replication = Some(n);
        self
    }

    /// Encryption scheme to apply to the file.
    pub fn encryption(mut self, encryption: EncryptionType) -> Self {
        self.encryption = Some(encryption);
        self
    }

    pub fn keeps_previous(&self) -> bool {
        self.keep_previous
    }

    pub fn creates_folders(&self) -> bool {
        self.create_folders
    }

    pub fn is_provenance(&self) -> bool {
        self.provenance
    }

    pub(crate) fn to_request<'a>(&self, text: &'a str, file_name: String) -> WriteFileRequest<'a> {
        WriteFileRequest {
            text,
            file_name,
            keep_previous: self.keep_previous,
            create_folders: self.create_folders,
            is_provenance: self.provenance,
            replication: self.replication,
            encryption: self.encryption,
        }
    }
}

/// Body of the write-file request.
#[derive(Debug, Serialize)]
pub(crate) struct WriteFileRequest<'a> {
    text: &'a str,
    #[serde(rename = "fileName")]
    file_name: String,
    #[serde(rename = "keepPrevious")]
    keep_previous: bool,
    #[serde(rename = "createFolders")]
    create_folders: bool,
    #[serde(rename = "isProvenance")]
    is_provenance: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    replication: Option<u32>,
    #[serde(rename = "encryptionType", skip_serializing_if = "Option::is_none")]
    encryption: Option<EncryptionType>,
}

/// Options for [`Session::remove_file`](crate::Session::remove_file).
///
/// By default the given version of a file is deleted. `directory()` targets a
/// directory instead and `restore()` turns the removal into a restore of the
/// given version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    directory: bool,
    restore: bool,
}

impl RemoveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The target is a directory.
    pub fn directory(mut self) -> Self {
        self.directory = true;
        self
    }

    /// Restore the version instead of deleting it.
    pub fn restore(mut self) -> Self {
        self.restore = true;
        self
    }

    pub fn is_directory(&self) -> bool {
        self.directory
    }

    pub fn is_restore(&self) -> bool {
        self.restore
    }

    pub(crate) fn to_request(&self, path: String, version: u32) -> RemoveFileRequest {
        RemoveFileRequest {
            path,
            version,
            is_directory: self.directory,
            operation: if self.restore { 1 } else { 0 },
        }
    }
}

/// Body of the remove request.
#[derive(Debug, Serialize)]
pub(crate) struct RemoveFileRequest {
    path: String,
    version: u32,
    #[serde(rename = "isdir")]
    is_directory: bool,
    #[serde(rename = "operationType")]
    operation: u8,
}
