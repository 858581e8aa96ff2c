//! MOIBit service endpoints.

use std::fmt;

use super::envelope::DecodeStrategy;
use crate::http::Method;

/// An endpoint of the MOIBit service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Auth,
    ReadFile,
    WriteFile,
    RemoveFile,
    ListFiles,
    FileStatus,
    FileVersions,
    MakeDir,
    AppDetails,
    DevDetails,
}

impl Endpoint {
    /// Path relative to the service base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Auth => "/auth",
            Endpoint::ReadFile => "/readfile",
            Endpoint::WriteFile => "/writetexttofile",
            Endpoint::RemoveFile => "/remove",
            Endpoint::ListFiles => "/listfiles",
            Endpoint::FileStatus => "/filestatus",
            Endpoint::FileVersions => "/fileversions",
            Endpoint::MakeDir => "/makedir",
            Endpoint::AppDetails => "/appdetails",
            Endpoint::DevDetails => "/devstat",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::MakeDir | Endpoint::AppDetails | Endpoint::DevDetails => Method::Get,
            _ => Method::Post,
        }
    }

    /// How the `data` field of this endpoint's envelope is decoded.
    pub fn decode_strategy(&self) -> DecodeStrategy {
        match self {
            // The write endpoint returns its descriptors as JSON-encoded strings.
            Endpoint::WriteFile => DecodeStrategy::StringifiedArray,
            _ => DecodeStrategy::Direct,
        }
    }

    /// Full URL of this endpoint under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_start_matches('/'))
    }
}
