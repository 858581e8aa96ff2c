//! File operations.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::session::Session;
use crate::api::Endpoint;
use crate::error::Result;
use crate::fs::{FileDescriptor, FilePath, FileVersionDescriptor, RemoveOptions, WriteOptions};
use crate::http::Transport;

#[derive(Serialize)]
struct ReadFileRequest {
    #[serde(rename = "fileName")]
    file_name: String,
    version: u32,
}

#[derive(Serialize)]
struct PathRequest {
    path: String,
}

impl<T: Transport> Session<T> {
    /// Read a version of the file at `path`.
    ///
    /// Returns the raw file content. Version `0` reads the latest version.
    /// Only the HTTP status is checked on success: a 200 body is returned
    /// as-is, even if it happens to look like an error envelope.
    pub async fn read_file(&self, path: &FilePath, version: u32) -> Result<Vec<u8>> {
        path.require_file()?;

        let request = ReadFileRequest {
            file_name: path.path(),
            version,
        };
        self.api.request_raw(Endpoint::ReadFile, &request).await
    }

    /// Write `data` to the file at `path`.
    ///
    /// Returns the descriptors of the file after the write.
    ///
    /// # Example
    /// ```no_run
    /// use moibit::{FilePath, Session, SessionConfig, WriteOptions};
    ///
    /// # async fn example() -> moibit::Result<()> {
    /// let session = Session::connect("0xsignature", "nonce", SessionConfig::default()).await?;
    /// let path = FilePath::new(["appdata/users", "userdata.json"])?;
    /// let written = session
    ///     .write_file(br#"{"name":"alice"}"#, &path, WriteOptions::new().keep_previous())
    ///     .await?;
    /// println!("hash: {}", written[0].hash);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn write_file(
        &self,
        data: impl AsRef<[u8]>,
        path: &FilePath,
        options: WriteOptions,
    ) -> Result<Vec<FileDescriptor>> {
        path.require_file()?;
        let text = std::str::from_utf8(data.as_ref())?;

        let request = options.to_request(text, path.path());
        let files: Vec<FileDescriptor> = self.api.request(Endpoint::WriteFile, &request).await?;
        debug!(path = %path, descriptors = files.len(), "file written");
        Ok(files)
    }

    /// Remove, or with [`RemoveOptions::restore`] restore, a version of the
    /// file or directory at `path`.
    pub async fn remove_file(
        &self,
        path: &FilePath,
        version: u32,
        options: RemoveOptions,
    ) -> Result<()> {
        if options.is_directory() {
            path.require_directory()?;
        }

        let request = options.to_request(path.path(), version);
        let _: Value = self.api.request(Endpoint::RemoveFile, &request).await?;
        Ok(())
    }

    /// List the contents of the directory at `path`.
    pub async fn list_files(&self, path: &FilePath) -> Result<Vec<FileDescriptor>> {
        path.require_directory()?;

        let request = PathRequest { path: path.path() };
        self.api.request(Endpoint::ListFiles, &request).await
    }

    /// Status of the file or directory at `path`.
    ///
    /// A missing file is not an error: the returned descriptor reports
    /// `exists() == false`.
    pub async fn file_status(&self, path: &FilePath) -> Result<FileDescriptor> {
        let request = PathRequest { path: path.path() };
        self.api.request(Endpoint::FileStatus, &request).await
    }

    /// Version history of the file at `path`, in the order the service
    /// returns it.
    pub async fn file_versions(&self, path: &FilePath) -> Result<Vec<FileVersionDescriptor>> {
        let request = PathRequest { path: path.path() };
        self.api.request(Endpoint::FileVersions, &request).await
    }

    /// Create the directory at `path`.
    ///
    /// Depending on server policy this may fail if the directory exists.
    pub async fn make_dir(&self, path: &FilePath) -> Result<()> {
        path.require_directory()?;

        let path = path.path();
        let _: Value = self
            .api
            .get(Endpoint::MakeDir, &[("path", path.as_str())])
            .await?;
        Ok(())
    }
}
