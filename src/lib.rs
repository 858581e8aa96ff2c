//! # moibit
//!
//! Rust client library for the MOIBit decentralised file storage API.
//!
//! ## Features
//!
//! - **Authentication**: exchange a developer signature and nonce for the
//!   developer's public key, once per [`Session`].
//! - **Paths**: [`FilePath`] validates hierarchical file and directory paths
//!   before any request is built.
//! - **File operations**:
//!   - Read and write files, with replication, encryption and versioning options.
//!   - List directories and create them (`make_dir`).
//!   - Query file status and version history.
//!   - Remove or restore file versions and directories.
//! - **Account details**: application and developer descriptors.
//!
//! Every operation is a single request/response exchange. There is no local
//! cache, retry or queueing; timeouts and proxies are configured on the
//! [`HttpClient`] transport, and any type implementing [`Transport`] can be
//! used in its place.
//!
//! ## Example: Basic Usage
//!
//! ```no_run
//! use moibit::{FilePath, Session, SessionConfig, WriteOptions};
//!
//! # async fn example() -> moibit::Result<()> {
//! let config = SessionConfig::default().with_app_id("my-app");
//! let session = Session::connect("0xsignature", "nonce", config).await?;
//!
//! // Write a file, creating any missing folders
//! let path = FilePath::new(["devices/sensor-1", "reading.json"])?;
//! session.write_file(r#"{"temp": 21.5}"#, &path, WriteOptions::new()).await?;
//!
//! // List its directory
//! for file in session.list_files(&path.parent()).await? {
//!     println!("{} ({} bytes)", file.path, file.file_size);
//! }
//!
//! // Read it back
//! let data = session.read_file(&path, 0).await?;
//! println!("{}", String::from_utf8_lossy(&data));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod fs;
pub mod http;
pub mod session;

// Re-export commonly used types
pub use error::{MoiBitError, Result};
pub use fs::{
    EncryptionType, FileDescriptor, FilePath, FileVersionDescriptor, PathError, RemoveOptions,
    WriteOptions,
};
pub use http::{HttpClient, HttpRequest, HttpResponse, Method, Transport};
pub use session::{
    AppDescriptor, DEFAULT_BASE_URL, DEFAULT_NETWORK_ID, DevApp, DevDescriptor, Session,
    SessionConfig,
};
