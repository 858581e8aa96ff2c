//! Paths, descriptors and request options for the MOIBit file system.

mod descriptor;
mod options;
mod path;

pub use descriptor::{FileDescriptor, FileVersionDescriptor};
pub use options::{EncryptionType, RemoveOptions, WriteOptions};
pub use path::{FilePath, PathError};
