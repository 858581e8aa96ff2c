//! MOIBit API client and wire types.

pub mod client;
pub mod endpoint;
pub mod envelope;

pub use client::{ApiClient, Credentials};
pub use endpoint::Endpoint;
pub use envelope::{DecodeStage, DecodeStrategy, ResponseMeta, decode_data, decode_response};
