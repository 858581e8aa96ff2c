//! Response envelope decoding.
//!
//! Every endpoint wraps its payload as `{"meta": {...}, "data": ...}`. The
//! envelope is decoded first with `data` left as raw JSON, `meta.code` is
//! checked, and only then is `data` decoded into the caller's type using the
//! endpoint's [`DecodeStrategy`].

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{MoiBitError, Result};

/// `meta` block of a response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseMeta {
    pub code: i64,
    #[serde(rename = "requestID", default)]
    pub request_id: String,
    #[serde(default)]
    pub message: String,
}

impl ResponseMeta {
    pub fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Turn a non-200 code into [`MoiBitError::ApiError`].
    pub fn ensure_ok(&self) -> Result<()> {
        if self.is_ok() {
            return Ok(());
        }
        warn!(
            code = self.code,
            request_id = %self.request_id,
            message = %self.message,
            "non-ok response"
        );
        Err(MoiBitError::ApiError {
            code: self.code,
            message: self.message.clone(),
        })
    }
}

/// Envelope with the payload kept undecoded.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvelope {
    pub meta: ResponseMeta,
    #[serde(default)]
    pub data: Value,
}

impl RawEnvelope {
    pub(crate) fn parse(status: u16, body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|source| MoiBitError::DecodeError {
            stage: DecodeStage::Envelope,
            status,
            source,
        })
    }
}

/// How the `data` field of an envelope is turned into a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    /// `data` holds the payload as-is.
    Direct,
    /// `data` is an array of strings, each the JSON text of an array.
    /// The decoded arrays are concatenated in order.
    StringifiedArray,
}

/// Decode step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// The `{meta, data}` wrapper
    Envelope,
    /// `data` as an array of strings
    EncodedArray,
    /// The JSON text at this index of the encoded array
    EncodedElement(usize),
    /// `data` into the target type
    Payload,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeStage::Envelope => f.write_str("envelope"),
            DecodeStage::EncodedArray => f.write_str("encoded data array"),
            DecodeStage::EncodedElement(i) => write!(f, "encoded data element {}", i),
            DecodeStage::Payload => f.write_str("data"),
        }
    }
}

/// Decode a full response body into `T`.
pub fn decode_response<T: DeserializeOwned>(
    strategy: DecodeStrategy,
    status: u16,
    body: &[u8],
) -> Result<T> {
    let envelope = RawEnvelope::parse(status, body)?;
    envelope.meta.ensure_ok()?;
    decode_data(strategy, status, envelope.data)
}

/// Decode the `data` field of an envelope into `T`.
pub fn decode_data<T: DeserializeOwned>(
    strategy: DecodeStrategy,
    status: u16,
    data: Value,
) -> Result<T> {
    let data = match strategy {
        DecodeStrategy::Direct => data,
        DecodeStrategy::StringifiedArray => Value::Array(flatten_stringified(status, data)?),
    };

    serde_json::from_value(data).map_err(|source| MoiBitError::DecodeError {
        stage: DecodeStage::Payload,
        status,
        source,
    })
}

fn flatten_stringified(status: u16, data: Value) -> Result<Vec<Value>> {
    let encoded: Vec<String> =
        serde_json::from_value(data).map_err(|source| MoiBitError::DecodeError {
            stage: DecodeStage::EncodedArray,
            status,
            source,
        })?;

    let mut items = Vec::new();
    for (i, text) in encoded.iter().enumerate() {
        let decoded: Vec<Value> =
            serde_json::from_str(text).map_err(|source| MoiBitError::DecodeError {
                stage: DecodeStage::EncodedElement(i),
                status,
                source,
            })?;
        items.extend(decoded);
    }

    debug!(
        chunks = encoded.len(),
        items = items.len(),
        "flattened stringified data"
    );
    Ok(items)
}
