//! Binary payloads embedded in JSON as data URI strings.
//!
//! A JSON string starting with [`BIN_URI_START`] carries base64-encoded bytes.
//! The same form is used when decoding `B` attributes back into plain values.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Binary data URI prefix: `data:application/octet-stream;base64,`
pub const BIN_URI_START: &str = "data:application/octet-stream;base64,";

/// Wraps raw bytes into a binary data URI string.
pub fn wrap_binary(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(BIN_URI_START.len() + bytes.len().div_ceil(3) * 4);
    out.push_str(BIN_URI_START);
    STANDARD.encode_string(bytes, &mut out);
    out
}

/// Unwraps a binary data URI.
///
/// Returns `None` when `s` is not a data URI, `Some(Err(_))` when the payload
/// is not valid base64.
pub fn unwrap_binary(s: &str) -> Option<Result<Vec<u8>, base64::DecodeError>> {
    s.strip_prefix(BIN_URI_START)
        .map(|payload| STANDARD.decode(payload))
}

/// Base64 text of `bytes` without the data URI prefix, as used on the wire by `B`.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn from_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(text)
}
