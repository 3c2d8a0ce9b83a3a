//! Hex text encoding for the engine boundary
//!
//! Bytes always leave as lowercase hex. Decoding accepts either case, since
//! engines written against other runtimes are not consistent about it.

/// Errors that can occur while decoding wire text
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("invalid length, expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}

/// Encode bytes as lowercase hex
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode hex text of any even length
pub fn decode(text: &str) -> Result<Vec<u8>, WireError> {
    Ok(hex::decode(text)?)
}

/// Decode hex text that must hold exactly `N` bytes
pub fn decode_array<const N: usize>(text: &str) -> Result<[u8; N], WireError> {
    let bytes = decode(text)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| WireError::InvalidLength { expected: N, got })
}
