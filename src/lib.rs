//! # cint32
//!
//! A compact, tag-prefixed codec for sequences of `i32` values that are mostly
//! small in magnitude (deltas, counters, indices).
//!
//! ## Format
//!
//! Each value becomes one self-delimiting record; a buffer is simply the
//! concatenation of its records, with no length prefix.
//!
//! - `[-126, 127]`: 1 byte, the value itself.
//! - `[-32767, 32767]` otherwise: `0x80` then 2 bytes little-endian.
//! - everything else: `0x81` then 4 bytes little-endian.
//!
//! ## Scope (deliberate)
//!
//! - In-memory buffers only: no framing, checksums, or versioning.
//! - The only decode failure is a truncated multi-byte record.
//!
//! ```
//! let bytes = cint32::encode(&[0, 300, -1, 1 << 20]);
//! assert_eq!(bytes.len(), 1 + 3 + 1 + 5);
//! assert_eq!(cint32::decode(&bytes).unwrap(), vec![0, 300, -1, 1 << 20]);
//! ```

#![warn(missing_docs)]

pub mod decoder;
pub mod delta;
pub mod record;

/// Serde adapter for `#[serde(with = "cint32::compact")]` (feature-gated).
#[cfg(feature = "serde")]
pub mod compact;

pub use decoder::Decoder;
pub use delta::{decode_deltas, encode_deltas};
pub use record::{RecordKind, LARGE_TAG, MEDIUM_TAG};

/// Errors returned by `cint32`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A multi-byte tag was found with too few bytes left to complete its record.
    #[error("truncated record at offset {offset}: expected {expected} bytes, {available} available")]
    Truncated {
        /// Offset of the tag byte in the input.
        offset: usize,
        /// Record length announced by the tag (3 or 5).
        expected: usize,
        /// Bytes left from the tag to the end of input.
        available: usize,
    },
    /// A single record was requested from an empty slice.
    #[error("no bytes to decode")]
    Empty,
}

impl Error {
    pub(crate) fn at_offset(self, base: usize) -> Self {
        match self {
            Error::Truncated {
                offset,
                expected,
                available,
            } => Error::Truncated {
                offset: base + offset,
                expected,
                available,
            },
            other => other,
        }
    }
}

/// Exact number of bytes [`encode`] will produce for `values`.
pub fn encoded_len(values: &[i32]) -> usize {
    values.iter().map(|&v| RecordKind::of(v).len()).sum()
}

/// Encode `values` into a fresh buffer.
pub fn encode(values: &[i32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(values));
    encode_into(values, &mut out);
    out
}

/// Append the records for `values` to `out`.
pub fn encode_into(values: &[i32], out: &mut Vec<u8>) {
    for &v in values {
        record::encode_one(v, out);
    }
}

/// Decode a whole buffer.
///
/// On error nothing decoded so far is returned; use [`Decoder`] to keep the
/// values preceding a malformed record.
pub fn decode(bytes: &[u8]) -> Result<Vec<i32>, Error> {
    let mut out = Vec::new();
    decode_into(bytes, &mut out)?;
    Ok(out)
}

/// Append the values of `bytes` to `out`.
///
/// On error `out` is left as it was before the call.
pub fn decode_into(bytes: &[u8], out: &mut Vec<i32>) -> Result<(), Error> {
    let start = out.len();
    let decoder = Decoder::new(bytes);
    out.reserve(decoder.size_hint().0);
    for item in decoder {
        match item {
            Ok(v) => out.push(v),
            Err(e) => {
                out.truncate(start);
                return Err(e);
            }
        }
    }
    Ok(())
}

/// Number of records in `bytes`, checked for truncation.
pub fn count_values(bytes: &[u8]) -> Result<usize, Error> {
    Decoder::new(bytes).try_fold(0usize, |n, item| item.map(|_| n + 1))
}
