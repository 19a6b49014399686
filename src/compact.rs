//! Serde adapter: store a `Vec<i32>` as its encoded byte string.
//!
//! ```ignore
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Frame {
//!     #[serde(with = "cint32::compact")]
//!     offsets: Vec<i32>,
//! }
//! ```

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserializer, Serializer};

/// Serialize `values` as a byte string.
pub fn serialize<S>(values: &[i32], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_bytes(&crate::encode(values))
}

/// Deserialize a byte string produced by [`serialize`].
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_bytes(CompactVisitor)
}

struct CompactVisitor;

impl<'de> Visitor<'de> for CompactVisitor {
    type Value = Vec<i32>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a cint32-encoded byte string")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        crate::decode(v).map_err(E::custom)
    }

    // Self-describing formats without a native bytes type (JSON) hand us a sequence.
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        crate::decode(&bytes).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Frame {
        id: u32,
        #[serde(with = "crate::compact")]
        values: Vec<i32>,
    }

    #[test]
    fn postcard_roundtrip() {
        let frame = Frame {
            id: 7,
            values: vec![0, 1, -1, 300, -70_000, i32::MIN],
        };
        let bytes = postcard::to_allocvec(&frame).unwrap();
        let back: Frame = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(back, frame);
    }

    #[test]
    fn payload_is_the_encoded_buffer() {
        let frame = Frame {
            id: 1,
            values: vec![1, 2, 3],
        };
        let bytes = postcard::to_allocvec(&frame).unwrap();
        // id varint, bytes length varint, then the three single-byte records.
        assert_eq!(bytes, vec![1, 3, 1, 2, 3]);
    }

    #[test]
    fn truncated_payload_is_a_deserialize_error() {
        // id = 1, a 2-byte string holding an incomplete medium record.
        let bytes = [1u8, 2, 0x80, 0x02];
        let err = postcard::from_bytes::<Frame>(&bytes);
        assert!(err.is_err());
    }
}
