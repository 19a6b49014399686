//! Per-value record framing.
//!
//! Format: one record per value, self-delimiting, little-endian payloads.
//!
//! | kind   | bytes | layout                         |
//! |--------|-------|--------------------------------|
//! | small  | 1     | the value as an `i8`           |
//! | medium | 3     | `0x80`, low byte, high byte    |
//! | large  | 5     | `0x81`, 4 bytes little-endian  |
//!
//! The small domain stops at `-126` so that the two tag bytes (`-128` and
//! `-127` when read as `i8`) never appear as a lone small record.

use crate::Error;

/// Leading byte of a 3-byte record.
pub const MEDIUM_TAG: u8 = 0x80;

/// Leading byte of a 5-byte record.
pub const LARGE_TAG: u8 = 0x81;

/// Smallest value encoded as a single byte.
pub const SMALL_MIN: i32 = -126;

/// Largest value encoded as a single byte.
pub const SMALL_MAX: i32 = 127;

/// Smallest value encoded as a medium record.
///
/// `-32768` is deliberately left to the large record.
pub const MEDIUM_MIN: i32 = -32767;

/// Largest value encoded as a medium record.
pub const MEDIUM_MAX: i32 = 32767;

/// Longest record, in bytes.
pub const MAX_RECORD_LEN: usize = 5;

/// Shape of a single encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// One byte holding the value itself.
    Small,
    /// `MEDIUM_TAG` plus two payload bytes.
    Medium,
    /// `LARGE_TAG` plus four payload bytes.
    Large,
}

impl RecordKind {
    /// Classify a value (first matching range wins).
    pub fn of(value: i32) -> Self {
        if (SMALL_MIN..=SMALL_MAX).contains(&value) {
            RecordKind::Small
        } else if (MEDIUM_MIN..=MEDIUM_MAX).contains(&value) {
            RecordKind::Medium
        } else {
            RecordKind::Large
        }
    }

    /// Classify the leading byte of a record.
    pub fn from_tag(byte: u8) -> Self {
        match byte {
            MEDIUM_TAG => RecordKind::Medium,
            LARGE_TAG => RecordKind::Large,
            _ => RecordKind::Small,
        }
    }

    /// Total record length, tag included.
    pub const fn len(self) -> usize {
        match self {
            RecordKind::Small => 1,
            RecordKind::Medium => 3,
            RecordKind::Large => MAX_RECORD_LEN,
        }
    }
}

/// Reinterpret a byte as two's-complement signed.
#[inline]
pub const fn signed_byte(u: u8) -> i8 {
    u as i8
}

/// Append one record for `value`, returning the number of bytes written.
pub fn encode_one(value: i32, out: &mut Vec<u8>) -> usize {
    let kind = RecordKind::of(value);
    let le = value.to_le_bytes();
    match kind {
        RecordKind::Small => out.push(le[0]),
        RecordKind::Medium => {
            out.push(MEDIUM_TAG);
            out.extend_from_slice(&le[..2]);
        }
        RecordKind::Large => {
            out.push(LARGE_TAG);
            out.extend_from_slice(&le);
        }
    }
    kind.len()
}

/// Decode the record at the front of `bytes`, returning (value, bytes_consumed).
///
/// A truncation error reports `offset: 0`; callers scanning a larger buffer
/// rebase it onto their cursor.
pub fn decode_one(bytes: &[u8]) -> Result<(i32, usize), Error> {
    let (&tag, payload) = bytes.split_first().ok_or(Error::Empty)?;
    let kind = RecordKind::from_tag(tag);
    let need = kind.len();
    if bytes.len() < need {
        return Err(Error::Truncated {
            offset: 0,
            expected: need,
            available: bytes.len(),
        });
    }

    let value = match kind {
        RecordKind::Small => i32::from(signed_byte(tag)),
        RecordKind::Medium => i32::from(payload[0]) | (i32::from(signed_byte(payload[1])) << 8),
        RecordKind::Large => {
            i32::from(payload[0])
                | (i32::from(payload[1]) << 8)
                | (i32::from(payload[2]) << 16)
                | (i32::from(signed_byte(payload[3])) << 24)
        }
    };
    Ok((value, need))
}
