//! Streaming decode iterator.

use std::iter::FusedIterator;

use crate::record::{self, MAX_RECORD_LEN};
use crate::Error;

/// Iterator over the values of an encoded buffer.
///
/// Yields every value that precedes a malformed record, then the error once,
/// then stops. This is how callers get at partial results; [`crate::decode`]
/// discards them.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Decoder<'a> {
    /// Start decoding at the front of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            failed: false,
        }
    }

    /// Byte offset of the next record.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<i32, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.bytes.len() {
            return None;
        }
        match record::decode_one(&self.bytes[self.pos..]) {
            Ok((value, used)) => {
                self.pos += used;
                Some(Ok(value))
            }
            Err(e) => {
                self.failed = true;
                let e = e.at_offset(self.pos);
                if let Error::Truncated {
                    offset,
                    expected,
                    available,
                } = e
                {
                    tracing::debug!(
                        target: "cint32::decode",
                        offset,
                        expected,
                        available,
                        "truncated record"
                    );
                }
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // Every item (the trailing error included) consumes between 1 and 5 bytes.
        let rest = self.bytes.len() - self.pos;
        (rest.div_ceil(MAX_RECORD_LEN), Some(rest))
    }
}

impl FusedIterator for Decoder<'_> {}
