//! Delta (difference) helpers.
//!
//! Slowly-moving series (timestamps, counters, sorted offsets) turn into
//! mostly-small deltas, which is the shape the codec is built for.
//! Differences wrap, so every `i32` sequence is accepted and restored exactly.

use crate::Error;

/// First value verbatim, then successive wrapping differences.
pub fn deltas_from_values(values: &[i32]) -> Vec<i32> {
    let mut out = Vec::with_capacity(values.len());
    let mut prev = 0i32;
    for (i, &v) in values.iter().enumerate() {
        if i == 0 {
            out.push(v);
        } else {
            out.push(v.wrapping_sub(prev));
        }
        prev = v;
    }
    out
}

/// Inverse of [`deltas_from_values`].
pub fn values_from_deltas(deltas: &[i32]) -> Vec<i32> {
    let mut out = Vec::with_capacity(deltas.len());
    let mut cur = 0i32;
    for &d in deltas {
        cur = cur.wrapping_add(d);
        out.push(cur);
    }
    out
}

/// Delta-transform `values`, then encode.
pub fn encode_deltas(values: &[i32]) -> Vec<u8> {
    crate::encode(&deltas_from_values(values))
}

/// Decode, then undo the delta transform.
pub fn decode_deltas(bytes: &[u8]) -> Result<Vec<i32>, Error> {
    let deltas = crate::decode(bytes)?;
    Ok(values_from_deltas(&deltas))
}
