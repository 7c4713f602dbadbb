//! Fixed-layout binary encodings for everything the distributed reductions put on the wire.
//!
//! All numbers are little-endian. Floating-point values always travel as `f64`, regardless of
//! the crate's [`Float`] type, so a value survives the round trip bit-for-bit. Composite records
//! start with a one-byte layout version:
//!
//! | payload | layout |
//! |---|---|
//! | scalar | `value: f64` |
//! | interval block | `version: u8`, then `n * (begin: f64, end: f64)` |
//! | characteristic | `version: u8`, `score: f64`, `index: i64` (`-1` for no interval) |

use crate::{
    algorithms::strongin::{Characteristic, Interval},
    core::CommError,
    Float,
};

/// The layout version written in front of every composite record.
pub const WIRE_VERSION: u8 = 1;

/// The size in bytes of an encoded scalar.
pub const FLOAT_SIZE: usize = 8;
/// The size in bytes of one encoded [`Interval`] inside an interval block.
pub const INTERVAL_SIZE: usize = 2 * FLOAT_SIZE;
/// The size in bytes of an encoded [`Characteristic`].
pub const CHARACTERISTIC_SIZE: usize = 1 + FLOAT_SIZE + 8;

fn put_float(out: &mut Vec<u8>, value: Float) {
    out.extend_from_slice(&(value as f64).to_le_bytes());
}

fn take_float(bytes: &[u8]) -> Float {
    let mut raw = [0u8; FLOAT_SIZE];
    raw.copy_from_slice(&bytes[..FLOAT_SIZE]);
    f64::from_le_bytes(raw) as Float
}

fn check_version(what: &'static str, bytes: &[u8]) -> Result<(), CommError> {
    match bytes.first() {
        Some(&WIRE_VERSION) => Ok(()),
        Some(&version) => Err(CommError::UnsupportedVersion { what, version }),
        None => Err(CommError::Malformed {
            what,
            expected: 1,
            actual: 0,
        }),
    }
}

/// Encode a single scalar.
pub fn encode_float(value: Float) -> Vec<u8> {
    let mut out = Vec::with_capacity(FLOAT_SIZE);
    put_float(&mut out, value);
    out
}

/// Decode a single scalar.
///
/// # Errors
///
/// Returns [`CommError::Malformed`] if the payload is not exactly [`FLOAT_SIZE`] bytes long.
pub fn decode_float(bytes: &[u8]) -> Result<Float, CommError> {
    if bytes.len() != FLOAT_SIZE {
        return Err(CommError::Malformed {
            what: "scalar",
            expected: FLOAT_SIZE,
            actual: bytes.len(),
        });
    }
    Ok(take_float(bytes))
}

/// Encode a contiguous block of intervals.
pub fn encode_intervals(intervals: &[Interval]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + intervals.len() * INTERVAL_SIZE);
    out.push(WIRE_VERSION);
    for interval in intervals {
        put_float(&mut out, interval.begin);
        put_float(&mut out, interval.end);
    }
    out
}

/// Decode a block of exactly `expected` intervals.
///
/// # Errors
///
/// Returns a [`CommError`] if the version is unknown or the block does not hold exactly
/// `expected` intervals.
pub fn decode_intervals(bytes: &[u8], expected: usize) -> Result<Vec<Interval>, CommError> {
    check_version("interval block", bytes)?;
    let expected_len = 1 + expected * INTERVAL_SIZE;
    if bytes.len() != expected_len {
        return Err(CommError::Malformed {
            what: "interval block",
            expected: expected_len,
            actual: bytes.len(),
        });
    }
    Ok(bytes[1..]
        .chunks_exact(INTERVAL_SIZE)
        .map(|chunk| Interval {
            begin: take_float(chunk),
            end: take_float(&chunk[FLOAT_SIZE..]),
        })
        .collect())
}

/// Encode a [`Characteristic`] record.
pub fn encode_characteristic(record: &Characteristic) -> Vec<u8> {
    let mut out = Vec::with_capacity(CHARACTERISTIC_SIZE);
    out.push(WIRE_VERSION);
    put_float(&mut out, record.score);
    let index = record.index.map_or(-1, |index| index as i64);
    out.extend_from_slice(&index.to_le_bytes());
    out
}

/// Decode a [`Characteristic`] record.
///
/// # Errors
///
/// Returns a [`CommError`] if the version is unknown, the record has the wrong length, or the
/// index is negative without being the `-1` sentinel.
pub fn decode_characteristic(bytes: &[u8]) -> Result<Characteristic, CommError> {
    check_version("characteristic", bytes)?;
    if bytes.len() != CHARACTERISTIC_SIZE {
        return Err(CommError::Malformed {
            what: "characteristic",
            expected: CHARACTERISTIC_SIZE,
            actual: bytes.len(),
        });
    }
    let score = take_float(&bytes[1..]);
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[1 + FLOAT_SIZE..]);
    let index = match i64::from_le_bytes(raw) {
        -1 => None,
        index if index >= 0 => Some(index as usize),
        _ => {
            return Err(CommError::Malformed {
                what: "characteristic index",
                expected: CHARACTERISTIC_SIZE,
                actual: bytes.len(),
            })
        }
    };
    Ok(Characteristic { score, index })
}
