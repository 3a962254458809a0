//! Encoding and decoding of fixed-width signed integer records.
//!
//! Serialize methods write results to `WriteBytes` trait impl, deserialize methods read from
//! `ReadBytes`. Both are defined on top of this crate. Slice-level `encode_record` /
//! `decode_record` forms are provided for single records.
//!
//! ### Encoding details
//! - each record is exactly [`RECORD_LEN`] bytes, no header, no delimiter
//! - values are signed 32-bit integers in two's-complement representation
//! - byte order is little-endian: byte 0 holds the least significant 8 bits,
//!   byte 3 the most significant
//! - values outside the signed 32-bit range are rejected, never truncated

use crate::{ReadBytes, WriteBytes, Result, Error, BytesReader};
use std::convert::{TryFrom, TryInto};

/// Encoded record length in bytes
pub const RECORD_LEN: usize = 4;

/// Encode a value into a single fixed-width record
///
/// Fails with `Error::ValueOutOfRange` when `value` does not fit a signed 32-bit integer.
#[inline]
pub fn encode_record(value: i64) -> Result<[u8; RECORD_LEN]> {
    let v = i32::try_from(value).map_err(|_| Error::ValueOutOfRange)?;
    Ok(v.to_le_bytes())
}

/// Decode a record from a buffer of exactly `RECORD_LEN` bytes
///
/// Fails with `Error::InvalidRecordLength` for shorter or longer buffers. Inverse of
/// `encode_record` for all in-range values.
#[inline]
pub fn decode_record(buf: &[u8]) -> Result<i32> {
    if buf.len() != RECORD_LEN {
        return Err(Error::InvalidRecordLength);
    }
    Ok(i32::from_le_bytes(buf.try_into().unwrap()))
}

/// Decode the record at record position `index` of a larger buffer
///
/// The window spans bytes `index * RECORD_LEN .. (index + 1) * RECORD_LEN`. Fails with
/// `Error::PrematureEndOfInput` when the window runs past the end of `buf`.
#[inline]
pub fn decode_record_at(buf: &[u8], index: usize) -> Result<i32> {
    let start = index.checked_mul(RECORD_LEN).ok_or(Error::PrematureEndOfInput)?;
    let end = start.checked_add(RECORD_LEN).ok_or(Error::PrematureEndOfInput)?;
    if end > buf.len() {
        return Err(Error::PrematureEndOfInput);
    }
    decode_record(&buf[start..end])
}

/// Write `value` as one record
#[inline]
pub fn serialize_record(writer: &mut impl WriteBytes, value: i64) -> Result {
    writer.write(&encode_record(value)?)
}

/// Read one record, advancing the reader by `RECORD_LEN` bytes
#[inline]
pub fn deserialize_record(reader: &mut impl ReadBytes) -> Result<i32> {
    reader.read(RECORD_LEN, |buf| Ok(i32::from_le_bytes(buf.try_into().unwrap())))
}

/// Decode a stream of concatenated records
///
/// Fails with `Error::InvalidRecordLength` when the stream length is not a multiple of
/// `RECORD_LEN`; partial trailing records are never silently dropped.
pub fn decode_records(buf: &[u8]) -> Result<Vec<i32>> {
    if buf.len() % RECORD_LEN != 0 {
        return Err(Error::InvalidRecordLength);
    }
    let mut reader = BytesReader::new(buf);
    let mut values = Vec::with_capacity(buf.len() / RECORD_LEN);
    while !reader.remaining_buffer().is_empty() {
        values.push(deserialize_record(&mut reader)?);
    }
    Ok(values)
}
