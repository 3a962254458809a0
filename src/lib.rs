//! Fixed-width record codec and grid fixture generator.
//!
//! Encodes signed 32-bit cell values as 4-byte little-endian two's-complement
//! records, and generates small grid fixture files of sequential values for
//! raw data readers.
//!
//! *Features:*
//!
//! * explicit range and length checks: out-of-range values and short or misaligned
//!   buffers are errors, never silent truncation
//! * windowed decoding of a single record at any record position of a larger buffer
//! * reader/writer traits for encoding buffers, so you can implement your own or use
//!   implementations provided by the crate
//! * exact encoded size of a grid is known up front, for effective buffer management
//!
//! ### Cargo.toml features and dependencies
//!
//! * `serde` (on by default): derive `Serialize`/`Deserialize` for [`Grid`], so grid
//!   geometry can be read from serialized headers. If you need only the codec, you
//!   can opt out.

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod errors;
#[doc(inline)]
pub use errors::Error;

/// A convenient Result type
pub type Result<T = (), E = errors::Error> = std::result::Result<T, E>;

pub mod buf;
pub mod record;
pub mod grid;

#[doc(inline)]
pub use buf::{ReadBytes, WriteBytes, BytesReader, BytesWriter};
#[doc(inline)]
pub use grid::Grid;
#[doc(inline)]
pub use record::{decode_record, decode_record_at, encode_record, RECORD_LEN};

/// Encode a sequence of values into a byte vector, one record per value
///
/// *Example*
/// ```
/// # use gridraw::encode_records;
/// let buf = encode_records(vec![1, -1]).unwrap();
/// assert_eq!(buf, vec![1, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
/// ```
pub fn encode_records(values: impl IntoIterator<Item = i64>) -> Result<Vec<u8>> {
    let mut byte_buf = Vec::new();
    for value in values {
        record::serialize_record(&mut byte_buf, value)?;
    }
    Ok(byte_buf)
}

/// Decode a buffer of concatenated records into values
///
/// *Example*
/// ```
/// # use gridraw::decode_records;
/// let values = decode_records(&[10, 0, 0, 0, 11, 0, 0, 0]).unwrap();
/// assert_eq!(values, vec![10, 11]);
/// ```
pub fn decode_records<I: AsRef<[u8]>>(input: I) -> Result<Vec<i32>> {
    record::decode_records(input.as_ref())
}
