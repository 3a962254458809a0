//! Grid fixtures: rectangular grids of sequential cell values, encoded as record streams.
//!
use crate::record::{ self, RECORD_LEN };
use crate::{BytesWriter, Result};
use std::io::Write;
use std::path::Path;

/// Rectangular grid of sequential cell values
///
/// The cell at `(x, y)` has value `base + y * width + x`. Encoding order is row-major
/// with `y` outer, one fixed-width record per cell, no header and no padding, so the
/// encoded stream is exactly `width * height * RECORD_LEN` bytes.
///
/// ```
/// # use gridraw::Grid;
/// let grid = Grid::new(3, 3, 10);
/// let values: Vec<i64> = grid.values().collect();
/// assert_eq!(values, (10..=18).collect::<Vec<i64>>());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    /// Value of the cell at the origin; later cells count up from here
    #[cfg_attr(feature = "serde", serde(default))]
    pub base: i64,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize, base: i64) -> Self {
        Self { width, height, base }
    }

    /// Number of cells
    #[must_use]
    pub fn len(&self) -> usize { self.width * self.height }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Exact size of the encoded grid in bytes, for buffer allocations
    #[must_use]
    pub fn encoded_len(&self) -> usize { self.len() * RECORD_LEN }

    /// Cell values in encoding order (row-major, `y` outer)
    pub fn values(&self) -> impl Iterator<Item = i64> {
        #![allow(clippy::cast_possible_wrap)]
        let Self { width, height, base } = *self;
        (0..height).flat_map(move |y| (0..width).map(move |x| base + (y * width + x) as i64))
    }

    /// Encode all cells into a byte vector, one record per cell
    ///
    /// ```
    /// # use gridraw::Grid;
    /// let bytes = Grid::new(3, 3, 10).encode().unwrap();
    /// assert_eq!(bytes.len(), 36);
    /// assert_eq!(&bytes[..4], &[10, 0, 0, 0]);
    /// ```
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut byte_buf = vec![0_u8; self.encoded_len()];
        let mut writer = BytesWriter::new(byte_buf.as_mut_slice());
        for value in self.values() {
            record::serialize_record(&mut writer, value)?;
        }
        writer.is_complete()?;
        Ok(byte_buf)
    }

    /// Write the encoded grid to `out`
    pub fn write_to(&self, out: &mut impl Write) -> Result {
        out.write_all(&self.encode()?)?;
        Ok(())
    }

    /// Write the encoded grid to the file at `path`
    ///
    /// The file is created anew (truncated when present) and closed on return.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result {
        let mut file = std::fs::File::create(path)?;
        self.write_to(&mut file)
    }
}
