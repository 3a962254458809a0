//! Types and traits for record encoding and decoding buffers
//!
use crate::{Result, Error};

/// Simple byte reader from buffer
///
/// If you need to read from `&[u8]`, you may use `BytesReader` provided by this crate.
pub trait ReadBytes {
    /// Peek `n` bytes from head
    fn peek<F, R>(&mut self, n: usize, f: F) -> Result<R> where F: FnOnce(&[u8]) -> Result<R>;

    /// Advance buffer head by `n` bytes. `n` should be smaller than remaining buffer size.
    fn advance(&mut self, n: usize);

    /// Get `n` bytes from the beginning of buffer, advance by `n` bytes
    fn read<F, R>(&mut self, n: usize, f: F) -> Result<R> where F: FnOnce(&[u8]) -> Result<R> {
        let r = self.peek(n, f)?;
        self.advance(n);
        Ok(r)
    }
    /// Returns view into remaining buffer
    fn remaining_buffer(&mut self) -> &'_[u8];

    /// Check if buffer is fully consumed (empty)
    fn is_complete(&mut self) -> Result {
        if self.remaining_buffer().is_empty() {
            Ok(())
        } else {
            Err(Error::BufferUnderflow)
        }
    }
}

// forwarding for being able to use `&mut ReadBytes` in place of `ReadBytes`
impl<'a, T> ReadBytes for &'a mut T where T: ReadBytes  {
    fn peek<F, R>(&mut self, n: usize, f: F) -> Result<R> where F: FnOnce(&[u8]) -> Result<R> {
        (*self).peek(n, f)
    }
    fn advance(&mut self, n: usize) {
        (*self).advance(n)
    }
    fn remaining_buffer(&mut self) -> &'_[u8] { (*self).remaining_buffer() }
}

/// Adapter type which implements read buffer over byte slice
///
/// Implements `ReadBytes` and is intended as input for record decoding.
pub struct BytesReader<'a> {
    buf: &'a [u8],
}

impl<'a> BytesReader<'a> {
    /// Constructs reader from provided byte slice
    #[must_use] pub fn new(buf: &'a [u8]) -> Self { Self { buf } }
}

impl <'a> ReadBytes for BytesReader<'a> {
    fn peek<F, R>(&mut self, n: usize, f: F) -> Result<R>
        where F: FnOnce(&[u8]) -> Result<R>,
    {
        if n <= self.buf.len() {
            f(&self.buf[..n])
        } else {
            Err(Error::PrematureEndOfInput)
        }
    }
    fn advance(&mut self, n: usize) {
        self.buf = &self.buf[n..];
    }
    fn remaining_buffer(&mut self) -> &'_[u8] { self.buf }
}

impl std::io::Read for BytesReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        std::io::Read::read(&mut self.buf, buf)
    }
}

/// Trait for writer to the byte buffer
pub trait WriteBytes {
    /// Write to the byte buffer
    fn write(&mut self, value: &[u8]) -> Result;
}

/// Adapter type which implements fixed-capacity write buffer over mutable byte slice
///
/// `BytesWriter` implements `WriteBytes`. Writes past the end of the slice fail with
/// `Error::BufferOverflow`; `is_complete()` verifies exact fill.
pub struct BytesWriter<'a> {
    buf: &'a mut [u8],
    head: usize,
}

impl<'a> BytesWriter<'a> {
    /// Use provided byte slice as buffer
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, head: 0 }
    }
    /// Number of bytes written so far
    #[must_use]
    pub fn position(&self) -> usize { self.head }

    /// Checks if buffer is completely filled
    pub fn is_complete(&self) -> Result {
        if self.head == self.buf.len() {
            Ok(())
        } else {
            Err(Error::BufferUnderflow)
        }
    }
}

impl<'a> WriteBytes for BytesWriter<'a> {
    fn write(&mut self, value: &[u8]) -> Result {
        if (self.head + value.len()) > self.buf.len() {
            Err(Error::BufferOverflow)
        } else {
            self.buf[self.head..(self.head + value.len())].copy_from_slice(value);
            self.head += value.len();
            Ok(())
        }
    }
}

// forwarding for being able to use `&mut WriteBytes` in place of `WriteBytes`
impl<T> WriteBytes for &mut T where T: WriteBytes {
    fn write(&mut self, buf: &[u8]) -> Result { (*self).write(buf) }
}

/// Pushes data to the vector, growing it as needed
impl WriteBytes for Vec<u8> {
    fn write(&mut self, buf: &[u8]) -> Result {
        self.extend_from_slice(buf);
        Ok(())
    }
}

#[test]
fn test_buffer() {
    let mut byte_buf = vec![0_u8; 5];
    let mut wb = BytesWriter::new(byte_buf.as_mut_slice());
    wb.write(b"aa").unwrap();
    wb.write(b"bbc").unwrap();
    wb.is_complete().unwrap();
    assert!(matches!(wb.write(b"d"), Err(Error::BufferOverflow)));
    assert_eq!(&byte_buf, b"aabbc");
    let mut rb = BytesReader::new(byte_buf.as_slice());
    assert_eq!(rb.read(3, |b| Ok(b == b"aab")).unwrap(), true);
    assert_eq!(rb.read(2, |b| Ok(b == b"bc")).unwrap(), true);
    rb.is_complete().unwrap();
    assert!(matches!(rb.read(1, |_| Ok(())), Err(Error::PrematureEndOfInput)));
}
