//! Capability traits.
//!
//! Each capability can be required on its own, so code that only reads
//! does not depend on writing or seeking, and any backing implementation
//! can stand in for `MemoryStream`.

use crate::error::StreamError;

/// Origin of a seek offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekOrigin {
    /// Offset from the start of the stream
    Begin,
    /// Offset from the cursor
    Current,
    /// Offset from the end of the valid data
    End,
}

/// Readable capability.
pub trait InputStream {
    /// Reads up to `buf.len()` bytes into the front of `buf`.
    ///
    /// Returns the number of bytes copied, 0 at the end of the data.
    ///
    /// # Errors
    ///
    /// Implementation-specific. `MemoryStream` never fails here.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StreamError>;
}

/// Writable capability.
pub trait OutputStream {
    /// Writes `bytes` and returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// `StreamError::NotEnoughSpace` if the bytes do not fit.
    fn write(&mut self, bytes: &[u8]) -> Result<usize, StreamError>;
}

/// Both readable and writable.
pub trait Stream: InputStream + OutputStream {}

impl<T: InputStream + OutputStream + ?Sized> Stream for T {}

/// Seekable capability.
pub trait Seekable {
    /// Moves the cursor to `offset` relative to `origin`.
    ///
    /// # Errors
    ///
    /// `StreamError::InvalidSeekOffset` if the target is outside the data.
    fn seek(&mut self, offset: isize, origin: SeekOrigin) -> Result<(), StreamError>;
}

impl<T: InputStream + ?Sized> InputStream for &mut T {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StreamError> {
        (**self).read(buf)
    }
}

impl<T: OutputStream + ?Sized> OutputStream for &mut T {
    fn write(&mut self, bytes: &[u8]) -> Result<usize, StreamError> {
        (**self).write(bytes)
    }
}

impl<T: Seekable + ?Sized> Seekable for &mut T {
    fn seek(&mut self, offset: isize, origin: SeekOrigin) -> Result<(), StreamError> {
        (**self).seek(offset, origin)
    }
}
