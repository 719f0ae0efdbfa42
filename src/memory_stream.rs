use alloc::vec::Vec;

use crate::config::StreamConfig;
use crate::error::StreamError;
use crate::growth::{GrowthPolicy, PowerOfTwo};
use crate::integer::Integer;
use crate::storage::Storage;
use crate::stream::{InputStream, OutputStream, SeekOrigin, Seekable};

/// A seekable read/write stream over an owned, growable byte region.
///
/// Invariant: `position <= count <= allocated`.
pub struct MemoryStream<G = PowerOfTwo> {
    storage: Storage<G>,
    position: usize,
    end: usize,
}

impl MemoryStream {
    /// Creates an expandable stream. Nothing is allocated until the first write.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StreamConfig::Expandable)
    }

    /// Creates an expandable stream with `capacity` bytes allocated up front.
    #[must_use]
    pub fn with_reserved_capacity(capacity: usize) -> Self {
        Self::with_config(StreamConfig::Reserve(capacity))
    }

    /// Creates a non-expandable stream that holds at most `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(StreamConfig::Fixed(capacity))
    }

    /// Creates a stream from `config` with the default doubling growth.
    #[must_use]
    pub fn with_config(config: StreamConfig) -> Self {
        Self::with_growth_policy(config, PowerOfTwo)
    }
}

impl Default for MemoryStream {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GrowthPolicy> MemoryStream<G> {
    /// Creates a stream that grows according to `policy`.
    ///
    /// The policy is never consulted for `StreamConfig::Fixed`.
    #[must_use]
    pub fn with_growth_policy(config: StreamConfig, policy: G) -> Self {
        let capacity = config.initial_capacity();
        let storage = if config.is_expandable() {
            Storage::expandable(capacity, policy)
        } else {
            Storage::fixed(capacity, policy)
        };
        Self {
            storage,
            position: 0,
            end: 0,
        }
    }

    /// Offset of the next read or write.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of valid bytes, the high-water mark of all writes.
    #[must_use]
    pub fn count(&self) -> usize {
        self.end
    }

    /// Number of valid bytes after the cursor.
    #[must_use]
    pub fn remain(&self) -> usize {
        self.end - self.position
    }

    /// Size of the backing region.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.storage.capacity()
    }

    /// True when the cursor is at `count`, nothing is left to read.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.position == self.end
    }

    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.storage.is_expandable()
    }

    /// All valid bytes, `0..count`, regardless of the cursor.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.storage.as_slice()[..self.end]
    }

    /// Consumes the stream, returning the valid bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.storage.into_vec(self.end)
    }

    /// Moves the cursor to `offset` relative to `origin`.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InvalidSeekOffset` if the target is negative or
    /// beyond `count`. The cursor is not moved.
    pub fn seek(&mut self, offset: isize, origin: SeekOrigin) -> Result<(), StreamError> {
        let base = match origin {
            SeekOrigin::Begin => 0,
            SeekOrigin::Current => self.position,
            SeekOrigin::End => self.end,
        };
        let target = base
            .checked_add_signed(offset)
            .filter(|&target| target <= self.end)
            .ok_or(StreamError::InvalidSeekOffset)?;
        self.position = target;
        Ok(())
    }

    /// Moves the cursor to the start. Same as `seek(0, SeekOrigin::Begin)`,
    /// which cannot fail.
    ///
    /// This inherent method shadows `embedded_io::Seek::rewind`; call that
    /// one as `Seek::rewind(&mut stream)` to get a `Result`.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Writes `bytes` at the cursor, overwriting existing data and
    /// extending `count` if the write ends past it.
    ///
    /// Returns `bytes.len()`.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::NotEnoughSpace` if the stream is not expandable
    /// and the write would end past its capacity. Nothing is written.
    pub fn write(&mut self, bytes: &[u8]) -> Result<usize, StreamError> {
        if bytes.is_empty() {
            return Ok(0);
        }

        let new_end = self
            .position
            .checked_add(bytes.len())
            .ok_or(StreamError::NotEnoughSpace)?;
        self.storage.ensure(new_end, self.end)?;

        self.storage.as_mut_slice()[self.position..new_end].copy_from_slice(bytes);
        self.position = new_end;
        if new_end > self.end {
            self.end = new_end;
        }

        Ok(bytes.len())
    }

    /// Reads exactly `len` bytes, returning them without copying.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InsufficientData` if fewer than `len` bytes
    /// remain. The cursor is not moved.
    pub fn read_slice(&mut self, len: usize) -> Result<&[u8], StreamError> {
        if self.remain() < len {
            return Err(StreamError::InsufficientData);
        }
        let start = self.position;
        self.position += len;
        Ok(&self.storage.as_slice()[start..self.position])
    }

    /// Reads at most `max_len` bytes, returning them without copying.
    /// The view is empty at the end of the data.
    pub fn read_up_to(&mut self, max_len: usize) -> &[u8] {
        let len = self.remain().min(max_len);
        let start = self.position;
        self.position += len;
        &self.storage.as_slice()[start..self.position]
    }

    /// Copies as many bytes as fit into `buf` and returns the number copied.
    pub fn read_into(&mut self, buf: &mut [u8]) -> usize {
        let bytes = self.read_up_to(buf.len());
        let len = bytes.len();
        buf[..len].copy_from_slice(bytes);
        len
    }

    /// Writes the native byte representation of `value`.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::NotEnoughSpace` like [`MemoryStream::write`].
    pub fn write_integer<T: Integer>(&mut self, value: T) -> Result<(), StreamError> {
        self.write(value.to_native_bytes().as_ref())?;
        Ok(())
    }

    /// Reads `size_of::<T>()` bytes and reinterprets them as `T`.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InsufficientData` if fewer bytes remain.
    /// The cursor is not moved.
    pub fn read_integer<T: Integer>(&mut self) -> Result<T, StreamError> {
        let bytes = self.read_slice(T::SIZE)?;
        Ok(T::from_native_bytes(bytes))
    }
}

impl<G: GrowthPolicy> InputStream for MemoryStream<G> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StreamError> {
        Ok(self.read_into(buf))
    }
}

impl<G: GrowthPolicy> OutputStream for MemoryStream<G> {
    fn write(&mut self, bytes: &[u8]) -> Result<usize, StreamError> {
        MemoryStream::write(self, bytes)
    }
}

impl<G: GrowthPolicy> Seekable for MemoryStream<G> {
    fn seek(&mut self, offset: isize, origin: SeekOrigin) -> Result<(), StreamError> {
        MemoryStream::seek(self, offset, origin)
    }
}

impl<G> core::fmt::Debug for MemoryStream<G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryStream")
            .field("position", &self.position)
            .field("count", &self.end)
            .field("allocated", &self.storage.capacity())
            .finish_non_exhaustive()
    }
}
