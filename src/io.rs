//! Interop with the `embedded-io` traits and, with the `std` feature,
//! the `std::io` traits.
//!
//! Reads never fail: at the end of the data they return 0 bytes.
//! Writes are all-or-nothing, so a successful write always reports the
//! whole input.

use embedded_io::SeekFrom;

use crate::error::StreamError;
use crate::growth::GrowthPolicy;
use crate::memory_stream::MemoryStream;
use crate::stream::SeekOrigin;

/// Translates a `SeekFrom` and returns the new position.
fn seek_from<G: GrowthPolicy>(
    stream: &mut MemoryStream<G>,
    pos: SeekFrom,
) -> Result<u64, StreamError> {
    let (offset, origin) = match pos {
        SeekFrom::Start(offset) => (
            isize::try_from(offset).map_err(|_| StreamError::InvalidSeekOffset)?,
            SeekOrigin::Begin,
        ),
        SeekFrom::Current(offset) => (
            isize::try_from(offset).map_err(|_| StreamError::InvalidSeekOffset)?,
            SeekOrigin::Current,
        ),
        SeekFrom::End(offset) => (
            isize::try_from(offset).map_err(|_| StreamError::InvalidSeekOffset)?,
            SeekOrigin::End,
        ),
    };
    stream.seek(offset, origin)?;
    Ok(stream.position() as u64)
}

impl<G: GrowthPolicy> embedded_io::ErrorType for MemoryStream<G> {
    type Error = StreamError;
}

impl<G: GrowthPolicy> embedded_io::Read for MemoryStream<G> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(self.read_into(buf))
    }
}

impl<G: GrowthPolicy> embedded_io::BufRead for MemoryStream<G> {
    fn fill_buf(&mut self) -> Result<&[u8], Self::Error> {
        let start = self.position();
        Ok(&self.buffer()[start..])
    }

    fn consume(&mut self, amt: usize) {
        let _ = self.read_up_to(amt);
    }
}

impl<G: GrowthPolicy> embedded_io::Write for MemoryStream<G> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        MemoryStream::write(self, buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<G: GrowthPolicy> embedded_io::Seek for MemoryStream<G> {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        seek_from(self, pos)
    }
}

#[cfg(feature = "std")]
mod std_io {
    use super::seek_from;
    use crate::growth::GrowthPolicy;
    use crate::memory_stream::MemoryStream;

    impl<G: GrowthPolicy> std::io::Read for MemoryStream<G> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            Ok(self.read_into(buf))
        }
    }

    impl<G: GrowthPolicy> std::io::BufRead for MemoryStream<G> {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            let start = self.position();
            Ok(&self.buffer()[start..])
        }

        fn consume(&mut self, amt: usize) {
            let _ = self.read_up_to(amt);
        }
    }

    impl<G: GrowthPolicy> std::io::Write for MemoryStream<G> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(MemoryStream::write(self, buf)?)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<G: GrowthPolicy> std::io::Seek for MemoryStream<G> {
        fn seek(&mut self, pos: std::io::SeekFrom) -> std::io::Result<u64> {
            let pos = match pos {
                std::io::SeekFrom::Start(offset) => embedded_io::SeekFrom::Start(offset),
                std::io::SeekFrom::Current(offset) => embedded_io::SeekFrom::Current(offset),
                std::io::SeekFrom::End(offset) => embedded_io::SeekFrom::End(offset),
            };
            Ok(seek_from(self, pos)?)
        }
    }
}
